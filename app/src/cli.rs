use std::path::PathBuf;

use clap::{builder::PossibleValuesParser, Args, Parser, Subcommand, ValueEnum};
use lastools_command::{
    is_decimal_input,
    registry::{DEM_PRODUCTS, GRANULARITIES, TERRAIN_PRESETS},
};

#[derive(Parser, Debug)]
#[command(
    name = "lasw",
    about = "Assembles and runs LAStools commands for ground classification, DEMs and hillshades",
    version
)]
pub struct Cli {
    /// Path to a lasw.toml config file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// LAStools installation (overrides config and LASTOOLS_PATH)
    #[arg(long, global = true, value_name = "DIR")]
    pub lastools: Option<PathBuf>,

    /// Where tool output goes while it runs
    #[arg(long, global = true, value_enum, default_value_t = Relay::Console)]
    pub relay: Relay,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Relay {
    /// Print tool output as it arrives
    Console,
    /// Send each line of tool output through the logger
    Log,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Action(Action),

    /// Show the documentation for a tool or option, or list topics
    Docs {
        /// Topic name, or a tool name such as `lasground`
        topic: Option<String>,
        /// Option of that tool, e.g. `stddev`
        option: Option<String>,
    },

    /// Print the commands an action would run without running them
    Command {
        /// Print as JSON
        #[arg(long)]
        json: bool,

        #[command(subcommand)]
        action: Action,
    },
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Open a point cloud in lasview
    View {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Classify ground points with lasground
    Ground(GroundArgs),
    /// Build a DEM or hillshade with blast2dem
    Dem(DemArgs),
}

fn decimal(value: &str) -> Result<String, String> {
    if value.is_empty() || !is_decimal_input(value) {
        return Err(format!("{:?} is not a decimal number", value));
    }
    Ok(value.to_string())
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output folder (defaults to the input's folder)
    #[arg(short, long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output file name (defaults to a prefixed input name)
    #[arg(long, value_name = "NAME")]
    pub output_file: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GroundArgs {
    #[arg(short, long, required = true, num_args = 1.., value_name = "FILE")]
    pub input: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,

    #[arg(long, value_parser = decimal)]
    pub step: Option<String>,

    #[arg(long, value_parser = decimal)]
    pub stddev: Option<String>,

    #[arg(long, value_parser = decimal)]
    pub offset: Option<String>,

    #[arg(long, value_parser = decimal)]
    pub bulge: Option<String>,

    #[arg(long, value_parser = decimal)]
    pub spike: Option<String>,

    #[arg(long, value_parser = decimal)]
    pub sub: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(TERRAIN_PRESETS.iter().copied()))]
    pub terrain: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(GRANULARITIES.iter().copied()))]
    pub granularity: Option<String>,

    #[arg(long)]
    pub compute_height: bool,

    #[arg(long)]
    pub replace_z: bool,

    /// Open the result in lasview afterwards
    #[arg(long)]
    pub view: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DemArgs {
    #[arg(short, long, required = true, num_args = 1.., value_name = "FILE")]
    pub input: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,

    #[arg(long, value_parser = decimal)]
    pub step: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(DEM_PRODUCTS.iter().copied()))]
    pub product: Option<String>,

    #[arg(long)]
    pub gray: bool,

    #[arg(long = "false-color", conflicts_with = "gray")]
    pub false_color: bool,

    #[arg(long, value_parser = decimal)]
    pub kill: Option<String>,

    /// Sun azimuth in degrees clockwise from north
    #[arg(long, allow_negative_numbers = true)]
    pub azimuth: Option<f64>,

    /// Sun altitude in degrees above the horizon
    #[arg(long)]
    pub altitude: Option<f64>,

    /// Length of the light vector
    #[arg(long)]
    pub radius: Option<f64>,

    /// Open the result in lasview afterwards
    #[arg(long)]
    pub view: bool,
}
