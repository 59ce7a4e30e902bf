//! Turns parsed form values into the list of steps a run performs.

use std::path::{Path, PathBuf};

use glob::glob;
use lastools_command::{
    Blast2DemCommand, CommandBuilder as _, CommandError, CommandLine, LasGroundCommand,
    LasViewCommand, LightVector, OutputTarget, Toolkit,
};

use crate::{
    cli::{Action, DemArgs, GroundArgs, OutputArgs},
    config::AppConfig,
    error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Run(CommandLine),
    /// Open a file produced by the previous step in lasview.
    View(PathBuf),
    /// The input does not exist; reported and skipped.
    Skip(PathBuf),
}

impl Step {
    /// The command this step would run, without touching the filesystem.
    pub fn command_line(&self, toolkit: &Toolkit) -> Option<CommandLine> {
        match self {
            Self::Run(cmd) => Some(cmd.clone()),
            Self::View(path) => Some(
                LasViewCommand {
                    input: path.clone(),
                }
                .command_line(toolkit),
            ),
            Self::Skip(_) => None,
        }
    }
}

fn is_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}

/// Expands glob patterns. A pattern with no matches is kept as-is so it is
/// reported as a missing input rather than silently dropped.
pub fn expand_globs(input_patterns: &[String]) -> Result<Vec<PathBuf>, AppError> {
    let mut paths = Vec::new();
    for pattern in input_patterns {
        if !is_pattern(pattern) {
            paths.push(PathBuf::from(pattern));
            continue;
        }

        let before = paths.len();
        for entry in glob(pattern)? {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => log::warn!("skipping {}: {}", e.path().display(), e.error()),
            }
        }
        if paths.len() == before {
            paths.push(PathBuf::from(pattern));
        }
    }
    Ok(paths)
}

fn output_target(output: &OutputArgs, input_count: usize) -> Result<OutputTarget, AppError> {
    if output.output_file.is_some() && input_count > 1 {
        return Err(AppError::AmbiguousOutput(input_count));
    }
    Ok(OutputTarget {
        dir: output.output_dir.clone(),
        file: output.output_file.clone(),
    })
}

// Missing inputs become `Skip`; every other build error aborts the plan.
fn push_built(
    steps: &mut Vec<Step>,
    built: Result<CommandLine, CommandError>,
) -> Result<bool, AppError> {
    match built {
        Ok(cmd) => {
            steps.push(Step::Run(cmd));
            Ok(true)
        }
        Err(CommandError::MissingInput(path)) => {
            steps.push(Step::Skip(path));
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

fn plan_view(input: &Path, toolkit: &Toolkit) -> Result<Vec<Step>, AppError> {
    let mut steps = Vec::new();
    let built = LasViewCommand {
        input: input.to_path_buf(),
    }
    .build(toolkit);
    push_built(&mut steps, built)?;
    Ok(steps)
}

fn plan_ground(
    args: &GroundArgs,
    config: &AppConfig,
    toolkit: &Toolkit,
) -> Result<Vec<Step>, AppError> {
    let inputs = expand_globs(&args.input)?;
    let target = output_target(&args.output, inputs.len())?;

    let mut steps = Vec::new();
    for input in inputs {
        let output = target.resolve(&input, "grd_", None);
        let mut command = LasGroundCommand::new(&input, &output);
        let step = args
            .step
            .clone()
            .unwrap_or_else(|| config.ground_step.to_string());
        command
            .flags
            .enable("step", Some(step.as_str()))?
            .enable_if("stddev", args.stddev.as_deref())?
            .enable_if("offset", args.offset.as_deref())?
            .enable_if("bulge", args.bulge.as_deref())?
            .enable_if("spike", args.spike.as_deref())?
            .enable_if("sub", args.sub.as_deref())?
            .enable_if("terrain", args.terrain.as_deref())?
            .enable_if("granularity", args.granularity.as_deref())?
            .enable_switch("compute_height", args.compute_height)?
            .enable_switch("replace_z", args.replace_z)?;

        let ran = push_built(&mut steps, command.build(toolkit))?;
        if ran && args.view {
            steps.push(Step::View(output));
        }
    }
    Ok(steps)
}

fn light_for(args: &DemArgs, config: &AppConfig) -> Result<Option<LightVector>, AppError> {
    let hillshade = args.product.as_deref() == Some("hillshade");
    let angles_given = args.azimuth.is_some() || args.altitude.is_some() || args.radius.is_some();
    if !hillshade && !angles_given {
        return Ok(None);
    }
    if !hillshade {
        log::warn!("-light only affects hillshade output");
    }
    let light = LightVector::from_angles(
        args.azimuth.unwrap_or(config.azimuth),
        args.altitude.unwrap_or(config.altitude),
        args.radius.unwrap_or(config.radius),
    )?;
    Ok(Some(light))
}

fn plan_dem(args: &DemArgs, config: &AppConfig, toolkit: &Toolkit) -> Result<Vec<Step>, AppError> {
    let inputs = expand_globs(&args.input)?;
    let target = output_target(&args.output, inputs.len())?;
    let light = light_for(args, config)?;
    let extension = match args.product.as_deref() {
        Some("hillshade") => "png",
        _ => "tif",
    };

    let mut steps = Vec::new();
    for input in inputs {
        let output = target.resolve(&input, "dem_", Some(extension));
        let mut command = Blast2DemCommand::new(&input, &output);
        let step = args
            .step
            .clone()
            .unwrap_or_else(|| config.dem_step.to_string());
        command
            .flags
            .enable("step", Some(step.as_str()))?
            .enable_if("product", args.product.as_deref())?
            .enable_switch("gray", args.gray)?
            .enable_switch("false", args.false_color)?
            .enable_if("kill", args.kill.as_deref())?;
        command.light = light;

        let ran = push_built(&mut steps, command.build(toolkit))?;
        if ran && args.view {
            steps.push(Step::View(output));
        }
    }
    Ok(steps)
}

pub fn plan(action: &Action, config: &AppConfig, toolkit: &Toolkit) -> Result<Vec<Step>, AppError> {
    match action {
        Action::View { input } => plan_view(input, toolkit),
        Action::Ground(args) => plan_ground(args, config, toolkit),
        Action::Dem(args) => plan_dem(args, config, toolkit),
    }
}

/// Text for a dry run: one command per line, or a JSON array.
pub fn render_plan(steps: &[Step], toolkit: &Toolkit, json: bool) -> Result<String, AppError> {
    let mut commands = Vec::new();
    for step in steps {
        match step.command_line(toolkit) {
            Some(cmd) => commands.push(cmd),
            None => {
                if let Step::Skip(path) = step {
                    log::warn!("No input specified: {}", path.display());
                }
            }
        }
    }

    if json {
        return Ok(serde_json::to_string_pretty(&commands)?);
    }
    Ok(commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
