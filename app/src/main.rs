use std::io::Write;

use chrono::Local;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use lastools_command::Toolkit;
use lastools_runner::{ConsoleSink, LogSink, ProcessRunner};

mod cli;
mod config;
mod docs;
mod error;
mod plan;
mod session;

use cli::{Cli, Commands, Relay};
use config::{AppConfig, LASTOOLS_PATH_ENV};
use error::AppError;
use plan::{plan, render_plan};
use session::Session;

fn init_logger(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Warn,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::load(cli.config.as_deref())?
        .with_env_override(std::env::var_os(LASTOOLS_PATH_ENV))
        .with_lastools_path(cli.lastools);
    config.validate()?;
    let toolkit = Toolkit::new(&config.lastools_path);

    match cli.command {
        Commands::Docs {
            topic: Some(topic),
            option,
        } => {
            let topic = docs::resolve_topic(&topic, option.as_deref())?;
            match docs::read_topic(&config.docs_dir, &topic) {
                Ok(text) => println!("{}", text.trim_end()),
                Err(e) => log::error!("{}", e),
            }
        }
        Commands::Docs { topic: None, .. } => {
            for topic in docs::list_topics(&config.docs_dir)? {
                println!("{}", topic);
            }
        }
        Commands::Command { json, action } => {
            if let Err(e) = toolkit.verify() {
                log::warn!("{}", e);
            }
            let steps = plan(&action, &config, &toolkit)?;
            let text = render_plan(&steps, &toolkit, json)?;
            if !text.is_empty() {
                println!("{}", text);
            }
        }
        Commands::Action(action) => {
            toolkit.verify()?;
            log::info!("Found {} ...", toolkit.bin_dir().display());

            let steps = plan(&action, &config, &toolkit)?;
            let start = std::time::Instant::now();
            match cli.relay {
                Relay::Console => {
                    Session::new(toolkit, ProcessRunner, ConsoleSink).execute(&steps)?
                }
                Relay::Log => {
                    Session::new(toolkit, ProcessRunner, LogSink::default()).execute(&steps)?
                }
            }
            log::info!("Elapsed: {:?}", start.elapsed());
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
