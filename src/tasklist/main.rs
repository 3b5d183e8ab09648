use clap::Parser;
use colored::Colorize;
use std::io;
use tasklist::api::TasklistApi;
use tasklist::config::TasklistConfig;
use tasklist::error::{Result, TasklistError};
use tasklist::prompt::Prompter;
use tasklist::session::Session;
use tasklist::store::fs::FileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "tasklist=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("TASKLIST_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Defaults, then the config file, then flags.
fn resolve_config(cli: &Cli) -> Result<TasklistConfig> {
    let mut config = match &cli.config {
        Some(path) if !path.exists() => {
            return Err(TasklistError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Some(path) => TasklistConfig::load(path)?,
        None => match TasklistConfig::default_path() {
            Some(path) => TasklistConfig::load(path)?,
            None => TasklistConfig::default(),
        },
    };

    if let Some(file) = &cli.file {
        config.file = file.clone();
    }
    if let Some(offset) = cli.utc_offset {
        config.utc_offset_hours = offset;
    }
    if cli.no_color {
        config.color = false;
    }

    config.validate()?;
    debug!(?config, "resolved config");
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let clock = config.clock()?;
    let api = TasklistApi::open(FileStore::new(&config.file))?;

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());
    Session::new(api, clock, prompter, config.color).run()
}
