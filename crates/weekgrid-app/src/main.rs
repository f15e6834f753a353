mod cli;
mod commands;
mod input;
mod report;

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use weekgrid_common::Result;
use weekgrid_config::{toml_loader, WeekgridConfig};

use cli::Command;

const DEFAULT_LOG_DIRECTIVE: &str = "weekgrid=info";

/// Load config from the override path (which must exist) or the platform
/// default (created on first run).
fn load_config(path: Option<&Path>) -> Result<WeekgridConfig> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    Ok(config)
}

fn init_logging(directive: &str) {
    let directive = directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse::<Directive>());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // `init` must not create the file it is about to write.
    let loaded = match args.command {
        Command::Init { .. } => Ok(WeekgridConfig::default()),
        _ => load_config(args.config.as_deref()),
    };

    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    init_logging(&directive);

    tracing::debug!("weekgrid v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            eprintln!("weekgrid: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            WeekgridConfig::default()
        }
    };

    match commands::run(&args.command, args.config.as_deref(), config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("weekgrid: {e}");
            ExitCode::FAILURE
        }
    }
}
