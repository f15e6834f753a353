//! Subcommand handlers.

mod init;
mod layout;
mod palette;
mod watch;


use std::path::Path;

use weekgrid_common::{ConfigError, Result};
use weekgrid_config::validation;
use weekgrid_config::WeekgridConfig;
use weekgrid_layout::{LayoutEngine, Palette};

use crate::cli::{Command, RenderArgs};

/// Run one parsed subcommand against the loaded config.
pub fn run(command: &Command, config_path: Option<&Path>, config: WeekgridConfig) -> Result<()> {
    match command {
        Command::Layout(args) => layout::run(args, &effective_config(config, args)?),
        Command::Watch(args) => watch::run(args, &effective_config(config, args)?),
        Command::Init { force } => init::run(config_path, *force),
        Command::Palette { codes } => {
            validation::validate(&config)?;
            palette::run(codes, &config)
        }
    }
}

/// Config with command-line overrides applied, validated strictly.
fn effective_config(mut config: WeekgridConfig, args: &RenderArgs) -> Result<WeekgridConfig> {
    args.apply(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

fn engine(config: &WeekgridConfig) -> Result<LayoutEngine> {
    let palette = palette_from(config)?;
    Ok(LayoutEngine::new(config.grid, palette))
}

fn palette_from(config: &WeekgridConfig) -> Result<Palette> {
    Palette::new(config.palette.entries.clone())
        .ok_or_else(|| ConfigError::ValidationError("palette must not be empty".into()).into())
}
