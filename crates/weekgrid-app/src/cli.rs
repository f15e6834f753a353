use std::path::PathBuf;

use clap::{Parser, Subcommand};
use weekgrid_config::WeekgridConfig;

/// weekgrid: lays out a weekly course timetable on a fixed time grid.
#[derive(Parser, Debug)]
#[command(name = "weekgrid", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `weekgrid=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the layout for a sessions file and print it as JSON.
    Layout(RenderArgs),
    /// Like `layout`, then recompute every time the sessions file changes.
    Watch(RenderArgs),
    /// Write the default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Print the color pair chosen for each subject code.
    Palette {
        #[arg(required = true)]
        codes: Vec<String>,
    },
}

/// Options shared by `layout` and `watch`.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// JSON file holding a session array or an object with a `courses` array.
    pub sessions: PathBuf,

    /// First visible hour, overrides `grid.start_hour`.
    #[arg(long, allow_negative_numbers = true)]
    pub start_hour: Option<i32>,

    /// Last visible hour, overrides `grid.end_hour`.
    #[arg(long, allow_negative_numbers = true)]
    pub end_hour: Option<i32>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pub pretty: bool,

    /// Write the report to this file instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut WeekgridConfig) {
        if let Some(hour) = self.start_hour {
            config.grid.start_hour = hour;
        }
        if let Some(hour) = self.end_hour {
            config.grid.end_hour = hour;
        }
        if self.pretty {
            config.output.pretty = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
