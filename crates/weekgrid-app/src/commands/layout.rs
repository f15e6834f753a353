//! `weekgrid layout`: one layout pass over a sessions file.

use std::io::Write;

use tracing::info;
use weekgrid_common::{Result, WeekgridError};
use weekgrid_config::WeekgridConfig;
use weekgrid_layout::LayoutEngine;

use crate::cli::RenderArgs;
use crate::input::read_sessions;
use crate::report::LayoutReport;

pub(super) fn run(args: &RenderArgs, config: &WeekgridConfig) -> Result<()> {
    let engine = super::engine(config)?;
    let json = render(args, &engine, config.output.pretty)?;
    emit(args, &json)
}

/// Read the sessions file and serialize its layout report.
pub(super) fn render(args: &RenderArgs, engine: &LayoutEngine, pretty: bool) -> Result<String> {
    let sessions = read_sessions(&args.sessions)?;
    let layout = engine.compute(&sessions);

    info!(
        sessions = sessions.len(),
        placed = layout.session_count(),
        dropped = layout.dropped,
        "laid out {}",
        args.sessions.display()
    );

    LayoutReport::new(&layout)
        .to_json(pretty)
        .map_err(|e| WeekgridError::Other(format!("failed to serialize report: {e}")))
}

/// Write a report to `--output`, or to stdout followed by a newline.
pub(super) fn emit(args: &RenderArgs, json: &str) -> Result<()> {
    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))?;
            info!("wrote report to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
