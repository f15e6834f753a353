//! `weekgrid watch`: re-emit the layout report whenever the sessions file
//! changes.
//!
//! Every change triggers a fresh layout pass; nothing from the previous
//! pass is reused. A broken intermediate save is logged and skipped so the
//! watcher keeps running until the next good write.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};
use weekgrid_common::{Result, WeekgridError};
use weekgrid_config::{FileWatcher, WeekgridConfig};
use weekgrid_layout::LayoutEngine;

use super::layout::{emit, render};
use crate::cli::RenderArgs;

pub(super) fn run(args: &RenderArgs, config: &WeekgridConfig) -> Result<()> {
    let engine = super::engine(config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(watch_loop(args, &engine, config.output.pretty))
}

async fn watch_loop(args: &RenderArgs, engine: &LayoutEngine, pretty: bool) -> Result<()> {
    // Register before the first pass so a save during it still triggers
    // a rerun.
    let handle = FileWatcher::new(args.sessions.clone())?.start()?;
    let (tx, mut rx) = broadcast::channel::<()>(4);
    let mut watch_task = tokio::spawn(handle.run(tx));

    refresh(args, engine, pretty)?;

    loop {
        tokio::select! {
            changed = rx.recv() => match changed {
                Ok(()) | Err(RecvError::Lagged(_)) => refresh(args, engine, pretty)?,
                Err(RecvError::Closed) => break,
            },
            result = &mut watch_task => {
                return result.map_err(|e| {
                    WeekgridError::Other(format!("watcher task failed: {e}"))
                });
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, stopping watch");
                break;
            }
        }
    }

    watch_task.abort();
    Ok(())
}

/// One layout pass. Unreadable or malformed input is reported and skipped;
/// output failures are fatal.
fn refresh(args: &RenderArgs, engine: &LayoutEngine, pretty: bool) -> Result<()> {
    match render(args, engine, pretty) {
        Ok(json) => emit(args, &json),
        Err(e) => {
            warn!("skipping update: {e}");
            Ok(())
        }
    }
}
