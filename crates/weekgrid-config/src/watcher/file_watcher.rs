//! Debounced single-file watcher.
//!
//! Watches the parent directory so editors that save by write-and-rename
//! are still picked up, and filters events down to the one file name.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};
use weekgrid_common::ConfigError;

/// Quiet period that coalesces bursts of change events into one signal.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches one file and signals on every (debounced) change.
pub struct FileWatcher {
    path: PathBuf,
}

impl FileWatcher {
    /// Create a watcher for `path`. The file does not need to exist yet.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if path.file_name().is_none() {
            return Err(ConfigError::WatchError(format!(
                "{} does not name a file",
                path.display()
            )));
        }
        if !path.exists() {
            warn!(
                "{} does not exist yet, will watch for creation",
                path.display()
            );
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register the OS watch now and return a handle that forwards changes
    /// once [`WatchHandle::run`] is polled. Writes that land between `start`
    /// and `run` are queued, not lost.
    pub fn start(&self) -> Result<WatchHandle, ConfigError> {
        let watch_dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name: OsString = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        // Bridges the sync notify callback into async.
        let (notify_tx, notify_rx) = mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        return;
                    }
                    let ours = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().is_some_and(|n| n == file_name));
                    if ours {
                        debug!("watched file change detected");
                        let _ = notify_tx.try_send(());
                    }
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        info!("watching {} for changes", self.path.display());
        Ok(WatchHandle {
            path: self.path.clone(),
            _watcher: watcher,
            notify_rx,
        })
    }

    /// [`FileWatcher::start`] followed by [`WatchHandle::run`].
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        self.start()?.run(tx).await;
        Ok(())
    }
}

/// A registered watch. Dropping it unregisters the OS watch.
pub struct WatchHandle {
    path: PathBuf,
    _watcher: RecommendedWatcher,
    notify_rx: mpsc::Receiver<()>,
}

impl WatchHandle {
    /// Run until the broadcast side has no receivers left or the notify
    /// backend shuts down. Sends `()` once per debounced change.
    pub async fn run(mut self, tx: broadcast::Sender<()>) {
        while self.notify_rx.recv().await.is_some() {
            if !drain_until_quiet(&mut self.notify_rx).await {
                break;
            }

            debug!("{} changed, signalling", self.path.display());
            if tx.send(()).is_err() {
                info!("no receivers left for {}, stopping", self.path.display());
                break;
            }
        }
    }
}

/// Swallow follow-up events until [`DEBOUNCE`] passes without one.
/// Returns `false` if the channel closed meanwhile.
async fn drain_until_quiet(rx: &mut mpsc::Receiver<()>) -> bool {
    loop {
        match tokio::time::timeout(DEBOUNCE, rx.recv()).await {
            Err(_elapsed) => return true,
            Ok(Some(())) => continue,
            Ok(None) => return false,
        }
    }
}
