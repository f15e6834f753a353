//! Tests for the file watcher.

use super::*;
use std::path::PathBuf;

#[test]
fn watcher_new_with_nonexistent_path_succeeds() {
    let watcher = FileWatcher::new(PathBuf::from("/tmp/nonexistent_weekgrid_sessions.json"));
    assert!(watcher.is_ok());
}

#[test]
fn watcher_new_with_existing_path_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.json");
    std::fs::write(&path, "[]").unwrap();

    let watcher = FileWatcher::new(path.clone()).unwrap();
    assert_eq!(watcher.path(), path.as_path());
}

#[test]
fn watcher_rejects_path_without_file_name() {
    assert!(FileWatcher::new(PathBuf::from("/")).is_err());
}

#[test]
fn start_registers_eagerly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("sessions.json");
    let watcher = FileWatcher::new(path).unwrap();
    let err = watcher.start().err().unwrap();
    assert!(err.to_string().contains("failed to watch"));
}

#[tokio::test]
async fn write_right_after_start_is_signalled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.json");
    std::fs::write(&path, "[]").unwrap();

    let handle = FileWatcher::new(path.clone()).unwrap().start().unwrap();
    // Lands before the handle is polled.
    std::fs::write(&path, "[{}]").unwrap();

    let (tx, mut rx) = tokio::sync::broadcast::channel(4);
    let task = tokio::spawn(handle.run(tx));
    let signalled = tokio::time::timeout(std::time::Duration::from_secs(10), rx.recv()).await;
    task.abort();
    assert!(matches!(signalled, Ok(Ok(()))));
}
