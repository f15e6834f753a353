//! File watching for reactive recomputation.
//!
//! Uses the `notify` crate with a 500ms debounce so an editor save
//! produces a single signal.

mod file_watcher;

#[cfg(test)]
mod tests;

pub use file_watcher::{FileWatcher, WatchHandle, DEBOUNCE};
