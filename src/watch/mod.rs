// src/watch/mod.rs

//! Path resolution, change scanning and the polling watch loop.
//!
//! This module is responsible for:
//! - Expanding watch/ignore patterns (literals and globs) into minimal,
//!   overlap-free path sets.
//! - Scanning one directory tree per call for the first file modified
//!   after a baseline timestamp.
//! - Running the polling loop that ties both together and feeds the
//!   change/error channels.
//!
//! It does **not** know what the consumer does with a change; rebuilding
//! or restarting a process belongs to whoever reads the channels.

pub mod resolve;
pub mod scan;
pub mod watcher;

pub use resolve::{DEFAULT_EXTENSIONS, ExtensionFilter, resolve_paths};
pub use scan::scan_for_change;
pub use watcher::{
    DEFAULT_POLL_INTERVAL_MS, ShutdownHandle, Watcher, WatcherChannels, WatcherOptions,
};
