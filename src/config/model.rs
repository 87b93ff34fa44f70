// src/config/model.rs

use serde::Deserialize;

use crate::watch::WatcherOptions;

/// Top-level configuration as read from a `Pollwatch.toml` file.
///
/// ```toml
/// poll_interval_ms = 500
/// watch = ["src", "templates/**/*.html"]
/// ignore = ["src/generated"]
/// extensions = ["rs", "html"]
/// ```
///
/// All fields are optional; the watcher applies its own defaults for
/// anything left empty or zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Milliseconds between scan cycles; `0` picks the built-in default.
    #[serde(default)]
    pub poll_interval_ms: u64,

    /// Path patterns to monitor (literal paths or globs).
    #[serde(default)]
    pub watch: Vec<String>,

    /// Path patterns excluded from monitoring.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// File extensions to monitor, without the leading dot.
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl ConfigFile {
    /// Convert into watcher construction options.
    pub fn into_options(self) -> WatcherOptions {
        WatcherOptions {
            poll_interval_ms: self.poll_interval_ms,
            watch: self.watch,
            ignore: self.ignore,
            extensions: self.extensions,
        }
    }
}
