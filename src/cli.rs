// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `pollwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pollwatch",
    version,
    about = "Poll a set of paths and report file changes for dev-reload loops.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Pollwatch.toml` in the current working directory is
    /// used when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Path or glob pattern to watch (repeatable). Overrides the config file.
    #[arg(long = "watch", value_name = "PATTERN")]
    pub watch: Vec<String>,

    /// Path or glob pattern to exclude (repeatable). Overrides the config file.
    #[arg(long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// File extension to monitor, without the dot (repeatable).
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Milliseconds between scan cycles.
    #[arg(long, value_name = "MS")]
    pub poll_interval: Option<u64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `POLLWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
