// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod watch;

use std::path::Path;

use anyhow::Result;
use tracing::{error, info};

use crate::cli::CliArgs;
use crate::config::loader::load_or_default;
use crate::config::model::ConfigFile;
use crate::watch::{Watcher, WatcherOptions};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file + CLI overrides)
/// - watcher construction
/// - the watch loop as a background task
/// - a consumer that logs changes and stops on the terminal error
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref().map(Path::new))?;
    let options = merge_options(cfg, &args);

    let (watcher, shutdown, mut channels) = Watcher::new(&options)?;

    let loop_handle = tokio::spawn(watcher.watch());

    // Ctrl-C → graceful shutdown.
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            shutdown.shutdown();
        });
    }

    // Consume the two notification streams. The process runner that would
    // normally rebuild/restart on a change sits here in a full dev tool.
    // `biased` so a terminal error is never lost to the events branch
    // observing its closed channel first.
    let result = loop {
        tokio::select! {
            biased;
            err = channels.errors.recv() => match err {
                Some(err) => {
                    error!("watch failed: {err}");
                    break Err(err.into());
                }
                None => break Ok(()),
            },
            event = channels.events.recv() => match event {
                Some(path) => info!(path = %path.display(), "change detected"),
                None => break Ok(()),
            },
        }
    };

    let _ = loop_handle.await;
    result
}

/// CLI flags win over the config file, per list: a non-empty flag list
/// replaces the file's list wholesale rather than appending to it.
fn merge_options(cfg: ConfigFile, args: &CliArgs) -> WatcherOptions {
    let file_options = cfg.into_options();
    WatcherOptions {
        poll_interval_ms: args
            .poll_interval
            .unwrap_or(file_options.poll_interval_ms),
        watch: if args.watch.is_empty() {
            file_options.watch
        } else {
            args.watch.clone()
        },
        ignore: if args.ignore.is_empty() {
            file_options.ignore
        } else {
            args.ignore.clone()
        },
        extensions: if args.extensions.is_empty() {
            file_options.extensions
        } else {
            args.extensions.clone()
        },
    }
}
