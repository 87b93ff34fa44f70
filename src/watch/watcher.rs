// src/watch/watcher.rs

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::errors::{PollwatchError, Result};
use crate::watch::resolve::{ExtensionFilter, resolve_paths};
use crate::watch::scan::scan_for_change;

/// Poll interval applied when the configured one is zero or unset.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Construction inputs for a [`Watcher`].
#[derive(Debug, Clone, Default)]
pub struct WatcherOptions {
    /// Milliseconds between scan cycles; `0` means [`DEFAULT_POLL_INTERVAL_MS`].
    pub poll_interval_ms: u64,
    /// Path patterns to monitor (literal paths or globs); empty means the
    /// current directory.
    pub watch: Vec<String>,
    /// Path patterns excluded from monitoring.
    pub ignore: Vec<String>,
    /// Bare extension strings without the dot; empty means the default set.
    pub extensions: Vec<String>,
}

/// Receiving ends of the watcher's two output streams.
///
/// Both channels have capacity 1: the loop awaits each hand-off until the
/// consumer has drained the previous value, so a slow consumer throttles
/// polling and a consumer that never reads stalls the loop. The error
/// channel yields at most one value, ever; after it the loop is stopped
/// for good.
pub struct WatcherChannels {
    pub events: mpsc::Receiver<PathBuf>,
    pub errors: mpsc::Receiver<PollwatchError>,
}

/// Handle used to stop a running watch loop.
///
/// The signal is raced against the poll sleep and against pending channel
/// sends, so a blocked loop still shuts down promptly. Dropping the handle
/// does not stop the loop.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    tx: watch::Sender<bool>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        let _ = self.tx.send(true);
    }
}

/// Resolves until a shutdown is signalled. A dropped handle means the
/// signal can never arrive, so we park forever instead of spinning.
async fn shutdown_signal(rx: &mut watch::Receiver<bool>) {
    if rx.changed().await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// A polling filesystem watcher.
///
/// Construction resolves the watch and ignore patterns into minimal,
/// overlap-free path sets. [`Watcher::watch`] then runs scan cycles over
/// the watch set, reporting the first changed file per cycle over the
/// events channel and a single terminal error over the errors channel.
///
/// The baseline timestamp is owned exclusively by the watcher: it is fixed
/// at construction and advanced only by the loop itself when a change has
/// been delivered.
pub struct Watcher {
    poll_interval: Duration,
    watch_paths: BTreeSet<String>,
    ignore_paths: BTreeSet<String>,
    extensions: ExtensionFilter,
    baseline: SystemTime,
    events_tx: mpsc::Sender<PathBuf>,
    errors_tx: mpsc::Sender<PollwatchError>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Watcher {
    /// Build a watcher whose baseline is the moment of construction.
    pub fn new(
        options: &WatcherOptions,
    ) -> Result<(Self, ShutdownHandle, WatcherChannels)> {
        Self::with_baseline(options, SystemTime::now())
    }

    /// Build a watcher with an explicit baseline; modifications at or
    /// before it are not reported. Mainly useful for tests that need a
    /// controlled cutoff.
    pub fn with_baseline(
        options: &WatcherOptions,
        baseline: SystemTime,
    ) -> Result<(Self, ShutdownHandle, WatcherChannels)> {
        let interval_ms = if options.poll_interval_ms == 0 {
            DEFAULT_POLL_INTERVAL_MS
        } else {
            options.poll_interval_ms
        };

        let extensions = ExtensionFilter::new(&options.extensions);

        let watch_items: Vec<String> = if options.watch.is_empty() {
            vec![".".to_string()]
        } else {
            options.watch.clone()
        };
        let watch_paths = resolve_paths(&watch_items, &extensions)?;
        let ignore_paths = resolve_paths(&options.ignore, &extensions)?;

        debug!(?watch_paths, ?ignore_paths, "resolved watcher path sets");

        let (events_tx, events_rx) = mpsc::channel(1);
        let (errors_tx, errors_rx) = mpsc::channel(1);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok((
            Self {
                poll_interval: Duration::from_millis(interval_ms),
                watch_paths,
                ignore_paths,
                extensions,
                baseline,
                events_tx,
                errors_tx,
                shutdown_rx,
            },
            ShutdownHandle { tx: shutdown_tx },
            WatcherChannels {
                events: events_rx,
                errors: errors_rx,
            },
        ))
    }

    /// Run scan cycles until a scan error or a shutdown signal.
    ///
    /// Each cycle visits the watch roots in a fixed order. The first
    /// detected change ends the cycle: the path is handed to the consumer
    /// and the baseline advances to now, so the same modification is not
    /// re-reported and a file re-saved during delivery is picked up next
    /// cycle. A scan error is delivered once, then the loop stops; it
    /// never resumes, a new watcher must be constructed to watch again.
    pub async fn watch(mut self) {
        info!(roots = self.watch_paths.len(), "watch loop started");

        loop {
            'cycle: for root in &self.watch_paths {
                match scan_for_change(
                    root,
                    &self.ignore_paths,
                    &self.extensions,
                    self.baseline,
                ) {
                    Err(err) => {
                        tokio::select! {
                            res = self.errors_tx.send(err) => {
                                if res.is_err() {
                                    debug!("error receiver dropped before delivery");
                                }
                            }
                            _ = shutdown_signal(&mut self.shutdown_rx) => {}
                        }
                        info!("watch loop stopped after scan error");
                        return;
                    }
                    Ok(Some(path)) => {
                        debug!(path = %path.display(), "file changed");
                        tokio::select! {
                            res = self.events_tx.send(path) => {
                                if res.is_err() {
                                    info!("event receiver dropped, stopping watch loop");
                                    return;
                                }
                            }
                            _ = shutdown_signal(&mut self.shutdown_rx) => {
                                info!("watch loop shut down");
                                return;
                            }
                        }
                        self.baseline = SystemTime::now();
                        break 'cycle;
                    }
                    Ok(None) => {}
                }
            }

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                _ = shutdown_signal(&mut self.shutdown_rx) => {
                    info!("watch loop shut down");
                    return;
                }
            }
        }
    }
}
