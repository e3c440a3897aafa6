//! Filesystem-watching host.
//!
//! Watches a set of files and re-processes each one whenever it changes.
//! Events are debounced: after the first event arrives, the loop keeps
//! draining until the channel has been quiet for the debounce window, then
//! processes every dirty path once. Our own write-backs re-trigger the
//! watcher, but the engine's no-op guarantee makes that second pass leave
//! the file alone, so the loop settles.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{Event, RecursiveMode, Watcher};
use tracing::{error, info, warn};

use super::{FileRegion, process_region};
use crate::engine::CalcEngine;

/// Watch `paths` and re-process them on change. Runs until the process is
/// interrupted.
pub fn run_watch(engine: &CalcEngine, paths: &[PathBuf], debounce: Duration) -> Result<()> {
    let (tx, rx) = flume::unbounded::<notify::Result<Event>>();

    let mut watcher = notify::recommended_watcher(move |event| {
        let _ = tx.send(event);
    })
    .context("failed to create filesystem watcher")?;

    for path in paths {
        watcher
            .watch(path, RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch {}", path.display()))?;
        info!(path = %path.display(), "watching");
    }

    loop {
        // Block for the first event of a burst.
        let first = rx.recv().context("watcher channel closed")?;
        let mut dirty = HashSet::new();
        collect_paths(first, &mut dirty);

        // Drain the rest of the burst until things quiet down.
        while let Ok(event) = rx.recv_timeout(debounce) {
            collect_paths(event, &mut dirty);
        }

        for path in dirty {
            let mut region = FileRegion::new(&path);
            match process_region(engine, &mut region) {
                Ok(true) => info!(path = %path.display(), "rewrote expressions"),
                Ok(false) => {}
                Err(err) => error!(path = %path.display(), %err, "failed to process"),
            }
        }
    }
}

fn collect_paths(event: notify::Result<Event>, dirty: &mut HashSet<PathBuf>) {
    match event {
        Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
            dirty.extend(event.paths);
        }
        Ok(_) => {}
        Err(err) => warn!(%err, "watch event error"),
    }
}
