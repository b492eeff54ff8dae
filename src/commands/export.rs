//! Export the post list as JSON

use anyhow::{Context, Result};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::BuildMode;
use crate::{Site, CONFIG_FILE};

/// Load, transform and write the post list. Returns the written path.
pub fn run(site: &Site, mode: BuildMode) -> Result<PathBuf> {
    let start = std::time::Instant::now();

    let posts = site.posts(mode)?;
    tracing::info!("Loaded {} posts ({} mode)", posts.len(), mode);

    fs::create_dir_all(&site.out_dir)
        .with_context(|| format!("Failed to create {:?}", site.out_dir))?;

    let path = site.data_path();
    let json = serde_json::to_string_pretty(&posts)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {:?}", path))?;

    let duration = start.elapsed();
    tracing::info!("Exported {:?} in {:.2}s", path, duration.as_secs_f64());

    Ok(path)
}

/// Watch the source directory and the config file, re-exporting on every
/// change. A config change reloads the site before exporting.
pub fn watch(site: &Site, mode: BuildMode) -> Result<()> {
    let mut site = site.clone();
    let (tx, rx) = std::sync::mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    // Canonical paths so event paths can be compared against them
    let src_dir = canonical(&site.src_dir);
    let config_path = site.base_dir.join(CONFIG_FILE);

    if src_dir.exists() {
        debouncer
            .watcher()
            .watch(&src_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", src_dir);
    } else {
        tracing::warn!("Source directory {:?} does not exist", src_dir);
    }

    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let out_dir = canonical(&site.out_dir);
                let relevant: Vec<_> = events
                    .iter()
                    .filter(|e| is_relevant_change(&e.path, &out_dir))
                    .collect();
                if relevant.is_empty() {
                    continue;
                }

                let config_changed = relevant
                    .iter()
                    .any(|e| e.path.file_name() == Some(OsStr::new(CONFIG_FILE)));
                if config_changed {
                    tracing::info!("{} changed, reloading site", CONFIG_FILE);
                    match Site::new(&site.base_dir) {
                        Ok(reloaded) => site = reloaded,
                        Err(e) => {
                            tracing::error!("Keeping previous config: {:#}", e);
                            continue;
                        }
                    }
                }

                tracing::info!("Source changed, exporting...");
                if let Err(e) = run(&site, mode) {
                    tracing::error!("Export failed: {:#}", e);
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Whether a changed path should trigger an export. Writes into the output
/// directory never do, even when it lives inside the source tree.
fn is_relevant_change(path: &Path, out_dir: &Path) -> bool {
    if path.starts_with(out_dir) {
        return false;
    }

    let path_str = path.to_string_lossy();
    !path_str.contains(".git") && !path_str.ends_with('~')
}
