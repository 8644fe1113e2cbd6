//! Standardized log lines for loading and querying
//!
//! Keeps the wording of repeated messages in one place so the loader, the
//! async loader and the binary report the same events the same way.

use std::path::Path;
use std::time::Duration;

/// Log the start of an operation on a file or directory
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log how many `noun`s an operation produced for `path`
///
/// # Arguments
/// * `operation` - Past-tense verb, e.g. `"Found"` or `"Loaded"`
/// * `noun` - What was counted, e.g. `"skill tables"`
/// * `path` - File or directory the items came from
/// * `count` - Number of items
/// * `elapsed` - Optional time taken
pub fn log_operation_complete(
    operation: &str,
    noun: &str,
    path: &Path,
    count: usize,
    elapsed: Option<Duration>,
) {
    match elapsed {
        Some(duration) => log::info!(
            "{operation} {count} {noun} in {} ({duration:?})",
            path.display()
        ),
        None => log::info!("{operation} {count} {noun} in {}", path.display()),
    }
}

/// Log a warning, optionally tied to a path
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message}: {}", path.display()),
        None => log::warn!("{message}"),
    }
}

/// Warn about requested skill names that have no skill table
pub fn log_unknown_skills<S: AsRef<str>>(unknown: &[S]) {
    if unknown.is_empty() {
        return;
    }
    let names: Vec<&str> = unknown.iter().map(AsRef::as_ref).collect();
    log::warn!(
        "Ignoring {} unknown skill(s): {}",
        names.len(),
        names.join(", ")
    );
}
