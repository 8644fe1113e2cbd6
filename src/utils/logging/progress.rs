//! Progress reporting for skill table loading
//!
//! Thin wrappers around indicatif so that every loader shows the same bar and
//! can switch progress output off entirely.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for a file loading progress bar
pub const DEFAULT_MAIN_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}";

/// Create a progress bar for `length` files
///
/// Returns a hidden bar when `visible` is false, so callers can tick it
/// unconditionally.
#[must_use]
pub fn create_main_progress_bar(length: u64, description: Option<&str>, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(length);
    let style = ProgressStyle::default_bar()
        .template(DEFAULT_MAIN_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);

    if let Some(desc) = description {
        pb.set_message(desc.to_string());
    }

    pb
}

/// Finish a progress bar and clear it from display
pub fn finish_and_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invisible_bar_is_hidden() {
        let pb = create_main_progress_bar(3, Some("Loading"), false);
        assert!(pb.is_hidden());
        pb.inc(3);
        finish_and_clear(&pb);
        assert!(pb.is_finished());
    }
}
