//! Shared utilities for commands

use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

/// Accessor binaries installed at the top level of the support directory
pub const UTILITY_NAMES: [&str; 2] = ["get_pref", "set_pref"];

/// Paths of the accessor binaries shipped alongside this executable
pub fn utility_sources(bin_dir: &Path) -> Vec<PathBuf> {
    UTILITY_NAMES
        .iter()
        .map(|name| bin_dir.join(format!("{}{}", name, std::env::consts::EXE_SUFFIX)))
        .collect()
}

/// Quote a path for display if it contains characters a shell would split on
pub fn quoted(path: &Path) -> String {
    let s = path.to_string_lossy();
    if !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+,:@%=~".contains(c))
    {
        s.into_owned()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

/// Print an error to stderr, followed by its causes when debugging
pub fn report_error(what: &str, err: &(dyn std::error::Error + 'static), debug: bool) {
    eprintln!("{} {}: {}", "Failed:".red(), what, err);
    if debug {
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
    }
}
