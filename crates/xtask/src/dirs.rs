//! Content directory resolution

use std::path::PathBuf;

/// Environment variable naming the default content directory.
pub const CONTENT_DIR_VAR: &str = "CONTENT_DIR";

/// Resolve the content directory
///
/// Order of precedence:
/// - explicit `--dir` argument
/// - `CONTENT_DIR` environment variable (also read from `.env`)
/// - `./content`
pub fn content_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(CONTENT_DIR_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("content"))
}
