//! Path utilities for the deploy CLI.
//!
//! Docker bind mounts require absolute host paths, so the user-supplied
//! data directory is normalized before it reaches a `docker run` command:
//! absolute paths pass through, `~/` expands to the home directory, and
//! relative paths resolve against the current working directory.

use std::path::{Path, PathBuf};

/// Normalize a user-supplied data directory to an absolute path.
pub fn absolute_data_dir(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}
