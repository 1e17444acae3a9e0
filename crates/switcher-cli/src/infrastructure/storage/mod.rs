//! Storage infrastructure: file persistence.
//!
//! - `config_file` reads and rewrites the AWS CLI config file and writes its
//!   `.backup` copy.
//! - `settings` loads the switcher's own optional TOML settings.

use std::path::PathBuf;

pub mod config_file;
pub mod settings;

/// Resolves the current user's home directory from the environment.
pub fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let var = std::env::var_os("USERPROFILE");

    #[cfg(not(target_os = "windows"))]
    let var = std::env::var_os("HOME");

    var.filter(|v| !v.is_empty()).map(PathBuf::from)
}
