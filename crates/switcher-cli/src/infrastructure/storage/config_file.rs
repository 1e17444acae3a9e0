//! Line-oriented access to the AWS CLI config file.
//!
//! The file is read as a whole into byte lines (line terminators stripped,
//! `\r\n` included) and written back with a `\n` after every line.  Lines
//! are not decoded, so bytes that are not valid UTF-8 are written back
//! exactly as they were read.  Before an overwrite the caller writes the original lines to a
//! sibling `<file><suffix>` backup.

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::home_dir;

/// Default backup suffix appended to the config file name.
pub const DEFAULT_BACKUP_SUFFIX: &str = ".backup";

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Neither `HOME` nor (on Windows) `USERPROFILE` is set.
    #[error("could not determine home directory")]
    NoHomeDir,

    /// The config file does not exist.
    #[error("AWS config file not found at: {path}")]
    NotFound { path: PathBuf },

    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `~/.aws/config`.
///
/// # Errors
///
/// Returns [`ConfigFileError::NoHomeDir`] when the home directory is unknown.
pub fn default_config_path() -> Result<PathBuf, ConfigFileError> {
    let home = home_dir().ok_or(ConfigFileError::NoHomeDir)?;
    Ok(home.join(".aws").join("config"))
}

/// Appends `suffix` to the file name: `config` → `config.backup`.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(suffix);
    PathBuf::from(raw)
}

/// Reads `path` into byte lines.
///
/// # Errors
///
/// Returns [`ConfigFileError::NotFound`] if the file is absent and
/// [`ConfigFileError::Io`] for any other read failure.
pub fn read_lines(path: &Path) -> Result<Vec<Vec<u8>>, ConfigFileError> {
    let content = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigFileError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigFileError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let lines = split_lines(&content);
    debug!(path = %path.display(), lines = lines.len(), "read config file");
    Ok(lines)
}

/// Splits on `\n`, drops a `\r` before it, and ignores the empty remainder
/// after a final terminator.
fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    let mut lines: Vec<Vec<u8>> = content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect();
    if content.is_empty() || content.ends_with(b"\n") {
        lines.pop();
    }
    lines
}

/// Writes `lines` to `path`, each followed by `\n`, replacing the file.
///
/// # Errors
///
/// Returns [`ConfigFileError::Io`] if the file cannot be created or written.
pub fn write_lines<S: AsRef<[u8]>>(path: &Path, lines: &[S]) -> Result<(), ConfigFileError> {
    let io_err = |source| ConfigFileError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_ref()).map_err(io_err)?;
        writer.write_all(b"\n").map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    debug!(path = %path.display(), lines = lines.len(), "wrote config file");
    Ok(())
}

/// Writes a verbatim copy of `lines` next to `path` and returns where.
///
/// # Errors
///
/// Returns [`ConfigFileError::Io`] if the backup cannot be written.
pub fn write_backup<S: AsRef<[u8]>>(
    path: &Path,
    lines: &[S],
    suffix: &str,
) -> Result<PathBuf, ConfigFileError> {
    let backup = backup_path(path, suffix);
    write_lines(&backup, lines)?;
    Ok(backup)
}
