//! Domain logic for organization groups.
//!
//! Nothing in here touches the file system or the console.  The CLI crate
//! reads the config file into lines, hands them to these functions, and
//! writes the result back.
//!
//! Lines are raw bytes (`AsRef<[u8]>`).  Markers, comments, and profile
//! headers are all ASCII, so content in any other encoding is carried
//! through untouched.

/// Marker-delimited group discovery and the active-group check.
pub mod region;

/// Comment/uncomment rewriting of group contents.
pub mod toggle;

/// Human-readable formatting of group identifiers.
pub mod names;

/// Prefix shared by marker lines and sub-comments inside a group.
pub const MARKER_COMMENT: &[u8] = b"##";

/// Prefix of a begin marker; the group name follows.
pub const BEGIN_PREFIX: &[u8] = b"## BEGIN ";

/// Prefix of an end marker; the group name follows.
pub const END_PREFIX: &[u8] = b"## END ";

/// A group containing an uncommented line with this prefix is active.
pub const PROFILE_PREFIX: &[u8] = b"[profile";

/// Single-byte comment used when disabling a line.
pub const COMMENT_CHAR: u8 = b'#';

/// Returns `true` for lines that toggling never touches: blank lines,
/// marker lines, and `##` sub-comments.
pub(crate) fn is_protected(trimmed: &[u8]) -> bool {
    trimmed.is_empty() || trimmed.starts_with(MARKER_COMMENT)
}

/// Strips leading ASCII whitespace.
pub(crate) fn trim_start(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    &line[start..]
}

/// Strips leading and trailing ASCII whitespace.
pub(crate) fn trim(line: &[u8]) -> &[u8] {
    let line = trim_start(line);
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |last| last + 1);
    &line[..end]
}
