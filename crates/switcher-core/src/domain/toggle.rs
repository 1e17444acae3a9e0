//! Region toggler: makes exactly one group active.
//!
//! Lines strictly inside the target group's markers are uncommented; lines
//! inside every other group are commented out.  Blank lines, `##` comments,
//! the markers themselves, and anything outside a group are copied through
//! unchanged.
//!
//! Commenting prepends one `#` to a line that does not already start with
//! one.  Uncommenting removes one `#`, unless what remains is itself a
//! comment (`# # note`): such a line was written by hand, never produced by
//! commenting, and is left as is.  Together these make the toggle
//! idempotent: applying the same target twice gives the same result as
//! applying it once.
//!
//! The input slice is never modified and the returned vector always has the
//! same length as the input.

use thiserror::Error;
use tracing::{debug, warn};

use super::region::GroupRegistry;
use super::{is_protected, trim, trim_start, COMMENT_CHAR};

/// Reasons a toggle cannot be applied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToggleError {
    /// The target name has no entry in the registry.
    #[error("unknown organization: {0}")]
    UnknownGroup(String),

    /// The target's `## BEGIN` / `## END` markers are missing or out of order.
    #[error("organization {0} has a missing or misplaced ## BEGIN / ## END marker")]
    MalformedGroup(String),
}

/// Returns a copy of `lines` where `target` is the only enabled group.
///
/// `registry` must come from [`locate_groups`](super::region::locate_groups)
/// on these same `lines`; group indices past the end of `lines` are ignored.
/// `names` is the ordered group list; names missing from `registry` are
/// ignored.  Non-target groups with broken markers are left alone.
///
/// # Errors
///
/// - [`ToggleError::UnknownGroup`] if `target` is not in `registry`.
/// - [`ToggleError::MalformedGroup`] if `target` is not well-formed.
pub fn toggle_groups<L, N>(
    lines: &[L],
    registry: &GroupRegistry,
    names: &[N],
    target: &str,
) -> Result<Vec<Vec<u8>>, ToggleError>
where
    L: AsRef<[u8]>,
    N: AsRef<str>,
{
    let target_group = registry
        .get(target)
        .ok_or_else(|| ToggleError::UnknownGroup(target.to_string()))?;
    if !target_group.is_well_formed() {
        return Err(ToggleError::MalformedGroup(target.to_string()));
    }

    let mut output: Vec<Vec<u8>> = lines.iter().map(|l| l.as_ref().to_vec()).collect();

    for name in names {
        let name = name.as_ref();
        let Some(group) = registry.get(name) else {
            continue;
        };
        let Some(content) = group.content_lines() else {
            warn!(group = name, "skipping group with malformed markers");
            continue;
        };

        let enable = name == target;
        debug!(group = name, enable, lines = ?content, "toggling group");

        for index in content {
            let Some(line) = lines.get(index) else {
                break;
            };
            let rewritten = if enable {
                uncomment_line(line.as_ref())
            } else {
                comment_line(line.as_ref())
            };
            if let Some(rewritten) = rewritten {
                output[index] = rewritten;
            }
        }
    }

    Ok(output)
}

/// Prepends `#` to an enabled content line.  `None` means "leave as is".
fn comment_line(line: &[u8]) -> Option<Vec<u8>> {
    let trimmed = trim(line);
    if is_protected(trimmed) || trimmed.starts_with(&[COMMENT_CHAR]) {
        return None;
    }
    let mut commented = Vec::with_capacity(line.len() + 1);
    commented.push(COMMENT_CHAR);
    commented.extend_from_slice(line);
    Some(commented)
}

/// Removes one leading `#` from a disabled content line, keeping any
/// indentation in front of it.  `None` means "leave as is", which includes
/// nested comments such as `# # note`.
fn uncomment_line(line: &[u8]) -> Option<Vec<u8>> {
    if is_protected(trim(line)) {
        return None;
    }
    let body = trim_start(line);
    let rest = body.strip_prefix(&[COMMENT_CHAR])?;
    if trim_start(rest).starts_with(&[COMMENT_CHAR]) {
        return None;
    }
    let indent = &line[..line.len() - body.len()];
    Some([indent, rest].concat())
}
