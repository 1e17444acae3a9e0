//! Region locator: finds marker-delimited groups in a line sequence.
//!
//! A group is the span between two exact-match marker lines:
//!
//! ```text
//! ## BEGIN COMPANY_A      <- start (inclusive)
//! [profile default]
//! ## END COMPANY_A        <- end (exclusive boundary)
//! ```
//!
//! Markers are compared after trimming surrounding ASCII whitespace, and
//! the name comparison is case-sensitive.  Lines are bytes; only marker
//! names must be valid UTF-8.  The locator never fails: a group with
//! a missing or misplaced marker is still recorded, but
//! [`Group::is_well_formed`] returns `false` for it and it is never active.

use std::collections::HashMap;
use std::ops::Range;

use tracing::debug;

use super::{is_protected, trim, BEGIN_PREFIX, END_PREFIX, PROFILE_PREFIX};

/// One organization block located in the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Identifier as written in the markers, e.g. `COMPANY_A`.
    pub name: String,
    /// Index of the `## BEGIN` line, if one was seen.
    pub start: Option<usize>,
    /// Index of the `## END` line, if one was seen.
    pub end: Option<usize>,
    /// `true` when the span holds at least one uncommented `[profile` line.
    pub active: bool,
}

impl Group {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            start: None,
            end: None,
            active: false,
        }
    }

    /// Both markers were found and the begin marker precedes the end marker.
    pub fn is_well_formed(&self) -> bool {
        self.span().is_some()
    }

    /// Marker-to-marker span `start..end`, or `None` for a malformed group.
    pub fn span(&self) -> Option<Range<usize>> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start < end => Some(start..end),
            _ => None,
        }
    }

    /// Indices of the lines strictly between the two markers.
    pub fn content_lines(&self) -> Option<Range<usize>> {
        self.span().map(|span| span.start + 1..span.end)
    }
}

/// Name → [`Group`] lookup that remembers the candidate order.
///
/// Lookups go through the map; iteration follows the order in which names
/// were supplied to [`locate_groups`], which is also the menu order.
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    groups: HashMap<String, Group>,
    order: Vec<String>,
}

impl GroupRegistry {
    /// Creates a registry holding an unlocated [`Group`] for every distinct
    /// candidate name.
    fn with_candidates<S: AsRef<str>>(candidates: &[S]) -> Self {
        let mut registry = Self::default();
        for name in candidates {
            let name = name.as_ref();
            if registry.groups.contains_key(name) {
                continue;
            }
            registry.order.push(name.to_string());
            registry.groups.insert(name.to_string(), Group::new(name));
        }
        registry
    }

    /// Returns the group registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// Group names in menu order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Iterates groups in menu order.
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.order.iter().filter_map(move |name| self.groups.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// First active group in menu order.
    ///
    /// A hand-edited file can have several active groups at once; only the
    /// first one is reported.
    pub fn current_active(&self) -> Option<&Group> {
        self.iter().find(|group| group.active)
    }
}

/// Free-function form of [`GroupRegistry::current_active`].
pub fn current_active(registry: &GroupRegistry) -> Option<&Group> {
    registry.current_active()
}

/// Extracts group names from `## BEGIN <NAME>` markers.
///
/// Names are trimmed, empty names are ignored, and each name is returned
/// once, in order of first appearance.  A name that is not valid UTF-8 is
/// skipped.
pub fn discover_group_names<S: AsRef<[u8]>>(lines: &[S]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for line in lines {
        let Some(rest) = trim(line.as_ref()).strip_prefix(BEGIN_PREFIX) else {
            continue;
        };
        let Ok(name) = std::str::from_utf8(trim(rest)) else {
            debug!(name = %String::from_utf8_lossy(rest), "skipping non-UTF-8 group name");
            continue;
        };
        if name.is_empty() || names.iter().any(|seen| seen == name) {
            continue;
        }
        names.push(name.to_string());
    }
    names
}

/// Builds the [`GroupRegistry`] for `candidates` in a single pass over `lines`.
///
/// A repeated begin marker overwrites the earlier start.  The active flag is
/// computed when the end marker is reached, and cleared afterwards for any
/// group that did not end up well-formed.
pub fn locate_groups<L, C>(lines: &[L], candidates: &[C]) -> GroupRegistry
where
    L: AsRef<[u8]>,
    C: AsRef<str>,
{
    let mut registry = GroupRegistry::with_candidates(candidates);

    for (index, line) in lines.iter().enumerate() {
        let trimmed = trim(line.as_ref());

        if let Some(name) = marker_name(trimmed, BEGIN_PREFIX) {
            if let Some(group) = registry.groups.get_mut(name) {
                debug!(group = name, line = index, "begin marker");
                group.start = Some(index);
            }
        } else if let Some(name) = marker_name(trimmed, END_PREFIX) {
            if let Some(group) = registry.groups.get_mut(name) {
                debug!(group = name, line = index, "end marker");
                group.end = Some(index);
                group.active = match group.start {
                    Some(start) if start < index => is_span_active(lines, start + 1..index),
                    _ => false,
                };
            }
        }
    }

    for group in registry.groups.values_mut() {
        if !group.is_well_formed() {
            debug!(group = %group.name, start = ?group.start, end = ?group.end, "malformed group");
            group.active = false;
        }
    }

    registry
}

/// Name following `prefix` on a trimmed marker line.
fn marker_name<'a>(trimmed: &'a [u8], prefix: &[u8]) -> Option<&'a str> {
    trimmed
        .strip_prefix(prefix)
        .and_then(|name| std::str::from_utf8(name).ok())
}

/// Returns `true` if any line in `range` is an uncommented profile header.
fn is_span_active<L: AsRef<[u8]>>(lines: &[L], range: Range<usize>) -> bool {
    lines[range]
        .iter()
        .map(|line| trim(line.as_ref()))
        .filter(|trimmed| !is_protected(trimmed))
        .any(|trimmed| trimmed.starts_with(PROFILE_PREFIX))
}
