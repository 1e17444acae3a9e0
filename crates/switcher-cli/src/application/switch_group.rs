//! SwitchGroupUseCase: decides how the config file must change.
//!
//! The use case owns the lines read from disk and the [`GroupRegistry`]
//! built from them.  Callers pick a target (by menu index or by name) and
//! ask for a [`SwitchOutcome`]; writing the result is the caller's job.
//!
//! Group names come from one of two places:
//!
//! - a static list from the settings file, when one is configured;
//! - otherwise, every `## BEGIN <NAME>` marker found in the file.

use switcher_core::{
    discover_group_names, format_group_name, locate_groups, toggle_groups, Group, GroupRegistry,
    ToggleError,
};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for switch operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwitchError {
    /// The file contains no `## BEGIN` markers and no static list was given.
    #[error(
        "No organizations found in config file.\n\
         Please ensure your config file has sections marked with:\n\
         ## BEGIN ORGANIZATION_NAME\n\
         ...\n\
         ## END ORGANIZATION_NAME"
    )]
    NoGroups,

    /// `--org` named something that matches no group.
    #[error("unknown organization '{0}'")]
    UnknownOrganization(String),

    /// The toggle engine refused the target.
    #[error(transparent)]
    Toggle(#[from] ToggleError),
}

/// Result of a successful switch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The target already holds the active profiles; nothing to write.
    AlreadyActive,
    /// The rewritten file contents.
    Switched { lines: Vec<Vec<u8>> },
}

/// Holds one run's worth of parsed state.
#[derive(Debug, Clone)]
pub struct SwitchGroupUseCase {
    lines: Vec<Vec<u8>>,
    registry: GroupRegistry,
}

impl SwitchGroupUseCase {
    /// Locates groups in `lines`.
    ///
    /// `static_names` overrides marker discovery when non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::NoGroups`] when there is nothing to choose from.
    pub fn new(lines: Vec<Vec<u8>>, static_names: &[String]) -> Result<Self, SwitchError> {
        let names = if static_names.is_empty() {
            discover_group_names(&lines)
        } else {
            static_names.to_vec()
        };
        if names.is_empty() {
            return Err(SwitchError::NoGroups);
        }

        let registry = locate_groups(&lines, &names);
        debug!(groups = registry.len(), "located organization groups");
        Ok(Self { lines, registry })
    }

    /// The original, unmodified lines.
    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    pub fn registry(&self) -> &GroupRegistry {
        &self.registry
    }

    /// Group names in menu order.
    pub fn names(&self) -> &[String] {
        self.registry.names()
    }

    pub fn current_active(&self) -> Option<&Group> {
        self.registry.current_active()
    }

    /// Name of the group shown at zero-based menu position `index`.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names().get(index).map(String::as_str)
    }

    /// Resolves a user-supplied name to a registered group name.
    ///
    /// Accepts the raw identifier (`COMPANY_A`, exact match) or its display
    /// form (`company a`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::UnknownOrganization`] when nothing matches.
    pub fn resolve_name(&self, requested: &str) -> Result<&str, SwitchError> {
        let requested = requested.trim();
        let names = self.names();
        names
            .iter()
            .find(|name| name.as_str() == requested)
            .or_else(|| {
                names
                    .iter()
                    .find(|name| format_group_name(name).eq_ignore_ascii_case(requested))
            })
            .map(String::as_str)
            .ok_or_else(|| SwitchError::UnknownOrganization(requested.to_string()))
    }

    /// Computes the new file contents that make `target` the active group.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Toggle`] if `target` is unknown or its markers
    /// are malformed.
    pub fn switch_to(&self, target: &str) -> Result<SwitchOutcome, SwitchError> {
        let group = self
            .registry
            .get(target)
            .ok_or_else(|| ToggleError::UnknownGroup(target.to_string()))?;
        if group.active {
            info!(group = target, "organization already active");
            return Ok(SwitchOutcome::AlreadyActive);
        }

        let lines = toggle_groups(&self.lines, &self.registry, self.names(), target)?;
        info!(group = target, "organization switch prepared");
        Ok(SwitchOutcome::Switched { lines })
    }
}
