//! One run of the switcher: read the file, pick a target, write the result.
//!
//! ```text
//! run_session()
//!  └─ read_lines()                  config file → Vec<Vec<u8>>
//!  └─ SwitchGroupUseCase::new()     locate groups
//!  └─ target
//!       ├─ Prompt: banner, menu, ChoiceSource, parse_selection()
//!       └─ Named:  resolve_name()
//!  └─ switch_to()
//!       ├─ AlreadyActive: report, no write
//!       └─ Switched:      write_backup() (best effort), write_lines()
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use switcher_core::format_group_name;
use thiserror::Error;
use tracing::{info, warn};

use crate::application::select_group::{parse_selection, Selection, SelectionError};
use crate::application::switch_group::{SwitchError, SwitchGroupUseCase, SwitchOutcome};
use crate::infrastructure::console::{menu, ChoiceSource};
use crate::infrastructure::storage::config_file::{
    read_lines, write_backup, write_lines, ConfigFileError,
};

/// Error type for a switcher run.  Every variant is fatal.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    ConfigFile(#[from] ConfigFileError),

    #[error(transparent)]
    Switch(#[from] SwitchError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The prompt answer could not be read.
    #[error("error reading input: {0}")]
    Input(#[source] io::Error),

    /// Console output failed.
    #[error("error writing output: {0}")]
    Output(#[source] io::Error),
}

/// Everything a run needs to know besides the user's answer.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Config file to edit.
    pub config_path: PathBuf,
    /// Appended to `config_path` to form the backup path.
    pub backup_suffix: String,
    /// Static group list; empty means discover from markers.
    pub organizations: Vec<String>,
}

/// How the target group is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Show the menu and ask.
    Prompt,
    /// Use this name (identifier or display form) without asking.
    Named(String),
}

/// How a run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user typed `q`.
    Quit,
    /// The chosen group was already active; the file was not touched.
    AlreadyActive { name: String },
    /// The file was rewritten.  `backup` is `None` if the backup failed.
    Switched {
        name: String,
        backup: Option<PathBuf>,
    },
}

/// Runs one switch against `options.config_path`.
///
/// Console output goes to `out`; the backup warning goes to stderr.
///
/// # Errors
///
/// Any [`SessionError`]: missing or unreadable file, no groups, invalid
/// menu answer, unknown or malformed target, or a failed write of the
/// config file itself.
pub fn run_session<W, C>(
    options: &SessionOptions,
    target: Target,
    out: &mut W,
    input: &mut C,
) -> Result<SessionOutcome, SessionError>
where
    W: Write,
    C: ChoiceSource,
{
    let lines = read_lines(&options.config_path)?;
    let use_case = SwitchGroupUseCase::new(lines, &options.organizations)?;

    let selected = match target {
        Target::Prompt => {
            menu::render_banner(out).map_err(SessionError::Output)?;
            menu::render_current(out, use_case.current_active()).map_err(SessionError::Output)?;
            menu::render_menu(out, use_case.registry()).map_err(SessionError::Output)?;

            let answer = input.read_choice().map_err(SessionError::Input)?;
            let count = use_case.names().len();
            match parse_selection(&answer, count)? {
                Selection::Quit => {
                    writeln!(out, "Bye! 👋").map_err(SessionError::Output)?;
                    return Ok(SessionOutcome::Quit);
                }
                Selection::Group(index) => use_case
                    .name_at(index)
                    .map(str::to_string)
                    .ok_or_else(|| SelectionError::InvalidChoice {
                        input: answer.trim().to_string(),
                        count,
                    })?,
            }
        }
        Target::Named(requested) => use_case.resolve_name(&requested)?.to_string(),
    };
    let display = format_group_name(&selected);

    let new_lines = match use_case.switch_to(&selected)? {
        SwitchOutcome::AlreadyActive => {
            writeln!(out, "\n✨ {display} is already active. No changes needed.")
                .map_err(SessionError::Output)?;
            return Ok(SessionOutcome::AlreadyActive { name: selected });
        }
        SwitchOutcome::Switched { lines } => lines,
    };

    writeln!(out, "\n🔄 Switching to {display}...").map_err(SessionError::Output)?;

    let backup = match write_backup(
        &options.config_path,
        use_case.lines(),
        &options.backup_suffix,
    ) {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("could not create backup: {e}");
            eprintln!("Warning: Could not create backup: {e}");
            None
        }
    };

    write_lines(&options.config_path, &new_lines)?;
    info!(group = %selected, path = %options.config_path.display(), "config file updated");

    writeln!(out, "✅ Successfully switched to {display}!").map_err(SessionError::Output)?;
    if let Some(path) = &backup {
        writeln!(out, "💾 Backup saved to: {}", path.display()).map_err(SessionError::Output)?;
    }
    writeln!(out).map_err(SessionError::Output)?;
    writeln!(
        out,
        "You can now use your AWS CLI with the active organization's profiles."
    )
    .map_err(SessionError::Output)?;

    Ok(SessionOutcome::Switched {
        name: selected,
        backup,
    })
}

/// Prints the numbered group list (with the active tick) and returns.
///
/// # Errors
///
/// Returns [`SessionError`] if the file cannot be read or holds no groups.
pub fn list_groups<W: Write>(options: &SessionOptions, out: &mut W) -> Result<(), SessionError> {
    let lines = read_lines(&options.config_path)?;
    let use_case = SwitchGroupUseCase::new(lines, &options.organizations)?;
    menu::render_entries(out, use_case.registry()).map_err(SessionError::Output)
}
