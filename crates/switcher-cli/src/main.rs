//! AWS Account Organization Switcher: entry point.
//!
//! Activates one organization block in `~/.aws/config` and comments out the
//! others.  Blocks are delimited by marker comments:
//!
//! ```text
//! ## BEGIN COMPANY_A
//! [profile default]
//! ...
//! ## END COMPANY_A
//! ```
//!
//! # Usage
//!
//! ```text
//! aws-switcher [OPTIONS]
//!
//! Options:
//!   --config-file <PATH>  Config file to edit [env: AWS_CONFIG_FILE]
//!   --settings <PATH>     Switcher settings file
//!   --org <NAME>          Activate NAME without showing the menu
//!   --list                Print the organizations and exit
//!   --init-settings       Write a default settings file and exit
//! ```
//!
//! # Exit codes
//!
//! `0` on success, quit, `--list`, or when the chosen organization is
//! already active; `1` for every error.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use switcher_cli::infrastructure::console::StdinChoiceSource;
use switcher_cli::infrastructure::session::{list_groups, run_session, SessionOptions, Target};
use switcher_cli::infrastructure::storage::config_file::default_config_path;
use switcher_cli::infrastructure::storage::settings::{
    load_settings, load_settings_from, save_settings_to, settings_file_path, Settings,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Switch the active organization block in the AWS CLI config file.
#[derive(Debug, Parser)]
#[command(
    name = "aws-switcher",
    about = "Switch the active organization block in the AWS CLI config file",
    version
)]
struct Cli {
    /// Config file to edit.
    ///
    /// Defaults to `config_path` from the settings file, then `~/.aws/config`.
    #[arg(long, env = "AWS_CONFIG_FILE")]
    config_file: Option<PathBuf>,

    /// Settings file to load instead of the platform default location.
    ///
    /// Unlike the default location, an explicit settings file must exist.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Organization to activate without showing the menu.
    ///
    /// Accepts the marker name (`COMPANY_A`) or its display form (`"Company A"`).
    #[arg(long, conflicts_with = "list")]
    org: Option<String>,

    /// Print the organizations found in the config file and exit.
    #[arg(long)]
    list: bool,

    /// Write a settings file with default values and exit.
    #[arg(long, conflicts_with_all = ["org", "list"])]
    init_settings: bool,
}

impl Cli {
    fn load_settings(&self) -> anyhow::Result<Settings> {
        match &self.settings {
            Some(path) => load_settings_from(path)
                .with_context(|| format!("failed to load settings from {}", path.display())),
            None => load_settings().context("failed to load settings"),
        }
    }

    /// Resolves the config file path: flag/env, then settings, then default.
    fn config_path(&self, settings: &Settings) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.config_file {
            return Ok(path.clone());
        }
        if let Some(path) = &settings.switcher.config_path {
            return Ok(path.clone());
        }
        Ok(default_config_path()?)
    }

    fn target(&self) -> Target {
        match &self.org {
            Some(name) => Target::Named(name.clone()),
            None => Target::Prompt,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.init_settings {
        return init_settings(cli.settings.as_deref());
    }

    let settings = cli.load_settings()?;

    // `RUST_LOG` wins; otherwise use the settings level.  Logs go to stderr so
    // they never interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.switcher.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = SessionOptions {
        config_path: cli.config_path(&settings)?,
        backup_suffix: settings.switcher.backup_suffix.clone(),
        organizations: settings.groups.organizations.clone(),
    };
    debug!(config = %options.config_path.display(), "resolved config file");

    let mut stdout = std::io::stdout().lock();

    if cli.list {
        list_groups(&options, &mut stdout)?;
        return Ok(());
    }

    let outcome = run_session(&options, cli.target(), &mut stdout, &mut StdinChoiceSource)?;
    debug!(?outcome, "session finished");
    Ok(())
}

/// Writes default settings unless the file already exists.
fn init_settings(explicit: Option<&std::path::Path>) -> anyhow::Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => settings_file_path()?,
    };

    if path.exists() {
        println!("Settings already exist at: {}", path.display());
        return Ok(());
    }

    save_settings_to(&path, &Settings::default())
        .with_context(|| format!("failed to write settings to {}", path.display()))?;
    println!("Settings written to: {}", path.display());
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
