//! # switcher-core
//!
//! Pure line-processing engine behind the AWS organization switcher.
//!
//! The AWS CLI reads every `[profile ...]` section it finds in
//! `~/.aws/config`.  People who work for several organizations often keep
//! all of them in one file and comment out the ones they are not using.
//! This crate automates that: each organization's block is wrapped in
//! marker comments and the engine comments/uncomments the lines between
//! them.
//!
//! ```text
//! ## BEGIN COMPANY_A
//! [profile default]
//! region = eu-west-1
//! ## END COMPANY_A
//!
//! ## BEGIN PERSONAL
//! #[profile default]
//! #region = us-east-1
//! ## END PERSONAL
//! ```
//!
//! The crate has no file-system, console, or process dependencies.  It works
//! on a slice of byte lines and always returns a new `Vec<Vec<u8>>`, so a
//! config file that is not valid UTF-8 passes through unchanged.
//!
//! - **`domain::region`** – locates `## BEGIN` / `## END` spans and decides
//!   which group is currently active.
//! - **`domain::toggle`** – rewrites lines so exactly one group is active.
//! - **`domain::names`** – display formatting for group identifiers.

pub mod domain;

// Re-export the most-used items so callers can write `switcher_core::locate_groups`
// instead of `switcher_core::domain::region::locate_groups`.
pub use domain::names::format_group_name;
pub use domain::region::{
    current_active, discover_group_names, locate_groups, Group, GroupRegistry,
};
pub use domain::toggle::{toggle_groups, ToggleError};
