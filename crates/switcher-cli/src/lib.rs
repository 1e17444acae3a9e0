//! switcher-cli library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! ```text
//! main.rs            clap args, logging, exit codes
//!   application/     selection parsing, switch decision (no I/O)
//!   infrastructure/
//!     storage/       AWS config file + switcher settings file
//!     console/       banner, menu, prompt input
//! ```

pub mod application;
pub mod infrastructure;
