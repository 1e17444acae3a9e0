//! Infrastructure layer for the switcher.
//!
//! Contains OS-facing adapters: the AWS config file on disk, the switcher's
//! own settings file, and the console.  [`session`] ties them to the
//! application layer for one run of the binary.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `switcher_core`, but MUST NOT be imported by the `application` layer.

pub mod console;
pub mod session;
pub mod storage;
