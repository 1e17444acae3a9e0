//! Application layer use cases for the switcher.
//!
//! Use cases in this layer orchestrate the `switcher-core` domain to fulfil
//! a user goal and contain no file-system or console access, so they can be
//! tested with plain in-memory line vectors.
//!
//! - **`select_group`** – Interprets the answer typed at the menu prompt.
//! - **`switch_group`** – Builds the group registry, resolves the target,
//!   and produces the rewritten line sequence (or reports that nothing needs
//!   to change).

pub mod select_group;
pub mod switch_group;
