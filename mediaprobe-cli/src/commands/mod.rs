//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `info` command.
pub mod info;

/// Module containing the implementation of the `probe` command.
pub mod probe;

/// Module containing the implementation of the `scan` command.
pub mod scan;
