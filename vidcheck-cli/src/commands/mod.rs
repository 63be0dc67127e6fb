//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `verify` command.
/// This command compares an output sequence file against an input file.
pub mod verify;

/// Module containing the implementation of the `info` command.
/// This command prints the header and size details of a sequence file.
pub mod info;
