// vidcheck-cli/src/lib.rs
//
// Library portion of the vidcheck CLI application.
// Contains argument definitions, command logic, and terminal presentation.

pub mod cli;
pub mod commands;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, InfoArgs, VerifyArgs};
pub use commands::info::execute_info;
pub use commands::verify::execute_verify;
