// vidcheck-cli/src/main.rs
//
// Binary entry point: parses arguments, initializes logging, dispatches
// commands, and maps results to process exit codes.

use std::process;

use clap::Parser;

use vidcheck_cli::cli::{Cli, Commands};
use vidcheck_cli::commands::{info::execute_info, verify::execute_verify};
use vidcheck_cli::output::print_error;

fn main() {
    let cli = Cli::parse();

    vidcheck_core::logging::init(cli.verbose);

    let exit_code = match cli.command {
        Commands::Verify(args) => match execute_verify(args) {
            Ok(true) => 0,
            Ok(false) => 1,
            Err(e) => {
                print_error(&e.to_string());
                1
            }
        },
        Commands::Info(args) => match execute_info(args) {
            Ok(()) => 0,
            Err(e) => {
                print_error(&e.to_string());
                1
            }
        },
    };

    process::exit(exit_code);
}
