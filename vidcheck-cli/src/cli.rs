// vidcheck-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Vidcheck: Raw video transformation verifier",
    long_about = "Checks that a binary video output file is the claimed transformation of an input file, using the vidcheck-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verifies an output sequence file against an input file for an operation
    Verify(VerifyArgs),
    /// Prints the header and size details of a sequence file
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Input sequence file the pipeline started from
    #[arg(short = 'i', long = "input", required = true, value_name = "INPUT_FILE")]
    pub input_path: PathBuf,

    /// Output sequence file the pipeline produced
    #[arg(short = 'o', long = "output", required = true, value_name = "OUTPUT_FILE")]
    pub output_path: PathBuf,

    /// Operation the pipeline claims to have applied (e.g. reverse, swap_channel)
    #[arg(required = true, value_name = "OPERATION")]
    pub operation: String,

    /// Operation parameters (channel indexes, range bounds, scale factor)
    #[arg(value_name = "PARAMS")]
    pub params: Vec<String>,

    /// Accept files whose length differs from the header's declared size
    #[arg(long, default_value_t = false)]
    pub lenient_truncation: bool,
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Sequence file to inspect
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,

    /// Accept files whose length differs from the header's declared size
    #[arg(long, default_value_t = false)]
    pub lenient_truncation: bool,
}
