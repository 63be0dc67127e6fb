use std::fs;

use log::info;

use vidcheck_core::config::{CheckConfig, TruncationPolicy};
use vidcheck_core::error::Result;
use vidcheck_core::format::FrameSequence;
use vidcheck_core::utils::format_bytes;

use crate::cli::InfoArgs;
use crate::output::{print_heading, print_info, print_section, print_success};

/// Execute the info command
pub fn execute_info(args: InfoArgs) -> Result<()> {
    print_heading("Sequence Information");
    print_info("File", args.file.display());

    let config = if args.lenient_truncation {
        CheckConfig::with_truncation(TruncationPolicy::Lenient)
    } else {
        CheckConfig::default()
    };

    info!("Decoding sequence file {}", args.file.display());
    let sequence = FrameSequence::from_path_with(&args.file, &config)?;
    let header = &sequence.header;

    print_section("Header");
    print_info("Frames", header.frame_count);
    print_info("Channels", header.channels);
    print_info("Resolution", format!("{}x{}", header.width, header.height));

    print_section("Sizes");
    print_info("Frame size", format_bytes(header.frame_size() as u64));
    let payload = (header.frame_count as u64).saturating_mul(header.frame_size() as u64);
    print_info("Frame data", format_bytes(payload));
    let file_size = fs::metadata(&args.file)?.len();
    print_info("File size", format_bytes(file_size));

    print_success("Inspection completed");

    Ok(())
}
