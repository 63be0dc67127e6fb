//! Transformation verification module
//!
//! Responsibilities:
//! - Decode the input and output sequence files
//! - Check that both files agree on frame count and pixel layout
//! - Check operation parameters against the decoded header
//! - Run the byte comparison for the claimed operation
//! - Collect all findings into a validation report
//!
//! Decode failures surface as errors; every verification finding, including
//! the final pass/fail state, lives in the returned report.

use std::path::Path;

use log::{error, info};

use crate::config::CheckConfig;
use crate::error::Result;
use crate::format::FrameSequence;
use crate::logging;
use crate::operation::Operation;

pub mod clip;
pub mod report;
pub mod reverse;
pub mod scale;
pub mod swap;

// Re-export from report module
pub use report::{ValidationLevel, ValidationMessage, ValidationReport};

/// Verify that an output file is the given transformation of an input file.
pub fn verify_transform<P1, P2>(
    input_file: P1,
    output_file: P2,
    operation: &Operation,
) -> Result<ValidationReport>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    verify_transform_with(input_file, output_file, operation, &CheckConfig::default())
}

/// Verify a transformation under the given configuration.
///
/// # Arguments
///
/// * `input_file` - Sequence file the pipeline started from
/// * `output_file` - Sequence file the pipeline produced
/// * `operation` - Transformation the pipeline claims to have applied
/// * `config` - Decode and verification settings
///
/// # Returns
///
/// * `Result<ValidationReport>` - Verification report; `passed` is false if
///   any check failed
pub fn verify_transform_with<P1, P2>(
    input_file: P1,
    output_file: P2,
    operation: &Operation,
    config: &CheckConfig,
) -> Result<ValidationReport>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let input_path = input_file.as_ref();
    let output_path = output_file.as_ref();

    logging::log_section("TRANSFORM VERIFICATION");
    info!(
        "Verifying {} against {} for operation {}",
        output_path.display(),
        input_path.display(),
        operation
    );

    let input = FrameSequence::from_path_with(input_path, config)?;
    let output = FrameSequence::from_path_with(output_path, config)?;

    let mut report = ValidationReport::new();

    report.add_info(
        format!(
            "Input: {} ({} frame(s))",
            input_path.display(),
            input.header.frame_count
        ),
        "File",
    );
    report.add_info(
        format!(
            "Output: {} ({} frame(s))",
            output_path.display(),
            output.header.frame_count
        ),
        "File",
    );

    // 1. Metadata comparison; nothing else is checked if the headers differ
    logging::log_subsection("METADATA VALIDATION");
    validate_metadata(&input, &output, &mut report);
    if !report.passed {
        return Ok(report);
    }

    // 2. Operation parameters against the decoded channel count
    logging::log_subsection("PARAMETER VALIDATION");
    validate_channel_bounds(operation, &input, &mut report);
    if !report.passed {
        return Ok(report);
    }

    // 3. Byte comparison for the claimed operation
    match operation {
        Operation::Reverse => {
            logging::log_subsection("FRAME ORDER VALIDATION");
            reverse::validate_reverse(&input, &output, &mut report);
        }
        Operation::SwapChannel { channel1, channel2 } => {
            logging::log_subsection("CHANNEL SWAP VALIDATION");
            swap::validate_swap(&input, &output, *channel1, *channel2, &mut report);
        }
        Operation::ClipChannel {
            channel,
            min_value,
            max_value,
        } => {
            logging::log_subsection("CHANNEL CLIP VALIDATION");
            clip::validate_clip(&output, *channel, *min_value, *max_value, &mut report);
        }
        Operation::ScaleChannel { channel, factor } => {
            logging::log_subsection("CHANNEL SCALE VALIDATION");
            scale::validate_scale(&input, &output, *channel, *factor, &mut report);
        }
    }

    logging::log_subsection("VERIFICATION SUMMARY");
    if report.passed {
        info!(
            "Verification passed: {} warning(s)",
            report.warnings().len()
        );
    } else {
        error!(
            "Verification failed: {} error(s), {} warning(s)",
            report.errors().len(),
            report.warnings().len()
        );
    }

    Ok(report)
}

/// Compare the four header fields of both files.
fn validate_metadata(
    input: &FrameSequence,
    output: &FrameSequence,
    report: &mut ValidationReport,
) {
    let a = &input.header;
    let b = &output.header;

    let mut mismatched = Vec::new();
    if a.frame_count != b.frame_count {
        mismatched.push(format!(
            "frame_count {} vs {}",
            a.frame_count, b.frame_count
        ));
    }
    if a.channels != b.channels {
        mismatched.push(format!("channels {} vs {}", a.channels, b.channels));
    }
    if a.height != b.height {
        mismatched.push(format!("height {} vs {}", a.height, b.height));
    }
    if a.width != b.width {
        mismatched.push(format!("width {} vs {}", a.width, b.width));
    }

    if !mismatched.is_empty() {
        report.add_error(
            format!("Video metadata mismatch: {}", mismatched.join(", ")),
            "Metadata",
        );
        return;
    }

    report.add_info(
        format!(
            "Metadata match: {} frame(s), {} channel(s), {}x{}",
            a.frame_count, a.channels, a.width, a.height
        ),
        "Metadata",
    );
}

/// Check the operation's channel indexes against the decoded channel count.
fn validate_channel_bounds(
    operation: &Operation,
    input: &FrameSequence,
    report: &mut ValidationReport,
) {
    let channels = input.header.channels;

    for channel in operation.channel_indexes() {
        if channel >= channels {
            report.add_error(
                format!(
                    "Channel {} out of range for a {}-channel sequence",
                    channel, channels
                ),
                "Parameters",
            );
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::SequenceHeader;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_sequence(path: &Path, channels: u8, height: u8, width: u8, frames: &[Vec<u8>]) {
        let header = SequenceHeader {
            frame_count: frames.len() as i64,
            channels,
            height,
            width,
        };
        let mut file = File::create(path).unwrap();
        header.write_to(&mut file).unwrap();
        for frame in frames {
            file.write_all(frame).unwrap();
        }
    }

    #[test]
    fn metadata_mismatch_short_circuits() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.bin");
        let output = dir.path().join("output.bin");
        write_sequence(&input, 1, 1, 2, &[vec![1, 2]]);
        write_sequence(&output, 2, 1, 2, &[vec![1, 2, 3, 4]]);

        let report = verify_transform(&input, &output, &Operation::Reverse).unwrap();

        assert!(!report.passed);
        assert!(
            report.errors()[0]
                .message
                .starts_with("Video metadata mismatch: channels 1 vs 2")
        );
        // No frame comparison ran.
        assert_eq!(report.errors().len(), 1);
    }

    #[test]
    fn channel_out_of_bounds_is_reported() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.bin");
        let output = dir.path().join("output.bin");
        write_sequence(&input, 2, 1, 1, &[vec![1, 2]]);
        write_sequence(&output, 2, 1, 1, &[vec![2, 1]]);

        let operation = Operation::SwapChannel {
            channel1: 0,
            channel2: 2,
        };
        let report = verify_transform(&input, &output, &operation).unwrap();

        assert!(!report.passed);
        assert_eq!(
            report.errors()[0].message,
            "Channel 2 out of range for a 2-channel sequence"
        );
    }

    #[test]
    fn decode_errors_propagate() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("output.bin");
        write_sequence(&output, 1, 1, 1, &[vec![1]]);

        let err = verify_transform(
            dir.path().join("absent.bin"),
            &output,
            &Operation::Reverse,
        )
        .unwrap_err();

        assert!(matches!(err, crate::error::VidcheckError::NotFound(_)));
    }

    #[test]
    fn reverse_pass_end_to_end() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.bin");
        let output = dir.path().join("output.bin");
        write_sequence(&input, 1, 1, 2, &[vec![1, 2], vec![3, 4]]);
        write_sequence(&output, 1, 1, 2, &[vec![3, 4], vec![1, 2]]);

        let report = verify_transform(&input, &output, &Operation::Reverse).unwrap();

        assert!(report.passed);
        assert!(
            report
                .infos()
                .iter()
                .any(|m| m.message == "Reverse operation verified successfully")
        );
    }
}
