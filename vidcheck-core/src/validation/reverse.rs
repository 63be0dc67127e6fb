use super::report::ValidationReport;
use crate::format::FrameSequence;

/// Verify that the output holds the input frames in reverse order.
///
/// Frame `i` of the input must equal frame `frame_count - 1 - i` of the
/// output byte for byte. Stops at the first mismatching pair.
pub fn validate_reverse(
    input: &FrameSequence,
    output: &FrameSequence,
    report: &mut ValidationReport,
) {
    let frame_count = input.frames.len();

    for i in 0..frame_count {
        let j = frame_count - 1 - i;
        match output.frames.get(j) {
            Some(out_frame) if *out_frame == input.frames[i] => {}
            _ => {
                report.add_error(
                    format!(
                        "Frame {} does not match the reverse of the output frame {}",
                        i, j
                    ),
                    "Frame Order",
                );
                return;
            }
        }
    }

    report.add_info("Reverse operation verified successfully", "Frame Order");
}
