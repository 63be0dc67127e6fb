use super::report::ValidationReport;
use crate::format::FrameSequence;

/// Verify that a channel was multiplied by a factor.
///
/// The expected output value is the product truncated toward zero and
/// clamped to the u8 range. Stops at the first mismatching pixel. Assumes
/// `channel` is within the header's channel count.
pub fn validate_scale(
    input: &FrameSequence,
    output: &FrameSequence,
    channel: u8,
    factor: f64,
    report: &mut ValidationReport,
) {
    let channels = input.header.channels as usize;
    let channel = channel as usize;

    for (frame_index, (in_frame, out_frame)) in
        input.frames.iter().zip(&output.frames).enumerate()
    {
        for index in (channel..in_frame.len()).step_by(channels) {
            let expected = scale_expected(in_frame[index], factor);
            match out_frame.get(index) {
                Some(&found) if found == expected => {}
                Some(&found) => {
                    report.add_error(
                        format!(
                            "Frame {}, Pixel {}: Expected {}, Found {}",
                            frame_index,
                            index / channels,
                            expected,
                            found
                        ),
                        "Channel Scale",
                    );
                    return;
                }
                None => {
                    report.add_error(
                        format!(
                            "Frame {}, Pixel {}: output frame is truncated",
                            frame_index,
                            index / channels
                        ),
                        "Channel Scale",
                    );
                    return;
                }
            }
        }
    }

    report.add_info("Scale channel operation verified successfully", "Channel Scale");
}

/// Expected output value for one input value under the given factor.
fn scale_expected(value: u8, factor: f64) -> u8 {
    let scaled = (f64::from(value) * factor).trunc();
    scaled.clamp(0.0, 255.0) as u8
}
