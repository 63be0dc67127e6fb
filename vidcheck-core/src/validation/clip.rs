use super::report::ValidationReport;
use crate::format::FrameSequence;

/// Verify that every output value of a channel sits inside an inclusive
/// range.
///
/// Only the output file is examined; the input plays no part in range
/// checking. Stops at the first out-of-range value. `channel` must be
/// within the header's channel count.
pub fn validate_clip(
    output: &FrameSequence,
    channel: u8,
    min_value: u8,
    max_value: u8,
    report: &mut ValidationReport,
) {
    let channels = output.header.channels as usize;
    let channel = channel as usize;

    for (frame_index, frame) in output.frames.iter().enumerate() {
        for index in (channel..frame.len()).step_by(channels) {
            let value = frame[index];
            if !(min_value..=max_value).contains(&value) {
                report.add_error(
                    format!(
                        "Frame {}, Pixel {}: Value {} out of range {}..={}",
                        frame_index,
                        index / channels,
                        value,
                        min_value,
                        max_value
                    ),
                    "Channel Clip",
                );
                return;
            }
        }
    }

    report.add_info("Clip channel operation verified successfully", "Channel Clip");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::SequenceHeader;

    fn sequence(channels: u8, frames: Vec<Vec<u8>>) -> FrameSequence {
        FrameSequence {
            header: SequenceHeader {
                frame_count: frames.len() as i64,
                channels,
                height: 1,
                width: 2,
            },
            frames,
        }
    }

    #[test]
    fn values_inside_range_pass() {
        let output = sequence(3, vec![vec![0, 10, 255, 1, 200, 2]]);

        let mut report = ValidationReport::new();
        validate_clip(&output, 1, 10, 200, &mut report);

        assert!(report.passed);
        assert_eq!(
            report.infos()[0].message,
            "Clip channel operation verified successfully"
        );
    }

    #[test]
    fn boundary_values_are_inside() {
        let output = sequence(1, vec![vec![10, 200]]);

        let mut report = ValidationReport::new();
        validate_clip(&output, 0, 10, 200, &mut report);

        assert!(report.passed);
    }

    #[test]
    fn out_of_range_value_fails_with_coordinates() {
        let output = sequence(3, vec![vec![0, 10, 0, 0, 201, 0]]);

        let mut report = ValidationReport::new();
        validate_clip(&output, 1, 10, 200, &mut report);

        assert!(!report.passed);
        assert_eq!(
            report.errors()[0].message,
            "Frame 0, Pixel 1: Value 201 out of range 10..=200"
        );
    }

    #[test]
    fn other_channels_are_ignored() {
        // Channel 0 carries values far outside the range; only channel 1 is
        // checked.
        let output = sequence(2, vec![vec![255, 50, 0, 60]]);

        let mut report = ValidationReport::new();
        validate_clip(&output, 1, 50, 60, &mut report);

        assert!(report.passed);
    }

    #[test]
    fn stops_at_first_out_of_range_value() {
        let output = sequence(1, vec![vec![5, 5], vec![5, 5]]);

        let mut report = ValidationReport::new();
        validate_clip(&output, 0, 10, 200, &mut report);

        assert_eq!(report.errors().len(), 1);
        assert_eq!(
            report.errors()[0].message,
            "Frame 0, Pixel 0: Value 5 out of range 10..=200"
        );
    }

    #[test]
    fn empty_frames_pass() {
        let output = sequence(3, vec![Vec::new(), Vec::new()]);

        let mut report = ValidationReport::new();
        validate_clip(&output, 1, 10, 200, &mut report);

        assert!(report.passed);
    }
}
