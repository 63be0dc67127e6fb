use super::report::ValidationReport;
use crate::format::FrameSequence;

/// Verify that two channels were exchanged on every pixel.
///
/// For each pixel the input value of `channel1` must appear at `channel2`
/// in the output and vice versa; other channels are not constrained here.
/// Stops at the first mismatching pixel. Channel indexes must already be
/// bounds-checked against the header.
pub fn validate_swap(
    input: &FrameSequence,
    output: &FrameSequence,
    channel1: u8,
    channel2: u8,
    report: &mut ValidationReport,
) {
    let channels = input.header.channels as usize;
    let c1 = channel1 as usize;
    let c2 = channel2 as usize;

    for (frame_index, (in_frame, out_frame)) in
        input.frames.iter().zip(&output.frames).enumerate()
    {
        // Pixel count follows the bytes actually present in the input frame,
        // which matters under lenient decoding.
        let pixels = in_frame.len() / channels;

        for p in 0..pixels {
            let idx1 = p * channels + c1;
            let idx2 = p * channels + c2;

            match (out_frame.get(idx1), out_frame.get(idx2)) {
                (Some(&out1), Some(&out2)) => {
                    if in_frame[idx1] != out2 || in_frame[idx2] != out1 {
                        report.add_error(
                            format!("Frame {}, Pixel {}: Channel swap mismatch", frame_index, p),
                            "Channel Swap",
                        );
                        return;
                    }
                }
                _ => {
                    report.add_error(
                        format!(
                            "Frame {}, Pixel {}: output frame is truncated",
                            frame_index, p
                        ),
                        "Channel Swap",
                    );
                    return;
                }
            }
        }
    }

    report.add_info("Swap channel operation verified successfully", "Channel Swap");
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
    fn swapped_channels_pass() {
        // Two pixels of three channels; channels 0 and 2 exchanged.
        let input = sequence(3, vec![vec![10, 20, 30, 40, 50, 60]]);
        let output = sequence(3, vec![vec![30, 20, 10, 60, 50, 40]]);

        let mut report = ValidationReport::new();
        validate_swap(&input, &output, 0, 2, &mut report);

        assert!(report.passed);
        assert_eq!(
            report.infos()[0].message,
            "Swap channel operation verified successfully"
        );
    }

    #[test]
    fn one_directional_copy_fails() {
        // Channel 2 received channel 0, but channel 0 kept its own value.
        let input = sequence(3, vec![vec![10, 20, 30, 40, 50, 60]]);
        let output = sequence(3, vec![vec![10, 20, 10, 40, 50, 40]]);

        let mut report = ValidationReport::new();
        validate_swap(&input, &output, 0, 2, &mut report);

        assert!(!report.passed);
        assert_eq!(
            report.errors()[0].message,
            "Frame 0, Pixel 0: Channel swap mismatch"
        );
    }

    #[test]
    fn reports_first_mismatching_pixel() {
        let input = sequence(2, vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
        let output = sequence(2, vec![vec![2, 1, 4, 3], vec![6, 5, 99, 99]]);

        let mut report = ValidationReport::new();
        validate_swap(&input, &output, 0, 1, &mut report);

        assert_eq!(report.errors().len(), 1);
        assert_eq!(
            report.errors()[0].message,
            "Frame 1, Pixel 1: Channel swap mismatch"
        );
    }

    #[test]
    fn untouched_channels_are_not_constrained() {
        // Channel 1 differs between input and output; swap of 0 and 2 only
        // inspects those two channels.
        let input = sequence(3, vec![vec![10, 20, 30]]);
        let output = sequence(3, vec![vec![30, 99, 10]]);

        let mut report = ValidationReport::new();
        validate_swap(&input, &output, 0, 2, &mut report);

        assert!(report.passed);
    }

    #[test]
    fn equal_channel_indexes_require_equality() {
        let input = sequence(2, vec![vec![1, 2, 3, 4]]);
        let matching = sequence(2, vec![vec![1, 9, 3, 9]]);
        let differing = sequence(2, vec![vec![2, 9, 3, 9]]);

        let mut report = ValidationReport::new();
        validate_swap(&input, &matching, 0, 0, &mut report);
        assert!(report.passed);

        let mut report = ValidationReport::new();
        validate_swap(&input, &differing, 0, 0, &mut report);
        assert!(!report.passed);
    }

    #[test]
    fn truncated_output_frame_is_an_error() {
        let input = sequence(2, vec![vec![1, 2, 3, 4]]);
        let output = sequence(2, vec![vec![2, 1, 4]]);

        let mut report = ValidationReport::new();
        validate_swap(&input, &output, 0, 1, &mut report);

        assert!(!report.passed);
        assert_eq!(
            report.errors()[0].message,
            "Frame 0, Pixel 1: output frame is truncated"
        );
    }
}
