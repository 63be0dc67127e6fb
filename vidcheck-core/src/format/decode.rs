//! Sequence file decoding.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::debug;

use super::header::SequenceHeader;
use crate::config::{CheckConfig, TruncationPolicy};
use crate::error::{Result, VidcheckError};

/// A fully decoded sequence file.
///
/// Frames are raw byte buffers, row-major with interleaved channels: within
/// a frame, pixel `p` stores channel `c` at byte offset `p * channels + c`.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    /// Decoded file header.
    pub header: SequenceHeader,
    /// Raw frame buffers, one per declared frame.
    pub frames: Vec<Vec<u8>>,
}

impl FrameSequence {
    /// Decode a sequence file with the default (strict) configuration.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with(path, &CheckConfig::default())
    }

    /// Decode a sequence file under the given configuration.
    ///
    /// Strict decoding requires the file length to equal the header plus the
    /// declared frame data exactly. Lenient decoding keeps whatever shorter
    /// tail the file yields and ignores trailing bytes.
    pub fn from_path_with<P: AsRef<Path>>(path: P, config: &CheckConfig) -> Result<Self> {
        let path = path.as_ref();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(VidcheckError::NotFound(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let file_len = file.metadata()?.len();
        let mut reader = BufReader::new(file);

        let header = SequenceHeader::read_from(&mut reader).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => VidcheckError::MalformedHeader(format!(
                "{}: {} byte(s) is too short for the {}-byte header",
                path.display(),
                file_len,
                SequenceHeader::SIZE
            )),
            _ => VidcheckError::Io(e),
        })?;

        if header.frame_count < 0 {
            return Err(VidcheckError::MalformedHeader(format!(
                "{}: negative frame count {}",
                path.display(),
                header.frame_count
            )));
        }

        let frame_size = header.frame_size();
        debug!(
            "Decoding {}: {} frame(s) of {} byte(s), {} channel(s), {}x{}",
            path.display(),
            header.frame_count,
            frame_size,
            header.channels,
            header.width,
            header.height
        );

        if config.truncation == TruncationPolicy::Strict {
            let expected = (header.frame_count as u64)
                .checked_mul(frame_size as u64)
                .and_then(|payload| payload.checked_add(SequenceHeader::SIZE as u64))
                .ok_or_else(|| {
                    VidcheckError::MalformedHeader(format!(
                        "{}: declared frame data size overflows",
                        path.display()
                    ))
                })?;

            if file_len < expected {
                return Err(VidcheckError::TruncatedData(format!(
                    "{}: expected {} byte(s), found {}",
                    path.display(),
                    expected,
                    file_len
                )));
            }
            if file_len > expected {
                return Err(VidcheckError::TrailingData(format!(
                    "{}: {} byte(s) past the declared frame data",
                    path.display(),
                    file_len - expected
                )));
            }
        }

        let count = usize::try_from(header.frame_count).map_err(|_| {
            VidcheckError::MalformedHeader(format!(
                "{}: frame count {} exceeds addressable memory",
                path.display(),
                header.frame_count
            ))
        })?;

        let mut frames = Vec::new();
        match config.truncation {
            TruncationPolicy::Strict => {
                for index in 0..count {
                    let mut frame = vec![0u8; frame_size];
                    reader.read_exact(&mut frame).map_err(|e| match e.kind() {
                        io::ErrorKind::UnexpectedEof => VidcheckError::TruncatedData(format!(
                            "{}: frame {} is incomplete",
                            path.display(),
                            index
                        )),
                        _ => VidcheckError::Io(e),
                    })?;
                    frames.push(frame);
                }
            }
            TruncationPolicy::Lenient => {
                for _ in 0..count {
                    let mut frame = Vec::with_capacity(frame_size);
                    reader
                        .by_ref()
                        .take(frame_size as u64)
                        .read_to_end(&mut frame)?;
                    frames.push(frame);
                }
            }
        }

        Ok(Self { header, frames })
    }
}
