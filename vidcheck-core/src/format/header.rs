//! Binary header definition for raw video sequence files.

use std::io::{self, Read, Write};

/// Fixed-layout header prefixing every sequence file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceHeader {
    /// Number of frames in the file.
    pub frame_count: i64,
    /// Channels per pixel.
    pub channels: u8,
    /// Frame height in pixels.
    pub height: u8,
    /// Frame width in pixels.
    pub width: u8,
}

impl SequenceHeader {
    /// Size of header in bytes.
    /// FrameCount(8, signed little-endian) + Channels(1) + Height(1) + Width(1) = 11
    pub const SIZE: usize = 11;

    /// Size of one frame in bytes.
    pub fn frame_size(&self) -> usize {
        self.channels as usize * self.height as usize * self.width as usize
    }

    /// Number of pixels in one frame.
    pub fn pixel_count(&self) -> usize {
        self.height as usize * self.width as usize
    }

    /// Write header to output.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.frame_count.to_le_bytes())?;
        w.write_all(&[self.channels, self.height, self.width])?;
        Ok(())
    }

    /// Read header from input.
    pub fn read_from<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut buf8 = [0u8; 8];
        r.read_exact(&mut buf8)?;
        let frame_count = i64::from_le_bytes(buf8);

        let mut buf3 = [0u8; 3];
        r.read_exact(&mut buf3)?;

        Ok(Self {
            frame_count,
            channels: buf3[0],
            height: buf3[1],
            width: buf3[2],
        })
    }
}
