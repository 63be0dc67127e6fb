//! Raw video sequence container format.
//!
//! A sequence file is a fixed 11-byte header followed by tightly packed
//! frame buffers. This module provides the header layout and the file
//! decoder used by the verification pipeline.

pub mod decode;
pub mod header;

// Re-export commonly used types
pub use decode::FrameSequence;
pub use header::SequenceHeader;
