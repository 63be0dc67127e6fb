//! Configuration for sequence decoding and verification.
//!
//! Instances of `CheckConfig` are created by consumers of the library (like
//! vidcheck-cli) and passed to the decode and verification entry points.

/// How a file whose length disagrees with its header is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Reject files whose length differs from the declared frame data size.
    #[default]
    Strict,
    /// Accept short or overlong files, keeping whatever frame bytes exist.
    Lenient,
}

/// Settings controlling how sequence files are decoded and verified.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckConfig {
    /// File length handling during decode.
    pub truncation: TruncationPolicy,
}

impl CheckConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with the given truncation policy.
    pub fn with_truncation(truncation: TruncationPolicy) -> Self {
        Self { truncation }
    }
}
