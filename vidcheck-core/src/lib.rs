//! Core library for verifying raw video transformations.
//!
//! This crate decodes the fixed-header binary sequence container used by the
//! video pipeline and checks, byte by byte, that an output file is the
//! claimed transformation of an input file.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidcheck_core::operation::Operation;
//! use vidcheck_core::validation;
//!
//! let params = vec!["0".to_string(), "2".to_string()];
//! let operation = Operation::parse("swap_channel", &params).unwrap();
//!
//! let report = validation::verify_transform("test.bin", "output_swap.bin", &operation).unwrap();
//! assert!(report.passed);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod operation;
pub mod utils;
pub mod validation;

// Re-exports for public API
pub use config::{CheckConfig, TruncationPolicy};
pub use error::{Result, VidcheckError};
pub use format::{FrameSequence, SequenceHeader};
pub use operation::Operation;
pub use utils::format_bytes;
pub use validation::{ValidationReport, verify_transform, verify_transform_with};
