//! Transformation descriptors.
//!
//! Every verifiable transformation is decoded from its driver-facing tag and
//! parameter strings into an `Operation` value exactly once; all later
//! dispatch is an exhaustive match on the enum.

use std::fmt::{self, Display};

use crate::error::{Result, VidcheckError};

/// A transformation whose effect on an output file can be verified.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Frame order reversed.
    Reverse,
    /// Two channels exchanged on every pixel.
    SwapChannel { channel1: u8, channel2: u8 },
    /// One channel clamped into an inclusive value range.
    ClipChannel {
        channel: u8,
        min_value: u8,
        max_value: u8,
    },
    /// One channel multiplied by a non-negative factor.
    ScaleChannel { channel: u8, factor: f64 },
}

impl Operation {
    /// Parse an operation tag and its parameter list.
    ///
    /// Tags and parameter shapes match the transformation driver: `reverse`,
    /// `swap_channel <c1> <c2>`, `clip_channel <c> <min> <max>`, and
    /// `scale_channel <c> <factor>`.
    pub fn parse(name: &str, params: &[String]) -> Result<Operation> {
        match name {
            "reverse" => {
                expect_params(name, params, 0)?;
                Ok(Operation::Reverse)
            }
            "swap_channel" => {
                expect_params(name, params, 2)?;
                Ok(Operation::SwapChannel {
                    channel1: parse_byte(name, "channel1", &params[0])?,
                    channel2: parse_byte(name, "channel2", &params[1])?,
                })
            }
            "clip_channel" => {
                expect_params(name, params, 3)?;
                let channel = parse_byte(name, "channel", &params[0])?;
                let min_value = parse_byte(name, "min_value", &params[1])?;
                let max_value = parse_byte(name, "max_value", &params[2])?;
                if min_value > max_value {
                    return Err(VidcheckError::InvalidParameter(format!(
                        "{}: min_value {} exceeds max_value {}",
                        name, min_value, max_value
                    )));
                }
                Ok(Operation::ClipChannel {
                    channel,
                    min_value,
                    max_value,
                })
            }
            "scale_channel" => {
                expect_params(name, params, 2)?;
                let channel = parse_byte(name, "channel", &params[0])?;
                let factor: f64 = params[1].parse().map_err(|_| {
                    VidcheckError::InvalidParameter(format!(
                        "{}: factor '{}' is not a number",
                        name, params[1]
                    ))
                })?;
                if !factor.is_finite() || factor < 0.0 {
                    return Err(VidcheckError::InvalidParameter(format!(
                        "{}: factor must be finite and non-negative, got {}",
                        name, factor
                    )));
                }
                Ok(Operation::ScaleChannel { channel, factor })
            }
            _ => Err(VidcheckError::UnknownOperation(name.to_string())),
        }
    }

    /// Channel indexes the operation addresses, for bounds checking against
    /// a decoded header.
    pub fn channel_indexes(&self) -> Vec<u8> {
        match self {
            Operation::Reverse => Vec::new(),
            Operation::SwapChannel { channel1, channel2 } => vec![*channel1, *channel2],
            Operation::ClipChannel { channel, .. } => vec![*channel],
            Operation::ScaleChannel { channel, .. } => vec![*channel],
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Reverse => write!(f, "reverse"),
            Operation::SwapChannel { channel1, channel2 } => {
                write!(f, "swap_channel({}, {})", channel1, channel2)
            }
            Operation::ClipChannel {
                channel,
                min_value,
                max_value,
            } => write!(f, "clip_channel({}, {}..={})", channel, min_value, max_value),
            Operation::ScaleChannel { channel, factor } => {
                write!(f, "scale_channel({}, {})", channel, factor)
            }
        }
    }
}

fn expect_params(name: &str, params: &[String], expected: usize) -> Result<()> {
    if params.len() != expected {
        return Err(VidcheckError::InvalidParameter(format!(
            "{} takes {} parameter(s), got {}",
            name,
            expected,
            params.len()
        )));
    }
    Ok(())
}

fn parse_byte(name: &str, field: &str, raw: &str) -> Result<u8> {
    raw.parse().map_err(|_| {
        VidcheckError::InvalidParameter(format!(
            "{}: {} '{}' is not an integer in 0..=255",
            name, field, raw
        ))
    })
}
