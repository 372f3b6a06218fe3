//! Conversion of caller supplied samples into the on-disk channel encoding.

use crate::error::{DdsWriteError, DdsWriteResult};
use alloc::{vec, vec::Vec};
use lwdds_half::floats_to_half_bits;

/// Numeric shape of a single channel value, either of the input samples or of a format's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// IEEE-754 binary32.
    Float32,
    /// Half float, see [`lwdds_half`].
    Float16,
    /// Signed 32-bit integer.
    SInt32,
    /// Unsigned 8-bit integer, not normalized.
    UInt8,
    /// Unsigned 8-bit integer representing `0.0..=1.0`.
    UInt8Unorm,
}

impl NumericKind {
    /// Size of one value of this kind once stored.
    pub const fn size_in_bytes(self) -> u32 {
        match self {
            NumericKind::Float32 | NumericKind::SInt32 => 4,
            NumericKind::Float16 => 2,
            NumericKind::UInt8 | NumericKind::UInt8Unorm => 1,
        }
    }
}

/// A flat, borrowed sequence of channel values tagged with their [`NumericKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Samples<'a> {
    Float32(&'a [f32]),
    SInt32(&'a [i32]),
    UInt8Unorm(&'a [u8]),
}

impl Samples<'_> {
    /// The source kind used to look up a conversion.
    pub const fn kind(&self) -> NumericKind {
        match self {
            Samples::Float32(_) => NumericKind::Float32,
            Samples::SInt32(_) => NumericKind::SInt32,
            Samples::UInt8Unorm(_) => NumericKind::UInt8Unorm,
        }
    }

    /// Number of channel values.
    pub const fn len(&self) -> usize {
        match self {
            Samples::Float32(values) => values.len(),
            Samples::SInt32(values) => values.len(),
            Samples::UInt8Unorm(values) => values.len(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a [f32]> for Samples<'a> {
    fn from(values: &'a [f32]) -> Self {
        Samples::Float32(values)
    }
}

impl<'a> From<&'a [i32]> for Samples<'a> {
    fn from(values: &'a [i32]) -> Self {
        Samples::SInt32(values)
    }
}

impl<'a> From<&'a [u8]> for Samples<'a> {
    fn from(values: &'a [u8]) -> Self {
        Samples::UInt8Unorm(values)
    }
}

/// Converts `samples` into bytes laid out as `target` values.
///
/// Registered conversions:
///
/// | source       | target                  | per value                              |
/// |--------------|-------------------------|----------------------------------------|
/// | `Float32`    | `UInt8Unorm`            | `floor(x * 255)` clamped to `0..=255`  |
/// | `Float32`    | `Float32`               | copied as little endian                |
/// | `Float32`    | `Float16`               | [`floats_to_half_bits`], little endian |
/// | `SInt32`     | `UInt8Unorm`, `UInt8`   | clamped to `0..=255`                   |
/// | `UInt8Unorm` | `UInt8Unorm`, `UInt8`   | clamped to `0..=255` (unchanged)       |
///
/// # Errors
///
/// [`DdsWriteError::UnsupportedConversion`] for any other pair.
pub fn convert_samples(samples: Samples<'_>, target: NumericKind) -> DdsWriteResult<Vec<u8>> {
    let bytes = match (samples, target) {
        (Samples::Float32(values), NumericKind::UInt8Unorm) => f32_to_u8_unorm(values),
        (Samples::Float32(values), NumericKind::Float32) => f32_to_f32(values),
        (Samples::Float32(values), NumericKind::Float16) => f32_to_f16(values),
        (Samples::SInt32(values), NumericKind::UInt8Unorm | NumericKind::UInt8) => {
            i32_to_u8(values)
        }
        (Samples::UInt8Unorm(values), NumericKind::UInt8Unorm | NumericKind::UInt8) => {
            values.to_vec()
        }
        (samples, target) => {
            return Err(DdsWriteError::UnsupportedConversion {
                from: samples.kind(),
                to: target,
            })
        }
    };

    Ok(bytes)
}

/// Computes `floor(x * 255)` clamped to `0..=255`.
///
/// Once clamped the value is non-negative, so the truncating cast is the floor.
/// `NaN` survives the clamp and saturates to `0` in the cast.
fn f32_to_u8_unorm(values: &[f32]) -> Vec<u8> {
    values
        .iter()
        .map(|value| (value * 255.0).clamp(0.0, 255.0) as u8)
        .collect()
}

fn f32_to_f32(values: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * 4);
    for value in values {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

fn f32_to_f16(values: &[f32]) -> Vec<u8> {
    let mut halves = vec![0u16; values.len()];
    floats_to_half_bits(values, &mut halves);

    let mut bytes = Vec::with_capacity(halves.len() * 2);
    for half in halves {
        bytes.extend_from_slice(&half.to_le_bytes());
    }
    bytes
}

fn i32_to_u8(values: &[i32]) -> Vec<u8> {
    values
        .iter()
        .map(|value| (*value).clamp(0, 255) as u8)
        .collect()
}
