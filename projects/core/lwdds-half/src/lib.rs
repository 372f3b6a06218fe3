//! Bit-level conversion between IEEE-754 single precision floats and half precision floats.
//!
//! This is not a general purpose `f16` implementation. The encoder in this crate deliberately
//! deviates from IEEE-754 so that textures produced by `lwdds` keep the exact bits existing
//! consumers expect:
//!
//! - Magnitudes below `2^-14` are flushed to a signed zero (no half subnormals are produced).
//! - Magnitudes at or above `2^16`, infinities and NaNs clamp to the largest finite half, `65504`.
//! - The 13 mantissa bits dropped during encoding are truncated, not rounded.
//! - Decoding the half infinity/NaN exponent yields `65504` rather than an infinity.
//!
//! # Example
//!
//! ```
//! use lwdds_half::{to_f32, to_half_bits};
//!
//! assert_eq!(to_half_bits(0.5), 0x3800);
//! assert_eq!(to_f32(0x3C00), 1.0);
//!
//! // Out of range values clamp instead of becoming infinity.
//! assert_eq!(to_half_bits(f32::INFINITY), 0x7BFF);
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod float_bits_16;
pub mod float_bits_32;

pub use float_bits_16::FloatBits16;
pub use float_bits_32::FloatBits32;

/// Offset added to integers by [`int_to_half_as_float`].
///
/// Keeps the exponent field of the packed half at 1 or above, so the value never
/// hits the flush-to-zero branch of [`to_half_bits`].
pub const INT_HALF_BIAS: i32 = 1024;

/// Encodes a 32-bit float into half float bits.
#[inline]
pub fn to_half_bits(value: f32) -> u16 {
    FloatBits16::from_f32_bits(FloatBits32::from_f32(value)).to_bits()
}

/// Decodes half float bits into a 32-bit float.
#[inline]
pub fn to_f32(bits: u16) -> f32 {
    FloatBits16::from_bits(bits).to_f32_bits().to_f32()
}

/// Returns the float whose half encoding carries `value + 1024` as its raw bit pattern.
///
/// Used to smuggle small integers through a half float texture channel: writing the
/// returned float with [`to_half_bits`] reproduces `value + 1024` exactly for every
/// `value` in `0..=30719`. The biased value wraps to 16 bits.
#[inline]
pub fn int_to_half_as_float(value: i32) -> f32 {
    to_f32(value.wrapping_add(INT_HALF_BIAS) as u16)
}

/// Encodes every float of `source` into `destination` with [`to_half_bits`].
///
/// # Panics
///
/// If `source` and `destination` have different lengths.
pub fn floats_to_half_bits(source: &[f32], destination: &mut [u16]) {
    assert_eq!(
        source.len(),
        destination.len(),
        "source and destination must have the same number of elements"
    );

    for (half, value) in destination.iter_mut().zip(source) {
        *half = to_half_bits(*value);
    }
}
