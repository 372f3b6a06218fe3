//! Component view of a half float, plus conversions to and from [`FloatBits32`].

use crate::float_bits_32::{FloatBits32, EXPONENT_BIAS};

/// Mask of the 5-bit biased exponent once shifted down to bit 0.
pub const EXPONENT_MASK: u16 = 0x1F;
/// Mask of the 10-bit mantissa.
pub const MANTISSA_MASK: u16 = 0x3FF;
/// Exponent bias of binary16.
pub const EXPONENT_BIAS_16: u32 = 15;

/// Exponent field reserved for infinity and NaN.
pub const EXPONENT_SPECIAL: u16 = 31;
/// Exponent field of the largest finite half.
pub const EXPONENT_MAX_FINITE: u16 = 30;

/// binary32 exponent fields at or below this flush to zero when encoded.
pub const FLUSH_EXPONENT_32: u32 = 112;
/// binary32 exponent fields at or above this clamp to the largest finite half when encoded.
pub const CLAMP_EXPONENT_32: u32 = 143;

/// binary32 exponent produced when decoding [`EXPONENT_SPECIAL`].
pub const SPECIAL_DECODE_EXPONENT_32: u32 = 142;
/// binary32 mantissa produced when decoding [`EXPONENT_SPECIAL`]; together with
/// [`SPECIAL_DECODE_EXPONENT_32`] this is `65504.0`.
pub const SPECIAL_DECODE_MANTISSA_32: u32 = 8_380_416;

/// Mantissa bits dropped when going from 23 to 10 bits.
const MANTISSA_SHIFT: u32 = 13;

/// A half float broken down into its sign, biased exponent and mantissa fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloatBits16 {
    /// Sign bit, `0` or `1`.
    pub sign: u16,
    /// Biased exponent field, `0..=31`.
    pub exponent: u16,
    /// 10-bit mantissa field.
    pub mantissa: u16,
}

impl FloatBits16 {
    /// Splits a raw half bit pattern into its fields.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self {
            sign: (bits >> 15) & 0x1,
            exponent: (bits >> 10) & EXPONENT_MASK,
            mantissa: bits & MANTISSA_MASK,
        }
    }

    /// Reassembles the raw half bit pattern as `(sign << 15) | (exponent << 10) | mantissa`.
    #[inline]
    pub const fn to_bits(self) -> u16 {
        ((self.sign & 0x1) << 15)
            | ((self.exponent & EXPONENT_MASK) << 10)
            | (self.mantissa & MANTISSA_MASK)
    }

    /// Narrows a 32-bit float to half fields.
    ///
    /// - Exponent fields `<= 112` (magnitudes below `2^-14`, zero included) become a signed zero.
    /// - Exponent fields `>= 143` (magnitudes from `2^16` up, infinities and NaNs) clamp to
    ///   exponent `30`, mantissa `1023`, i.e. `±65504`.
    /// - Everything else is rebiased, and the low 13 mantissa bits are truncated.
    pub const fn from_f32_bits(value: FloatBits32) -> Self {
        let sign = value.sign as u16;

        if value.exponent <= FLUSH_EXPONENT_32 {
            Self {
                sign,
                exponent: 0,
                mantissa: 0,
            }
        } else if value.exponent >= CLAMP_EXPONENT_32 {
            Self {
                sign,
                exponent: EXPONENT_MAX_FINITE,
                mantissa: MANTISSA_MASK,
            }
        } else {
            Self {
                sign,
                exponent: (value.exponent + EXPONENT_BIAS_16 - EXPONENT_BIAS) as u16,
                mantissa: (value.mantissa >> MANTISSA_SHIFT) as u16,
            }
        }
    }

    /// Widens half fields to a 32-bit float.
    ///
    /// Subnormal halves are normalised by hand. The infinity/NaN exponent decodes to
    /// `±65504` to mirror the clamp in [`FloatBits16::from_f32_bits`].
    pub const fn to_f32_bits(self) -> FloatBits32 {
        let sign = self.sign as u32;
        let mantissa = self.mantissa as u32;

        match self.exponent {
            0 if mantissa == 0 => FloatBits32 {
                sign,
                exponent: 0,
                mantissa: 0,
            },
            0 => {
                // Moves the highest set bit into the implicit leading position.
                let shift = 10 - mantissa.ilog2();
                FloatBits32 {
                    sign,
                    exponent: EXPONENT_BIAS - (EXPONENT_BIAS_16 - 1) - shift,
                    mantissa: mantissa << (shift + MANTISSA_SHIFT),
                }
            }
            EXPONENT_SPECIAL => FloatBits32 {
                sign,
                exponent: SPECIAL_DECODE_EXPONENT_32,
                mantissa: SPECIAL_DECODE_MANTISSA_32,
            },
            exponent => FloatBits32 {
                sign,
                exponent: exponent as u32 + EXPONENT_BIAS - EXPONENT_BIAS_16,
                mantissa: mantissa << MANTISSA_SHIFT,
            },
        }
    }
}
