//! Component view of an IEEE-754 binary32 float.

/// Mask of the sign bit once shifted down to bit 0.
pub const SIGN_MASK: u32 = 0x1;
/// Mask of the 8-bit biased exponent once shifted down to bit 0.
pub const EXPONENT_MASK: u32 = 0xFF;
/// Mask of the 23-bit mantissa.
pub const MANTISSA_MASK: u32 = 0x007F_FFFF;
/// Exponent bias of binary32.
pub const EXPONENT_BIAS: u32 = 127;

/// A 32-bit float broken down into its sign, biased exponent and mantissa fields.
///
/// Decomposition and composition are plain masking and shifting over the bit pattern,
/// so every input, including NaN payloads and infinities, survives a round trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloatBits32 {
    /// Sign bit, `0` or `1`.
    pub sign: u32,
    /// Biased exponent field, `0..=255`.
    pub exponent: u32,
    /// Mantissa field without the implicit leading bit.
    pub mantissa: u32,
}

impl FloatBits32 {
    /// Splits a raw binary32 bit pattern into its fields.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            sign: bits >> 31,
            exponent: (bits >> 23) & EXPONENT_MASK,
            mantissa: bits & MANTISSA_MASK,
        }
    }

    /// Splits a float into its fields.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self::from_bits(value.to_bits())
    }

    /// Reassembles the raw bit pattern as `(sign << 31) | (exponent << 23) | mantissa`.
    ///
    /// Each field is masked to its width first, so an out of range field can never
    /// spill into its neighbour.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        ((self.sign & SIGN_MASK) << 31)
            | ((self.exponent & EXPONENT_MASK) << 23)
            | (self.mantissa & MANTISSA_MASK)
    }

    /// Reassembles the fields and reinterprets them as a float.
    #[inline]
    pub fn to_f32(self) -> f32 {
        f32::from_bits(self.to_bits())
    }
}

impl From<f32> for FloatBits32 {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<FloatBits32> for f32 {
    fn from(bits: FloatBits32) -> Self {
        bits.to_f32()
    }
}
