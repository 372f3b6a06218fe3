#![no_main]

// Checks the float field decomposition and the half narrowing rules on arbitrary bit patterns.

use lwdds_half::float_bits_16::{CLAMP_EXPONENT_32, EXPONENT_SPECIAL, FLUSH_EXPONENT_32};
use lwdds_half::{to_f32, to_half_bits, FloatBits16, FloatBits32};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub float_bits: u32,
    pub half_bits: u16,
}

fuzz_target!(|input: Input| {
    // Decomposing then composing must reproduce every pattern, NaNs included.
    let fields = FloatBits32::from_bits(input.float_bits);
    assert_eq!(fields.to_bits(), input.float_bits);
    assert_eq!(FloatBits16::from_bits(input.half_bits).to_bits(), input.half_bits);

    let value = f32::from_bits(input.float_bits);
    let half = to_half_bits(value);
    let narrowed = FloatBits16::from_bits(half);

    assert_eq!(narrowed.sign as u32, fields.sign, "sign lost for {value:e}");
    assert_ne!(narrowed.exponent, EXPONENT_SPECIAL, "non finite half for {value:e}");

    if fields.exponent <= FLUSH_EXPONENT_32 {
        assert_eq!(half & 0x7FFF, 0, "{value:e} not flushed to zero");
    } else if fields.exponent >= CLAMP_EXPONENT_32 {
        assert_eq!(half & 0x7FFF, 0x7BFF, "{value:e} not clamped to 65504");
    } else {
        assert_eq!(narrowed.mantissa as u32, fields.mantissa >> 13);
    }

    // The encoder never emits subnormals, so its output survives a decode/encode cycle.
    assert_eq!(to_half_bits(to_f32(half)), half);

    // Every half pattern decodes to a finite float.
    let decoded = to_f32(input.half_bits);
    assert!(decoded.is_finite());
    assert!(decoded.abs() <= 65504.0);
});
