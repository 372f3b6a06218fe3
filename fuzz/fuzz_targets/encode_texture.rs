#![no_main]

// Encodes arbitrary textures in memory and checks the file layout of the result.

use lwdds_dds::{convert_samples, encode_texture_2d, PixelFormat, Samples};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub enum SampleData {
    Float32(Vec<f32>),
    SInt32(Vec<i32>),
    UInt8Unorm(Vec<u8>),
}

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Texture {
    pub width: u16,
    pub height: u16,
    pub mip_count: u8,
    pub format_index: u8,
    pub samples: SampleData,
}

fuzz_target!(|texture: Texture| {
    let format = PixelFormat::ALL[texture.format_index as usize % PixelFormat::ALL.len()];
    let samples = match &texture.samples {
        SampleData::Float32(values) => Samples::Float32(values),
        SampleData::SInt32(values) => Samples::SInt32(values),
        SampleData::UInt8Unorm(values) => Samples::UInt8Unorm(values),
    };

    let result = encode_texture_2d(
        texture.width as u32,
        texture.height as u32,
        format,
        texture.mip_count as u32,
        samples,
    );

    let writable = matches!(
        format,
        PixelFormat::B8G8R8A8Unorm | PixelFormat::R16G16B16A16Float
    );
    let converted = format
        .numeric_kind()
        .and_then(|kind| convert_samples(samples, kind).ok());

    match (writable, converted) {
        (true, Some(pixels)) => {
            let bytes = result.expect("writable format with registered conversion");
            assert_eq!(bytes.len(), 128 + pixels.len());
            assert_eq!(&bytes[..4], b"DDS ");
            assert_eq!(&bytes[128..], &pixels[..]);
        }
        _ => {
            let error = result.expect_err("unwritable format or conversion accepted");
            assert!(error.is_unsupported_format());
        }
    }
});
