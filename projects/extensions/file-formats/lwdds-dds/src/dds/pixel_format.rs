use crate::convert::NumericKind;
use core::fmt;

/// Destination pixel layout of a texture, identified by its `DXGI_FORMAT` value.
///
/// Only [`PixelFormat::R16G16B16A16Float`] and [`PixelFormat::B8G8R8A8Unorm`] can be written
/// with a legacy header; the remaining formats are named so that callers get a
/// [`crate::DdsWriteError::UnsupportedFormat`] rather than having to pick a raw number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelFormat {
    Unknown = 0,
    R32G32B32A32Float = 2,
    R32G32B32Float = 6,
    /// 8 bytes per pixel, half float channels in RGBA order.
    R16G16B16A16Float = 10,
    R32G32Float = 16,
    R8G8B8A8Unorm = 28,
    R8G8B8A8Uint = 30,
    R16G16Float = 34,
    R32Float = 41,
    R16Float = 54,
    R8Unorm = 61,
    BC1Unorm = 71,
    BC3Unorm = 77,
    /// 4 bytes per pixel, unsigned normalized channels in BGRA order.
    B8G8R8A8Unorm = 87,
    BC7Unorm = 98,
}

impl PixelFormat {
    /// Every format known to this crate.
    pub const ALL: [PixelFormat; 15] = [
        PixelFormat::Unknown,
        PixelFormat::R32G32B32A32Float,
        PixelFormat::R32G32B32Float,
        PixelFormat::R16G16B16A16Float,
        PixelFormat::R32G32Float,
        PixelFormat::R8G8B8A8Unorm,
        PixelFormat::R8G8B8A8Uint,
        PixelFormat::R16G16Float,
        PixelFormat::R32Float,
        PixelFormat::R16Float,
        PixelFormat::R8Unorm,
        PixelFormat::BC1Unorm,
        PixelFormat::BC3Unorm,
        PixelFormat::B8G8R8A8Unorm,
        PixelFormat::BC7Unorm,
    ];

    /// The `DXGI_FORMAT` value of this format, as stored in a DX10 extension header.
    #[inline]
    pub const fn dxgi_format(self) -> u32 {
        self as u32
    }

    /// Bytes taken by a single pixel.
    ///
    /// Block compressed formats and [`PixelFormat::Unknown`] have no per pixel size and return `0`.
    pub const fn bytes_per_pixel(self) -> u32 {
        match self {
            PixelFormat::R32G32B32A32Float => 16,
            PixelFormat::R32G32B32Float => 12,
            PixelFormat::R16G16B16A16Float | PixelFormat::R32G32Float => 8,
            PixelFormat::R8G8B8A8Unorm
            | PixelFormat::R8G8B8A8Uint
            | PixelFormat::R16G16Float
            | PixelFormat::R32Float
            | PixelFormat::B8G8R8A8Unorm => 4,
            PixelFormat::R16Float => 2,
            PixelFormat::R8Unorm => 1,
            PixelFormat::Unknown
            | PixelFormat::BC1Unorm
            | PixelFormat::BC3Unorm
            | PixelFormat::BC7Unorm => 0,
        }
    }

    /// Number of channels stored per pixel, `0` for block compressed formats.
    pub const fn channel_count(self) -> u32 {
        match self {
            PixelFormat::R32G32B32A32Float
            | PixelFormat::R16G16B16A16Float
            | PixelFormat::R8G8B8A8Unorm
            | PixelFormat::R8G8B8A8Uint
            | PixelFormat::B8G8R8A8Unorm => 4,
            PixelFormat::R32G32B32Float => 3,
            PixelFormat::R32G32Float | PixelFormat::R16G16Float => 2,
            PixelFormat::R32Float | PixelFormat::R16Float | PixelFormat::R8Unorm => 1,
            PixelFormat::Unknown
            | PixelFormat::BC1Unorm
            | PixelFormat::BC3Unorm
            | PixelFormat::BC7Unorm => 0,
        }
    }

    /// The kind each channel decodes to, used to pick a sample conversion.
    ///
    /// Returns [`None`] for formats without per channel storage.
    pub const fn numeric_kind(self) -> Option<NumericKind> {
        match self {
            PixelFormat::R32G32B32A32Float
            | PixelFormat::R32G32B32Float
            | PixelFormat::R32G32Float
            | PixelFormat::R32Float => Some(NumericKind::Float32),
            PixelFormat::R16G16B16A16Float | PixelFormat::R16G16Float | PixelFormat::R16Float => {
                Some(NumericKind::Float16)
            }
            PixelFormat::R8G8B8A8Unorm | PixelFormat::R8Unorm | PixelFormat::B8G8R8A8Unorm => {
                Some(NumericKind::UInt8Unorm)
            }
            PixelFormat::R8G8B8A8Uint => Some(NumericKind::UInt8),
            PixelFormat::Unknown
            | PixelFormat::BC1Unorm
            | PixelFormat::BC3Unorm
            | PixelFormat::BC7Unorm => None,
        }
    }

    /// Looks a format up by its `DXGI_FORMAT` value.
    pub fn from_dxgi_format(value: u32) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.dxgi_format() == value)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixelFormat::Unknown => "UNKNOWN",
            PixelFormat::R32G32B32A32Float => "R32G32B32A32_FLOAT",
            PixelFormat::R32G32B32Float => "R32G32B32_FLOAT",
            PixelFormat::R16G16B16A16Float => "R16G16B16A16_FLOAT",
            PixelFormat::R32G32Float => "R32G32_FLOAT",
            PixelFormat::R8G8B8A8Unorm => "R8G8B8A8_UNORM",
            PixelFormat::R8G8B8A8Uint => "R8G8B8A8_UINT",
            PixelFormat::R16G16Float => "R16G16_FLOAT",
            PixelFormat::R32Float => "R32_FLOAT",
            PixelFormat::R16Float => "R16_FLOAT",
            PixelFormat::R8Unorm => "R8_UNORM",
            PixelFormat::BC1Unorm => "BC1_UNORM",
            PixelFormat::BC3Unorm => "BC3_UNORM",
            PixelFormat::B8G8R8A8Unorm => "B8G8R8A8_UNORM",
            PixelFormat::BC7Unorm => "BC7_UNORM",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(PixelFormat::R16G16B16A16Float, 8, Some(NumericKind::Float16))]
    #[case(PixelFormat::B8G8R8A8Unorm, 4, Some(NumericKind::UInt8Unorm))]
    #[case(PixelFormat::R32G32B32A32Float, 16, Some(NumericKind::Float32))]
    #[case(PixelFormat::R8G8B8A8Uint, 4, Some(NumericKind::UInt8))]
    #[case(PixelFormat::R8Unorm, 1, Some(NumericKind::UInt8Unorm))]
    #[case(PixelFormat::BC1Unorm, 0, None)]
    #[case(PixelFormat::Unknown, 0, None)]
    fn format_properties(
        #[case] format: PixelFormat,
        #[case] bytes_per_pixel: u32,
        #[case] kind: Option<NumericKind>,
    ) {
        assert_eq!(format.bytes_per_pixel(), bytes_per_pixel);
        assert_eq!(format.numeric_kind(), kind);
    }

    #[test]
    fn bytes_per_pixel_matches_channel_layout() {
        for format in PixelFormat::ALL {
            let channel_size = match format.numeric_kind() {
                Some(kind) => kind.size_in_bytes(),
                None => 0,
            };
            assert_eq!(
                format.bytes_per_pixel(),
                format.channel_count() * channel_size,
                "{format}"
            );
        }
    }

    #[rstest]
    #[case(10, Some(PixelFormat::R16G16B16A16Float))]
    #[case(87, Some(PixelFormat::B8G8R8A8Unorm))]
    #[case(98, Some(PixelFormat::BC7Unorm))]
    #[case(1, None)]
    #[case(999, None)]
    fn lookup_by_dxgi_value(#[case] value: u32, #[case] expected: Option<PixelFormat>) {
        assert_eq!(PixelFormat::from_dxgi_format(value), expected);
    }

    #[test]
    fn display_uses_dxgi_names() {
        assert_eq!(
            format!("{}", PixelFormat::R16G16B16A16Float),
            "R16G16B16A16_FLOAT"
        );
        assert_eq!(format!("{}", PixelFormat::B8G8R8A8Unorm), "B8G8R8A8_UNORM");
    }
}
