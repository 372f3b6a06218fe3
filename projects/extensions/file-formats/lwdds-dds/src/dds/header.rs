//! In-memory mirrors of the DDS header structures and their byte-exact serialization.
//!
//! Every structure is written field by field as a little endian `u32`, never through
//! the in-memory layout of the Rust types.

use super::constants::*;
use alloc::vec::Vec;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// `DDS_PIXELFORMAT`: describes either an RGB/alpha bitmask layout or a FourCC tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsPixelFormatBlock {
    pub size: u32,
    pub flags: u32,
    pub four_cc: u32,
    pub rgb_bit_count: u32,
    pub r_bit_mask: u32,
    pub g_bit_mask: u32,
    pub b_bit_mask: u32,
    pub a_bit_mask: u32,
}

impl Default for DdsPixelFormatBlock {
    fn default() -> Self {
        Self {
            size: DDS_PIXELFORMAT_STRUCT_SIZE,
            flags: 0,
            four_cc: 0,
            rgb_bit_count: 0,
            r_bit_mask: 0,
            g_bit_mask: 0,
            b_bit_mask: 0,
            a_bit_mask: 0,
        }
    }
}

impl DdsPixelFormatBlock {
    /// A block that identifies its data purely by FourCC.
    pub fn four_cc(four_cc: u32) -> Self {
        Self {
            flags: DDPF_FOURCC,
            four_cc,
            ..Self::default()
        }
    }

    /// A 32-bit uncompressed block with explicit channel masks.
    pub fn rgba_masks(r_bit_mask: u32, g_bit_mask: u32, b_bit_mask: u32, a_bit_mask: u32) -> Self {
        Self {
            flags: DDPF_RGB | DDPF_ALPHA,
            rgb_bit_count: 32,
            r_bit_mask,
            g_bit_mask,
            b_bit_mask,
            a_bit_mask,
            ..Self::default()
        }
    }

    fn fields(&self) -> [u32; 8] {
        [
            self.size,
            self.flags,
            self.four_cc,
            self.rgb_bit_count,
            self.r_bit_mask,
            self.g_bit_mask,
            self.b_bit_mask,
            self.a_bit_mask,
        ]
    }
}

/// `DDS_HEADER`, the 124 bytes following the magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsHeader {
    pub size: u32,
    pub flags: u32,
    pub height: u32,
    pub width: u32,
    pub pitch_or_linear_size: u32,
    pub depth: u32,
    pub mip_map_count: u32,
    pub reserved1: [u32; DDS_RESERVED1_COUNT],
    pub pixel_format: DdsPixelFormatBlock,
    pub caps: u32,
    pub caps2: u32,
    pub caps3: u32,
    pub caps4: u32,
    pub reserved2: u32,
}

impl Default for DdsHeader {
    fn default() -> Self {
        Self {
            size: DDS_HEADER_STRUCT_SIZE,
            flags: 0,
            height: 0,
            width: 0,
            pitch_or_linear_size: 0,
            depth: 0,
            mip_map_count: 0,
            reserved1: [0; DDS_RESERVED1_COUNT],
            pixel_format: DdsPixelFormatBlock::default(),
            caps: 0,
            caps2: 0,
            caps3: 0,
            caps4: 0,
            reserved2: 0,
        }
    }
}

impl DdsHeader {
    /// Number of `u32` fields in the serialized structure.
    const FIELD_COUNT: usize = DDS_HEADER_STRUCT_SIZE as usize / 4;

    fn fields(&self) -> [u32; Self::FIELD_COUNT] {
        let mut fields = [0u32; Self::FIELD_COUNT];
        fields[..7].copy_from_slice(&[
            self.size,
            self.flags,
            self.height,
            self.width,
            self.pitch_or_linear_size,
            self.depth,
            self.mip_map_count,
        ]);
        fields[7..18].copy_from_slice(&self.reserved1);
        fields[18..26].copy_from_slice(&self.pixel_format.fields());
        fields[26..].copy_from_slice(&[
            self.caps,
            self.caps2,
            self.caps3,
            self.caps4,
            self.reserved2,
        ]);
        fields
    }
}

/// `D3D10_RESOURCE_DIMENSION`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum ResourceDimension {
    #[default]
    Unknown = 0,
    Buffer = 1,
    Texture1D = 2,
    Texture2D = 3,
    Texture3D = 4,
}

/// `DDS_HEADER_DXT10`, present on disk only when the pixel format FourCC is `DX10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dx10HeaderExtension {
    pub dxgi_format: u32,
    pub resource_dimension: ResourceDimension,
    pub misc_flag: u32,
    pub array_size: u32,
    pub misc_flags2: u32,
}

impl Default for Dx10HeaderExtension {
    fn default() -> Self {
        Self {
            dxgi_format: 0,
            resource_dimension: ResourceDimension::Unknown,
            misc_flag: 0,
            array_size: 1,
            misc_flags2: 0,
        }
    }
}

impl Dx10HeaderExtension {
    fn fields(&self) -> [u32; 5] {
        [
            self.dxgi_format,
            self.resource_dimension as u32,
            self.misc_flag,
            self.array_size,
            self.misc_flags2,
        ]
    }
}

/// Everything that precedes the pixel data: magic, [`DdsHeader`] and, for `DX10`
/// FourCCs, the [`Dx10HeaderExtension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DdsFileHeader {
    pub header: DdsHeader,
    pub dx10: Dx10HeaderExtension,
}

impl DdsFileHeader {
    /// Whether [`DdsFileHeader::dx10`] is part of the serialized output.
    #[inline]
    pub fn has_dx10_extension(&self) -> bool {
        self.header.pixel_format.four_cc == FOURCC_DX10
    }

    /// Number of bytes produced by [`DdsFileHeader::to_bytes`].
    #[inline]
    pub fn serialized_size(&self) -> usize {
        if self.has_dx10_extension() {
            DDS_HEADER_SIZE + DX10_HEADER_SIZE
        } else {
            DDS_HEADER_SIZE
        }
    }

    /// Appends the serialized header to `output`.
    pub fn write_to(&self, output: &mut Vec<u8>) {
        let mut buffer = [0u8; DDS_HEADER_SIZE + DX10_HEADER_SIZE];

        write_u32_fields(&mut buffer[..DDS_MAGIC_SIZE], &[DDS_MAGIC]);
        write_u32_fields(
            &mut buffer[DDS_MAGIC_SIZE..DDS_HEADER_SIZE],
            &self.header.fields(),
        );
        if self.has_dx10_extension() {
            write_u32_fields(&mut buffer[DDS_HEADER_SIZE..], &self.dx10.fields());
        }

        output.extend_from_slice(&buffer[..self.serialized_size()]);
    }

    /// Serializes the header into a new buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut output = Vec::with_capacity(self.serialized_size());
        self.write_to(&mut output);
        output
    }
}

/// Writes `fields` back to back as little endian `u32`s at the start of `destination`.
fn write_u32_fields(destination: &mut [u8], fields: &[u32]) {
    assert!(destination.len() >= fields.len() * 4);

    // SAFETY: The assert above guarantees every 4 byte write below stays inside `destination`.
    let mut writer = unsafe { LittleEndianWriter::new(destination.as_mut_ptr()) };
    for (index, field) in fields.iter().enumerate() {
        unsafe { writer.write_u32_at(*field, (index * 4) as isize) };
    }
}
