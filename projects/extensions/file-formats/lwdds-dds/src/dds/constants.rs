//! DDS format constants and definitions
#![allow(dead_code)]

/// Magic header for DDS files ('DDS ' read as a little endian `u32`).
pub const DDS_MAGIC: u32 = 0x20534444;

/// Size of the magic in bytes.
pub const DDS_MAGIC_SIZE: usize = 4;
/// Size of the `DDS_HEADER` structure, as stored in its `size` field.
pub const DDS_HEADER_STRUCT_SIZE: u32 = 124;
/// Size of the `DDS_PIXELFORMAT` structure, as stored in its `size` field.
pub const DDS_PIXELFORMAT_STRUCT_SIZE: u32 = 32;

// Size of the regular DDS header, magic included
pub const DDS_HEADER_SIZE: usize = 0x80;
pub const DX10_HEADER_SIZE: usize = 20;

// Number of reserved `u32`s between the mip count and the pixel format
pub(crate) const DDS_RESERVED1_COUNT: usize = 11;

// DDS header field offsets, magic included
pub const DDS_SIZE_OFFSET: usize = 0x04;
pub const DDS_FLAGS_OFFSET: usize = 0x08;
pub const DDS_HEIGHT_OFFSET: usize = 0x0C;
pub const DDS_WIDTH_OFFSET: usize = 0x10;
pub const DDS_PITCH_OR_LINEAR_SIZE_OFFSET: usize = 0x14;
pub const DDS_DEPTH_OFFSET: usize = 0x18;
pub const DDS_MIPMAP_COUNT_OFFSET: usize = 0x1C;
pub const DDS_CAPS_OFFSET: usize = 0x6C;

// DDS pixel format offsets (within the 32-byte DDSPIXELFORMAT structure at offset 0x4C)
pub const DDS_PIXELFORMAT_OFFSET: usize = 0x4C;
pub const DDS_PIXELFORMAT_FLAGS_OFFSET: usize = 0x50;
pub const FOURCC_OFFSET: usize = 0x54;
pub const DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET: usize = 0x58;
pub const DDS_PIXELFORMAT_RBITMASK_OFFSET: usize = 0x5C;
pub const DDS_PIXELFORMAT_GBITMASK_OFFSET: usize = 0x60;
pub const DDS_PIXELFORMAT_BBITMASK_OFFSET: usize = 0x64;
pub const DDS_PIXELFORMAT_ABITMASK_OFFSET: usize = 0x68;

/// Offset of the DXGI format header used in DX10 and above.
pub const DX10_FORMAT_OFFSET: usize = 0x80;
pub const DX10_RESOURCE_DIMENSION_OFFSET: usize = 0x84;
pub const DX10_ARRAY_SIZE_OFFSET: usize = 0x8C;

// DDS header flags
pub const DDSD_CAPS: u32 = 0x1;
pub const DDSD_HEIGHT: u32 = 0x2;
pub const DDSD_WIDTH: u32 = 0x4;
pub const DDSD_PITCH: u32 = 0x8;
pub const DDSD_PIXELFORMAT: u32 = 0x1000;
pub const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub const DDSD_LINEARSIZE: u32 = 0x80000;
pub const DDSD_DEPTH: u32 = 0x800000;

// DDS pixel format flags
pub const DDPF_ALPHAPIXELS: u32 = 0x1;
pub const DDPF_ALPHA: u32 = 0x2;
pub const DDPF_FOURCC: u32 = 0x4;
pub const DDPF_RGB: u32 = 0x40;
pub const DDPF_YUV: u32 = 0x200;
pub const DDPF_LUMINANCE: u32 = 0x20000;

// DDS capability flags
pub const DDSCAPS_TEXTURE: u32 = 0x1000;

pub const FOURCC_DX10: u32 = 0x30315844; // 'DX10'
/// Legacy D3DFMT_A16B16G16R16F, stored as a plain number rather than four characters.
pub const FOURCC_A16B16G16R16F: u32 = 0x71;

// B8G8R8A8_UNORM: R=byte2, G=byte1, B=byte0, A=byte3 (0xAARRGGBB)
pub const BGRA8888_BIT_COUNT: u32 = 32;
pub const BGRA8888_RED_MASK: u32 = 0x00FF0000;
pub const BGRA8888_GREEN_MASK: u32 = 0x0000FF00;
pub const BGRA8888_BLUE_MASK: u32 = 0x000000FF;
pub const BGRA8888_ALPHA_MASK: u32 = 0xFF000000;
