//! Writes uncompressed 2D textures as legacy DDS files.
//!
//! Pixel data is supplied as a flat run of channel values ([`Samples`]) and converted to the
//! on-disk encoding of the destination [`PixelFormat`]. Two formats can be written:
//!
//! - [`PixelFormat::B8G8R8A8Unorm`]: RGB/alpha bitmask header, 4 bytes per pixel.
//! - [`PixelFormat::R16G16B16A16Float`]: legacy FourCC `0x71` header, 8 bytes per pixel,
//!   encoded with the clamping half float converter from [`lwdds_half`].
//!
//! Both use legacy headers, so no DX10 extension header is emitted.
//!
//! # Example
//!
//! ```
//! use lwdds_dds::{encode_texture_2d, PixelFormat, Samples};
//!
//! let pixels = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0];
//! let bytes = encode_texture_2d(2, 1, PixelFormat::B8G8R8A8Unorm, 1, Samples::Float32(&pixels))?;
//!
//! assert_eq!(bytes.len(), 128 + 8);
//! assert_eq!(&bytes[128..], &[0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
//! # Ok::<(), lwdds_dds::DdsWriteError>(())
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod convert;
pub mod dds;
pub mod error;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use convert::{convert_samples, NumericKind, Samples};
pub use dds::{DdsFileHeader, PixelFormat};
pub use error::{DdsWriteError, DdsWriteResult};
pub use writer::{build_header, encode_texture_2d};

#[cfg(feature = "std")]
pub use writer::write_texture_2d;
