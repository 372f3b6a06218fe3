//! Error types for DDS write operations.

use crate::convert::NumericKind;
use crate::dds::PixelFormat;
use thiserror::Error;

/// Result type for DDS write operations
pub type DdsWriteResult<T> = Result<T, DdsWriteError>;

/// Errors that can occur while encoding or writing a DDS texture.
///
/// The two unsupported variants are always raised before any output is produced.
#[derive(Debug, Error)]
pub enum DdsWriteError {
    /// The pixel format cannot be described by a legacy DDS header.
    #[error("Pixel format {0} cannot be written to a legacy DDS file")]
    UnsupportedFormat(PixelFormat),

    /// No conversion is registered from the sample kind to the format's storage kind.
    #[error("No conversion from {from:?} samples to {to:?} storage")]
    UnsupportedConversion { from: NumericKind, to: NumericKind },

    /// The output file could not be created, written or moved into place.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DdsWriteError {
    /// Whether the error rejects the requested format or conversion, as opposed to an I/O failure.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(
            self,
            DdsWriteError::UnsupportedFormat(_) | DdsWriteError::UnsupportedConversion { .. }
        )
    }
}
