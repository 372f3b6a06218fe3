/// Shared constants between modules.
pub mod constants;

/// Header structures and their serialization.
pub mod header;

/// Destination pixel formats.
pub mod pixel_format;

pub use header::*;
pub use pixel_format::*;
