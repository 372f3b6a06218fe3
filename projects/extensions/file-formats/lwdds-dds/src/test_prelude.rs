//! Common test imports and utilities for DDS writer tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

use endian_writer::{EndianReader, LittleEndianReader};

/// Reads the little endian `u32` at `offset` of a serialized DDS file.
pub fn read_u32(data: &[u8], offset: usize) -> u32 {
    assert!(offset + 4 <= data.len(), "offset {offset} out of bounds");

    // SAFETY: Bounds checked above.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    unsafe { reader.read_u32_at(offset as isize) }
}
