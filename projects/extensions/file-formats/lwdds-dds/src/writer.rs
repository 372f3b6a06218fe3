//! Assembly of complete DDS files: header selection, sample conversion and file output.

use crate::convert::{convert_samples, Samples};
use crate::dds::constants::*;
use crate::dds::{
    DdsFileHeader, DdsHeader, DdsPixelFormatBlock, Dx10HeaderExtension, PixelFormat,
    ResourceDimension,
};
use crate::error::{DdsWriteError, DdsWriteResult};
use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::{fs, io::Write, path::Path};

/// Builds the header for a 2D texture of the given dimensions and format.
///
/// `pitch_or_linear_size` is `width * bytes_per_pixel`, which is only meaningful for the
/// uncompressed formats this writer supports. The DX10 extension is always filled in,
/// but it is only serialized when the pixel format block carries the `DX10` FourCC.
///
/// # Errors
///
/// [`DdsWriteError::UnsupportedFormat`] unless `format` is [`PixelFormat::R16G16B16A16Float`]
/// or [`PixelFormat::B8G8R8A8Unorm`].
pub fn build_header(
    width: u32,
    height: u32,
    format: PixelFormat,
    mip_count: u32,
) -> DdsWriteResult<DdsFileHeader> {
    let pixel_format = match format {
        PixelFormat::R16G16B16A16Float => DdsPixelFormatBlock::four_cc(FOURCC_A16B16G16R16F),
        PixelFormat::B8G8R8A8Unorm => DdsPixelFormatBlock::rgba_masks(
            BGRA8888_RED_MASK,
            BGRA8888_GREEN_MASK,
            BGRA8888_BLUE_MASK,
            BGRA8888_ALPHA_MASK,
        ),
        other => return Err(DdsWriteError::UnsupportedFormat(other)),
    };

    let header = DdsHeader {
        flags: DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT,
        height,
        width,
        pitch_or_linear_size: width.saturating_mul(format.bytes_per_pixel()),
        depth: 1,
        mip_map_count: mip_count,
        pixel_format,
        caps: DDSCAPS_TEXTURE,
        ..DdsHeader::default()
    };

    let dx10 = Dx10HeaderExtension {
        dxgi_format: format.dxgi_format(),
        resource_dimension: ResourceDimension::Texture2D,
        ..Dx10HeaderExtension::default()
    };

    Ok(DdsFileHeader { header, dx10 })
}

/// Encodes a complete DDS file (header followed by converted pixel data) in memory.
///
/// The samples are converted with the conversion registered for
/// `(samples.kind(), format.numeric_kind())`, see [`convert_samples`].
/// Sample counts that do not match the texture dimensions are written as given.
///
/// # Errors
///
/// - [`DdsWriteError::UnsupportedFormat`] if `format` cannot be written.
/// - [`DdsWriteError::UnsupportedConversion`] if the samples cannot be converted to `format`.
pub fn encode_texture_2d(
    width: u32,
    height: u32,
    format: PixelFormat,
    mip_count: u32,
    samples: Samples<'_>,
) -> DdsWriteResult<Vec<u8>> {
    let header = build_header(width, height, format, mip_count)?;
    let target = format
        .numeric_kind()
        .ok_or(DdsWriteError::UnsupportedFormat(format))?;

    let expected = expected_sample_count(width, height, mip_count, format.channel_count());
    if samples.len() as u64 != expected {
        log::warn!(
            "{width}x{height} {format} texture with {mip_count} mip(s) expects {expected} samples, got {}",
            samples.len()
        );
    }

    let pixels = convert_samples(samples, target)?;

    let mut output = Vec::with_capacity(header.serialized_size() + pixels.len());
    header.write_to(&mut output);
    output.extend_from_slice(&pixels);

    log::debug!(
        "Encoded {width}x{height} {format} texture: {} header bytes, {} pixel bytes",
        header.serialized_size(),
        pixels.len()
    );
    Ok(output)
}

/// Encodes a 2D texture and writes it to `path`, replacing any existing file.
///
/// The whole file is encoded in memory first, then written to a temporary file next to
/// `path` and renamed over it. A failed call never leaves a partial file at `path`.
///
/// An overwritten file keeps its permissions. A new file gets the permissions of a
/// plain create (`0o666` minus the process umask on Unix).
///
/// # Errors
///
/// - [`DdsWriteError::UnsupportedFormat`] / [`DdsWriteError::UnsupportedConversion`], before
///   any file is touched.
/// - [`DdsWriteError::Io`] if the temporary file cannot be created, written or renamed.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn write_texture_2d(
    path: &Path,
    width: u32,
    height: u32,
    format: PixelFormat,
    mip_count: u32,
    samples: Samples<'_>,
) -> DdsWriteResult<()> {
    let bytes = encode_texture_2d(width, height, format, mip_count, samples)?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing_permissions = fs::metadata(path).ok().map(|metadata| metadata.permissions());

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Applied through open(2), so the umask still takes effect.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(directory)?;
    file.write_all(&bytes)?;
    file.as_file().sync_all()?;
    if let Some(permissions) = existing_permissions {
        file.as_file().set_permissions(permissions)?;
    }
    file.persist(path).map_err(|err| err.error)?;

    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Number of channel values in a full chain of `mip_count` levels (at least one).
///
/// Saturates at `u64::MAX`. Levels past the 1x1 tail are counted without iterating.
fn expected_sample_count(width: u32, height: u32, mip_count: u32, channels: u32) -> u64 {
    let channels = channels as u64;
    let mut total = 0u64;
    let mut w = width as u64;
    let mut h = height as u64;
    let mut remaining = mip_count.max(1) as u64;

    while remaining > 0 {
        if w <= 1 && h <= 1 {
            // Every remaining level is a single pixel.
            let tail = (w * h).saturating_mul(channels).saturating_mul(remaining);
            return total.saturating_add(tail);
        }

        let level = w.saturating_mul(h).saturating_mul(channels);
        total = total.saturating_add(level);
        remaining -= 1;

        // Calculate next mipmap level dimensions (minimum 1x1)
        w = (w / 2).max(1);
        h = (h / 2).max(1);
    }

    total
}
