//! Integration tests writing real DDS files to disk

use lwdds_dds::dds::constants::*;
use lwdds_dds::{write_texture_2d, DdsWriteError, PixelFormat, Samples};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(data[offset..offset + 4].try_into().unwrap())
}

#[test]
fn writes_bgra8_texture_from_floats() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bgra8.dds");
    let samples = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0];

    write_texture_2d(
        &path,
        2,
        1,
        PixelFormat::B8G8R8A8Unorm,
        1,
        Samples::Float32(&samples),
    )
    .unwrap();

    let data = fs::read(&path).unwrap();
    assert_eq!(data.len(), 128 + 8);

    // Header
    assert_eq!(&data[0..4], b"DDS ");
    assert_eq!(read_u32(&data, DDS_SIZE_OFFSET), 124);
    assert_eq!(read_u32(&data, DDS_FLAGS_OFFSET), 0x1007);
    assert_eq!(read_u32(&data, DDS_HEIGHT_OFFSET), 1);
    assert_eq!(read_u32(&data, DDS_WIDTH_OFFSET), 2);
    assert_eq!(read_u32(&data, DDS_PITCH_OR_LINEAR_SIZE_OFFSET), 8);
    assert_eq!(read_u32(&data, DDS_DEPTH_OFFSET), 1);
    assert_eq!(read_u32(&data, DDS_MIPMAP_COUNT_OFFSET), 1);
    assert_eq!(read_u32(&data, DDS_PIXELFORMAT_OFFSET), 32);
    assert_eq!(read_u32(&data, DDS_PIXELFORMAT_FLAGS_OFFSET), 0x42);
    assert_eq!(read_u32(&data, FOURCC_OFFSET), 0);
    assert_eq!(read_u32(&data, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET), 32);
    assert_eq!(read_u32(&data, DDS_PIXELFORMAT_RBITMASK_OFFSET), 0x00ff0000);
    assert_eq!(read_u32(&data, DDS_PIXELFORMAT_GBITMASK_OFFSET), 0x0000ff00);
    assert_eq!(read_u32(&data, DDS_PIXELFORMAT_BBITMASK_OFFSET), 0x000000ff);
    assert_eq!(read_u32(&data, DDS_PIXELFORMAT_ABITMASK_OFFSET), 0xff000000);
    assert_eq!(read_u32(&data, DDS_CAPS_OFFSET), 0x1000);

    // Pixels
    assert_eq!(
        &data[128..],
        &[0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
    );
}

#[test]
fn writes_half_float_texture_without_dx10_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rgba16f.dds");

    write_texture_2d(
        &path,
        1,
        1,
        PixelFormat::R16G16B16A16Float,
        1,
        Samples::Float32(&[0.5, 0.5, 0.5, 1.0]),
    )
    .unwrap();

    let data = fs::read(&path).unwrap();
    assert_eq!(data.len(), 128 + 8);
    assert_eq!(read_u32(&data, DDS_PIXELFORMAT_FLAGS_OFFSET), DDPF_FOURCC);
    assert_eq!(read_u32(&data, FOURCC_OFFSET), 0x71);
    assert_eq!(read_u32(&data, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET), 0);
    assert_eq!(read_u32(&data, DDS_PITCH_OR_LINEAR_SIZE_OFFSET), 8);
    assert_eq!(
        &data[128..],
        &[0x00, 0x38, 0x00, 0x38, 0x00, 0x38, 0x00, 0x3C]
    );
}

#[test]
fn identical_calls_produce_identical_files() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.dds");
    let second = dir.path().join("second.dds");
    let samples: Vec<f32> = (0..64).map(|i| i as f32 / 7.0).collect();

    for path in [&first, &second] {
        write_texture_2d(
            path,
            4,
            4,
            PixelFormat::R16G16B16A16Float,
            1,
            Samples::Float32(&samples),
        )
        .unwrap();
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn unsupported_format_writes_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bc1.dds");

    let error = write_texture_2d(
        &path,
        4,
        4,
        PixelFormat::BC1Unorm,
        1,
        Samples::Float32(&[0.0; 64]),
    )
    .unwrap_err();

    assert!(matches!(
        error,
        DdsWriteError::UnsupportedFormat(PixelFormat::BC1Unorm)
    ));
    assert!(!path.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn unsupported_conversion_keeps_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("existing.dds");
    fs::write(&path, b"previous contents").unwrap();

    let error = write_texture_2d(
        &path,
        1,
        1,
        PixelFormat::R16G16B16A16Float,
        1,
        Samples::SInt32(&[0, 1, 2, 3]),
    )
    .unwrap_err();

    assert!(error.is_unsupported_format());
    assert_eq!(fs::read(&path).unwrap(), b"previous contents");
}

#[test]
fn overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("overwrite.dds");
    fs::write(&path, vec![0xEE; 1024]).unwrap();

    write_texture_2d(
        &path,
        1,
        1,
        PixelFormat::B8G8R8A8Unorm,
        1,
        Samples::UInt8Unorm(&[1, 2, 3, 4]),
    )
    .unwrap();

    let data = fs::read(&path).unwrap();
    assert_eq!(data.len(), 128 + 4);
    assert_eq!(&data[128..], &[1, 2, 3, 4]);
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("texture.dds");

    let error = write_texture_2d(
        &path,
        1,
        1,
        PixelFormat::B8G8R8A8Unorm,
        1,
        Samples::Float32(&[0.0; 4]),
    )
    .unwrap_err();

    assert!(matches!(error, DdsWriteError::Io(_)));
    assert!(!error.is_unsupported_format());
    assert!(!path.exists());
}

#[test]
fn parallel_writes_to_distinct_paths() {
    let dir = tempdir().unwrap();
    let root: &Path = dir.path();

    std::thread::scope(|scope| {
        for index in 0..4u8 {
            scope.spawn(move || {
                let samples = [index; 16];
                let path = root.join(format!("texture_{index}.dds"));
                write_texture_2d(
                    &path,
                    2,
                    2,
                    PixelFormat::B8G8R8A8Unorm,
                    1,
                    Samples::UInt8Unorm(&samples),
                )
                .unwrap();
            });
        }
    });

    for index in 0..4u8 {
        let data = fs::read(root.join(format!("texture_{index}.dds"))).unwrap();
        assert_eq!(data.len(), 128 + 16);
        assert!(data[128..].iter().all(|byte| *byte == index));
    }
}

#[cfg(unix)]
mod permissions {
    use super::*;
    use rstest::rstest;
    use std::os::unix::fs::PermissionsExt;

    fn mode(path: &Path) -> u32 {
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    fn write_bgra8(path: &Path) {
        write_texture_2d(
            path,
            1,
            1,
            PixelFormat::B8G8R8A8Unorm,
            1,
            Samples::UInt8Unorm(&[1, 2, 3, 4]),
        )
        .unwrap();
    }

    #[rstest]
    #[case(0o644)]
    #[case(0o640)]
    #[case(0o664)]
    #[case(0o600)]
    fn overwrite_keeps_existing_mode(#[case] existing: u32) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("existing.dds");
        fs::write(&path, b"old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(existing)).unwrap();

        write_bgra8(&path);

        assert_eq!(mode(&path), existing);
        assert_eq!(fs::read(&path).unwrap().len(), 128 + 4);
    }

    #[test]
    fn new_file_gets_plain_create_mode() {
        let dir = tempdir().unwrap();
        let reference = dir.path().join("reference.bin");
        let path = dir.path().join("new.dds");

        // A plain create applies 0o666 minus the umask.
        fs::write(&reference, b"").unwrap();
        write_bgra8(&path);

        assert_eq!(mode(&path), mode(&reference));
    }
}
