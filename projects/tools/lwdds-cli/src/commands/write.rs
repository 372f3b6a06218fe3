use crate::error::CliError;
use argh::FromArgs;
use lwdds_dds::{write_texture_2d, PixelFormat, Samples};
use std::{fs, path::PathBuf, str::FromStr, time::Instant};

#[derive(FromArgs, Debug)]
/// Write a raw little endian sample file as a DDS texture
#[argh(subcommand, name = "write")]
pub struct WriteCmd {
    /// raw sample file, channel values packed back to back
    #[argh(option)]
    pub input: PathBuf,

    /// destination DDS file, replaced if it exists
    #[argh(option)]
    pub output: PathBuf,

    /// texture width in pixels
    #[argh(option)]
    pub width: u32,

    /// texture height in pixels
    #[argh(option)]
    pub height: u32,

    /// destination format: bgra8, rgba16f [default: rgba16f]
    #[argh(option, default = "OutputFormat::Rgba16f")]
    pub format: OutputFormat,

    /// sample type stored in the input file: f32, i32, unorm8 [default: f32]
    #[argh(option, default = "SourceKind::F32")]
    pub source: SourceKind,

    /// mip level count recorded in the header [default: 1]
    #[argh(option, default = "1")]
    pub mips: u32,
}

/// Destination pixel formats selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Bgra8,
    Rgba16f,
}

impl OutputFormat {
    pub fn pixel_format(self) -> PixelFormat {
        match self {
            OutputFormat::Bgra8 => PixelFormat::B8G8R8A8Unorm,
            OutputFormat::Rgba16f => PixelFormat::R16G16B16A16Float,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bgra8" => Ok(Self::Bgra8),
            "rgba16f" => Ok(Self::Rgba16f),
            _ => Err(format!(
                "Unknown format: {s}. Valid options: bgra8, rgba16f"
            )),
        }
    }
}

/// Element type of the raw input file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceKind {
    F32,
    I32,
    Unorm8,
}

impl SourceKind {
    fn element_size(self) -> usize {
        match self {
            SourceKind::F32 | SourceKind::I32 => 4,
            SourceKind::Unorm8 => 1,
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "f32" => Ok(Self::F32),
            "i32" => Ok(Self::I32),
            "unorm8" | "u8" => Ok(Self::Unorm8),
            _ => Err(format!(
                "Unknown source type: {s}. Valid options: f32, i32, unorm8"
            )),
        }
    }
}

/// Samples decoded from the input file, owned until the texture is written.
#[derive(Debug, PartialEq)]
pub enum SampleBuffer {
    Float32(Vec<f32>),
    SInt32(Vec<i32>),
    UInt8Unorm(Vec<u8>),
}

impl SampleBuffer {
    /// Decodes little endian values of `kind` from `bytes`.
    pub fn decode(bytes: &[u8], kind: SourceKind) -> Result<Self, CliError> {
        let size = kind.element_size();
        if bytes.len() % size != 0 {
            return Err(CliError::InvalidInput(format!(
                "Input is {} bytes, which is not a multiple of the {size} byte {kind:?} sample size",
                bytes.len()
            )));
        }

        let words = bytes
            .chunks_exact(4)
            .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]]);

        Ok(match kind {
            SourceKind::F32 => SampleBuffer::Float32(words.map(f32::from_le_bytes).collect()),
            SourceKind::I32 => SampleBuffer::SInt32(words.map(i32::from_le_bytes).collect()),
            SourceKind::Unorm8 => SampleBuffer::UInt8Unorm(bytes.to_vec()),
        })
    }

    pub fn as_samples(&self) -> Samples<'_> {
        match self {
            SampleBuffer::Float32(values) => Samples::Float32(values),
            SampleBuffer::SInt32(values) => Samples::SInt32(values),
            SampleBuffer::UInt8Unorm(values) => Samples::UInt8Unorm(values),
        }
    }
}

pub fn handle_write_command(cmd: WriteCmd) -> Result<(), CliError> {
    if cmd.width == 0 || cmd.height == 0 {
        return Err(CliError::InvalidInput(format!(
            "Texture dimensions must be non-zero, got {}x{}",
            cmd.width, cmd.height
        )));
    }

    let start = Instant::now();
    let bytes = fs::read(&cmd.input)?;
    let buffer = SampleBuffer::decode(&bytes, cmd.source)?;
    let format = cmd.format.pixel_format();

    log::info!(
        "Read {} {:?} samples from {}",
        buffer.as_samples().len(),
        cmd.source,
        cmd.input.display()
    );

    write_texture_2d(
        &cmd.output,
        cmd.width,
        cmd.height,
        format,
        cmd.mips,
        buffer.as_samples(),
    )?;

    println!(
        "Wrote {}x{} {format} texture to {} in {:.2?}",
        cmd.width,
        cmd.height,
        cmd.output.display(),
        start.elapsed()
    );

    Ok(())
}
