use lwdds_dds::DdsWriteError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Write(#[from] DdsWriteError),
    /// Command line values that parse but cannot be used together.
    #[error("{0}")]
    InvalidInput(String),
}
