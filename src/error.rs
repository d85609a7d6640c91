use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SliceError {
    #[error("could not open {path:?}: {source}")]
    FileOpen { path: PathBuf, source: io::Error },

    #[error("could not read the 12 byte dimension header: {0}")]
    HeaderRead(#[source] io::Error),

    #[error("unexpected end of file: plane needs {expected} bytes, only {available} available")]
    UnexpectedEof { expected: usize, available: usize },

    #[error("invalid plane dimensions {nx}x{ny}")]
    InvalidDimensions { nx: i32, ny: i32 },

    #[error("invalid slice number {0} (slices are 1-indexed)")]
    InvalidSliceNumber(usize),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T, E = SliceError> = std::result::Result<T, E>;
