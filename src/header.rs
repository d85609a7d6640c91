use std::{fs::File, io::Read, path::Path};

use byteorder::{ByteOrder, LittleEndian};
use log::debug;

use crate::error::{Result, SliceError};

/// Size of the fixed header preceding the first plane.
pub const HEADER_SIZE: u64 = 1024;

/// Bytes per sample. Only unsigned 8-bit stacks are supported; the mode
/// field of the header is never consulted, so callers must know their
/// files are 8-bit.
pub const SAMPLE_BYTES: usize = 1;

const DIMS_LEN: usize = 12;

/// The `nx`, `ny`, `nz` fields stored at the start of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub nx: i32,
    pub ny: i32,
    pub nz: i32,
}

impl Dims {
    /// Decode the dimensions from the first 12 header bytes.
    pub fn from_bytes(buf: &[u8; DIMS_LEN]) -> Self {
        Self {
            nx: LittleEndian::read_i32(&buf[0..4]),
            ny: LittleEndian::read_i32(&buf[4..8]),
            nz: LittleEndian::read_i32(&buf[8..12]),
        }
    }

    /// Plane width and height as `(nx, ny)`, rejecting non-positive values.
    pub fn plane_shape(&self) -> Result<(usize, usize)> {
        plane_shape(self.nx, self.ny)
    }

    /// Number of bytes in one plane.
    pub fn plane_len(&self) -> Result<usize> {
        plane_len(self.nx, self.ny)
    }

    /// Absolute file offset of the 1-indexed slice `slice_number`.
    pub fn slice_offset(&self, slice_number: usize) -> Result<u64> {
        let index = slice_number
            .checked_sub(1)
            .ok_or(SliceError::InvalidSliceNumber(slice_number))?;
        let plane_len = self.plane_len()? as u64;
        plane_len
            .checked_mul(index as u64)
            .and_then(|o| o.checked_add(HEADER_SIZE))
            .ok_or(SliceError::InvalidSliceNumber(slice_number))
    }
}

impl From<Dims> for (i32, i32, i32) {
    fn from(d: Dims) -> Self {
        (d.nx, d.ny, d.nz)
    }
}

pub(crate) fn plane_shape(nx: i32, ny: i32) -> Result<(usize, usize)> {
    if nx <= 0 || ny <= 0 {
        return Err(SliceError::InvalidDimensions { nx, ny });
    }
    Ok((nx as usize, ny as usize))
}

pub(crate) fn plane_len(nx: i32, ny: i32) -> Result<usize> {
    let (w, h) = plane_shape(nx, ny)?;
    w.checked_mul(h)
        .and_then(|n| n.checked_mul(SAMPLE_BYTES))
        .ok_or(SliceError::InvalidDimensions { nx, ny })
}

pub(crate) fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| SliceError::FileOpen {
        path: path.to_owned(),
        source,
    })
}

/// Read the X, Y and Z dimensions from the header of the file at `path`.
pub fn get_dims<P: AsRef<Path>>(path: P) -> Result<Dims> {
    let path = path.as_ref();
    let mut file = open(path)?;
    let mut buf = [0u8; DIMS_LEN];
    file.read_exact(&mut buf).map_err(SliceError::HeaderRead)?;
    let dims = Dims::from_bytes(&buf);
    debug!("{path:?}: dimensions {}x{}x{}", dims.nz, dims.ny, dims.nx);
    Ok(dims)
}
