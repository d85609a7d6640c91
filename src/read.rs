use std::{
    io::{Read, Seek, SeekFrom},
    path::{Path, PathBuf},
};

use log::debug;
use ndarray::{Array2, s};

use crate::{
    error::{Result, SliceError},
    header::{self, Dims, get_dims},
};

/// Read one plane of `nx * ny` unsigned 8-bit samples from `reader` and
/// return it as a `(ny, nx)` array with the row order reversed, so that
/// row 0 of the result is the last row stored in the file.
///
/// Short reads fail with [`SliceError::UnexpectedEof`]; the plane is never
/// padded.
pub fn decode_plane<R: Read>(reader: &mut R, nx: i32, ny: i32) -> Result<Array2<u8>> {
    let (width, height) = header::plane_shape(nx, ny)?;
    let expected = header::plane_len(nx, ny)?;

    // no preallocation: the dims may come from a bogus header
    let mut buf = Vec::new();
    reader.by_ref().take(expected as u64).read_to_end(&mut buf)?;
    if buf.len() < expected {
        return Err(SliceError::UnexpectedEof {
            expected,
            available: buf.len(),
        });
    }

    let plane = Array2::from_shape_vec((height, width), buf)?;
    Ok(flip_vertical(plane))
}

/// Reverse the row order of a plane (file origin bottom-left, array origin
/// top-left).
pub fn flip_vertical(plane: Array2<u8>) -> Array2<u8> {
    plane.slice(s![..;-1, ..]).to_owned()
}

/// Read the 1-indexed slice `slice_number` of the stack at `path`.
///
/// `slice_number` is not checked against `nz`; asking for a slice past the
/// end of the data fails with [`SliceError::UnexpectedEof`].
pub fn get_slice<P: AsRef<Path>>(path: P, slice_number: usize) -> Result<Array2<u8>> {
    let path = path.as_ref();
    let dims = get_dims(path)?;
    read_slice_with(path, dims, slice_number)
}

fn read_slice_with(path: &Path, dims: Dims, slice_number: usize) -> Result<Array2<u8>> {
    let offset = dims.slice_offset(slice_number)?;
    debug!("{path:?}: slice {slice_number} at offset {offset}");

    let mut file = header::open(path)?;
    file.seek(SeekFrom::Start(offset))?;
    decode_plane(&mut file, dims.nx, dims.ny)
}

/// Handle on a stack file. Holds only the path: every call opens the file,
/// reads what it needs and closes it again.
#[derive(Debug, Clone)]
pub struct SliceReader {
    path: PathBuf,
}

impl SliceReader {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dims(&self) -> Result<Dims> {
        get_dims(&self.path)
    }

    pub fn slice(&self, slice_number: usize) -> Result<Array2<u8>> {
        get_slice(&self.path, slice_number)
    }

    /// Like [`SliceReader::slice`], reusing dimensions read earlier instead of
    /// reading the header again.
    pub fn slice_with_dims(&self, dims: Dims, slice_number: usize) -> Result<Array2<u8>> {
        read_slice_with(&self.path, dims, slice_number)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use ndarray::array;

    use super::*;

    #[test]
    fn decode_flips_rows() {
        let bytes: Vec<u8> = (0..12).collect();
        let plane = decode_plane(&mut Cursor::new(bytes), 4, 3).unwrap();
        assert_eq!(
            plane,
            array![[8, 9, 10, 11], [4, 5, 6, 7], [0, 1, 2, 3]]
        );
    }

    #[test]
    fn decode_leaves_reader_after_plane() {
        let bytes: Vec<u8> = (0..8).collect();
        let mut cursor = Cursor::new(bytes);
        let first = decode_plane(&mut cursor, 2, 2).unwrap();
        let second = decode_plane(&mut cursor, 2, 2).unwrap();
        assert_eq!(first, array![[2, 3], [0, 1]]);
        assert_eq!(second, array![[6, 7], [4, 5]]);
    }

    #[test]
    fn decode_short_read() {
        let mut cursor = Cursor::new(vec![1u8; 5]);
        match decode_plane(&mut cursor, 3, 2) {
            Err(SliceError::UnexpectedEof {
                expected: 6,
                available: 5,
            }) => {}
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_bad_dims() {
        let mut cursor = Cursor::new(vec![0u8; 16]);
        assert!(matches!(
            decode_plane(&mut cursor, -4, 4),
            Err(SliceError::InvalidDimensions { nx: -4, ny: 4 })
        ));
        assert!(matches!(
            decode_plane(&mut cursor, 4, 0),
            Err(SliceError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn single_row_is_unchanged() {
        let plane = decode_plane(&mut Cursor::new(vec![7u8, 8, 9]), 3, 1).unwrap();
        assert_eq!(plane, array![[7, 8, 9]]);
    }
}
