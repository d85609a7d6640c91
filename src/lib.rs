//! Read 2D slices out of 8-bit MRC image stacks.
//!
//! The stack is a 1024 byte header, whose first 12 bytes hold `nx`, `ny`
//! and `nz` as little-endian `i32`, followed by `nz` planes of `nx * ny`
//! unsigned bytes each. Slices are returned as `(ny, nx)` arrays flipped
//! vertically, so row 0 is the last row stored in the file.
//!
//! ```no_run
//! let dims = mrc_slice::get_dims("stack.mrc")?;
//! let first = mrc_slice::get_slice("stack.mrc", 1)?;
//! assert_eq!(first.dim(), (dims.ny as usize, dims.nx as usize));
//! # Ok::<(), mrc_slice::SliceError>(())
//! ```

mod error;
mod header;
mod read;

pub use error::{Result, SliceError};
pub use header::{Dims, HEADER_SIZE, SAMPLE_BYTES, get_dims};
pub use read::{SliceReader, decode_plane, flip_vertical, get_slice};
