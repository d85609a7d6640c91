use std::io::Write;

use tempfile::NamedTempFile;

/// Header with the given dimensions, padded to 1024 bytes. The unused part
/// is filled with a marker so that reads landing in it are noticed.
pub fn header(nx: i32, ny: i32, nz: i32) -> Vec<u8> {
    let mut header = vec![0xAAu8; 1024];
    header[0..4].copy_from_slice(&nx.to_le_bytes());
    header[4..8].copy_from_slice(&ny.to_le_bytes());
    header[8..12].copy_from_slice(&nz.to_le_bytes());
    header
}

/// Write `header` followed by `data` into a fresh temporary file.
pub fn stack_file(header: &[u8], data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(header).unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

/// A stack whose plane `k` (0-indexed) holds the bytes
/// `k * plane_len .. (k + 1) * plane_len`, truncated to `u8`.
#[allow(dead_code)]
pub fn counting_stack(nx: i32, ny: i32, nz: i32) -> NamedTempFile {
    let len = (nx * ny * nz) as usize;
    let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
    stack_file(&header(nx, ny, nz), &data)
}
