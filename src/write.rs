use std::{error::Error, fs::File, path::Path};

use ndarray::Array2;
use tiff::encoder::{TiffEncoder, colortype};
use tiff_encoder::{LONG, RATIONAL, SHORT, TiffFile, ifd::{Ifd, tags}, write::ByteBlock};

fn plane_bytes(plane: &Array2<u8>) -> Vec<u8> {
    plane.iter().copied().collect()
}

pub fn write_tiff_native_endian(
    filename: &Path,
    plane: &Array2<u8>,
) -> Result<(), Box<dyn Error + Sync + Send>> {
    let (height, width) = plane.dim();
    let data = plane_bytes(plane);
    let mut out_file = File::create_new(filename)?;
    let mut tiff = TiffEncoder::new(&mut out_file)?;
    tiff.write_image::<colortype::Gray8>(width as u32, height as u32, &data)?;
    Ok(())
}

pub fn write_tiff_big_endian(
    filename: &Path,
    plane: &Array2<u8>,
) -> Result<(), Box<dyn Error + Sync + Send>> {
    // claim the name first, `TiffFile::write_to` would truncate an existing file
    File::create_new(filename)?;
    let (height, width) = plane.dim();
    let image_bytes = plane_bytes(plane);

    TiffFile::new(
        Ifd::new()
            .with_entry(tags::PhotometricInterpretation, SHORT![1]) // Black is zero
            .with_entry(tags::Compression, SHORT![1]) // No compression

            .with_entry(tags::BitsPerSample, SHORT![8])
            .with_entry(tags::SamplesPerPixel, SHORT![1])
            .with_entry(tags::SampleFormat, SHORT![1]) // uint

            .with_entry(tags::ImageLength, LONG![height as u32])
            .with_entry(tags::ImageWidth, LONG![width as u32])

            .with_entry(tags::ResolutionUnit, SHORT![1]) // No resolution unit
            .with_entry(tags::XResolution, RATIONAL![(1, 1)])
            .with_entry(tags::YResolution, RATIONAL![(1, 1)])

            .with_entry(tags::RowsPerStrip, LONG![height as u32]) // One strip for the whole image
            .with_entry(tags::StripByteCounts, LONG![image_bytes.len() as u32])
            .with_entry(tags::StripOffsets, ByteBlock::single(image_bytes))
            .single()
    ).with_endianness(tiff_encoder::write::Endianness::MM).write_to(filename)?;

    Ok(())
}
