use std::{error::Error, path::PathBuf, time::Instant};

use indicatif::{MultiProgress, ParallelProgressIterator, ProgressBar};
use log::{debug, info};
use mrc_slice::SliceReader;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::write::{write_tiff_big_endian, write_tiff_native_endian};

#[derive(Debug, clap::ValueEnum, Clone, Copy)]
pub enum ArgEndianess {
    Big,
    Native,
}

pub fn convert(
    mrc_path: PathBuf,            // 3d, 8bit
    dest_path: PathBuf,           // directory
    endianess: ArgEndianess,      // tif output endianess
    start_at_slice: usize,        // 1-indexed
    stop_at_slice: Option<usize>, // 1-indexed, inclusive, last slice if not given
    multi_progress: &MultiProgress,
) -> Result<(), Box<dyn Error + Sync + Send>> {
    let t0 = Instant::now();

    let reader = SliceReader::new(mrc_path);
    let dims = reader.dims()?;
    info!("dimensions: {}x{}x{}", dims.nz, dims.ny, dims.nx);
    info!("endianess: {:?}", endianess);

    let stop = match stop_at_slice {
        Some(stop) => stop,
        None => usize::try_from(dims.nz)
            .ok()
            .filter(|&nz| nz > 0)
            .ok_or_else(|| format!("header declares nz = {}, pass --stop explicitly", dims.nz))?,
    };
    if start_at_slice == 0 || start_at_slice > stop {
        return Err(format!("invalid slice range {start_at_slice}..={stop}").into());
    }

    let len = (stop - start_at_slice + 1) as u64;
    let progress = multi_progress.add(ProgressBar::new(len));

    // nz comes from the header, so the range may be far larger than the data
    let res: Result<(), _> = (start_at_slice..=stop)
        .into_par_iter()
        .progress_with(progress.clone())
        .map(|n| -> Result<(), Box<dyn Error + Sync + Send>> {
            let plane = reader.slice_with_dims(dims, n)?;
            let out_path = dest_path.join(format!("slice_{n:05}.tif"));
            match endianess {
                ArgEndianess::Big => write_tiff_big_endian(&out_path, &plane)?,
                ArgEndianess::Native => write_tiff_native_endian(&out_path, &plane)?,
            }
            debug!("created {out_path:?}");
            Ok(())
        })
        .collect();
    res?;

    progress.finish();
    multi_progress.remove(&progress);

    info!("conversion done in {:?}", t0.elapsed());

    Ok(())
}
