mod write;
mod convert;

use std::{
    error::Error,
    path::PathBuf,
};

use clap::Parser;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;

use crate::convert::ArgEndianess;

/// Export slices of an 8-bit MRC stack as TIFF files.
#[derive(Parser, Debug)]
struct Args {
    /// Path to the input .mrc file. Must be a 3D stack in 8bit format.
    mrc_path: PathBuf,
    /// Existing directory the slice_NNNNN.tif files are written to.
    dest_path: PathBuf,
    #[arg(long, value_enum, default_value = "big")]
    endianess: ArgEndianess,
    /// First slice to export, 1-indexed.
    #[arg(long, default_value_t = 1)]
    start: usize,
    /// Last slice to export, 1-indexed and inclusive. Defaults to nz.
    #[arg(long)]
    stop: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error + Sync + Send>> {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    let logger = env_logger::Builder::from_env(env).build();
    let level = logger.filter();
    let multi_progress = MultiProgress::new();
    LogWrapper::new(multi_progress.clone(), logger).try_init()?;
    log::set_max_level(level);

    let args = Args::parse();

    convert::convert(
        args.mrc_path,
        args.dest_path,
        args.endianess,
        args.start,
        args.stop,
        &multi_progress,
    )?;

    Ok(())
}
