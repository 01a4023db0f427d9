use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::layers::read_layer_list;
use crate::depth::expand::expand_depth;
use crate::foundation::core::{BitDepth, Resolution};
use crate::foundation::error::ZmergeResult;
use crate::io::load::load_stack;
use crate::io::save::save_image;
use crate::render::merge::{MergeOpts, merge_layers};

#[derive(Clone, Debug)]
/// Everything one end-to-end run needs.
pub struct RunOpts {
    /// Layer list file.
    pub layers_path: PathBuf,
    /// Output image path.
    pub out_path: PathBuf,
    /// Grow (or, with `invert_z`, shrink) depth footprints before merging.
    pub expand_z: bool,
    /// Merge parameters (depth direction, background, threading).
    pub merge: MergeOpts,
    /// Resample the result to this size. `None`, or a zero dimension, keeps the input size.
    pub out_size: Option<Resolution>,
    /// Output channel precision.
    pub bit_depth: BitDepth,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Wall-clock time spent in each phase of [`run`].
pub struct RunStats {
    /// Number of layers merged.
    pub layers: usize,
    /// Decoding and validating inputs.
    pub load: Duration,
    /// Depth expansion (zero when disabled).
    pub expand: Duration,
    /// Depth ordering and compositing.
    pub merge: Duration,
    /// Quantizing, resampling and encoding.
    pub save: Duration,
}

impl RunStats {
    /// Sum of all phases.
    pub fn total(&self) -> Duration {
        self.load + self.expand + self.merge + self.save
    }
}

/// Load, optionally expand, merge, and write one composite.
///
/// The output file is only written once every earlier phase has succeeded.
pub fn run(opts: &RunOpts) -> ZmergeResult<RunStats> {
    let mut stats = RunStats::default();

    let t = Instant::now();
    let entries = read_layer_list(&opts.layers_path)?;
    let mut stack = load_stack(&entries)?;
    stats.layers = stack.len();
    stats.load = t.elapsed();
    tracing::info!(
        layers = stats.layers,
        elapsed_ms = stats.load.as_millis() as u64,
        "layers loaded"
    );

    if opts.expand_z {
        let t = Instant::now();
        expand_depth(&mut stack, opts.merge.invert_z);
        stats.expand = t.elapsed();
        tracing::info!(elapsed_ms = stats.expand.as_millis() as u64, "depth expanded");
    }

    let t = Instant::now();
    let merged = merge_layers(&stack, &opts.merge)?;
    stats.merge = t.elapsed();
    tracing::info!(elapsed_ms = stats.merge.as_millis() as u64, "pixel blending done");

    let t = Instant::now();
    let img = merged.assemble(opts.bit_depth, opts.out_size)?;
    save_image(&img, &opts.out_path)?;
    stats.save = t.elapsed();
    tracing::info!(
        path = %opts.out_path.display(),
        width = img.width(),
        height = img.height(),
        elapsed_ms = stats.save.as_millis() as u64,
        "image saved"
    );

    tracing::info!(
        elapsed_ms = stats.total().as_millis() as u64,
        "processing done"
    );
    Ok(stats)
}
