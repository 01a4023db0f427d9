use rayon::prelude::*;
use smallvec::SmallVec;

use crate::composite::pixel::composite_at;
use crate::depth::order::{DepthOrder, order_at_into};
use crate::foundation::core::{Rgba, TRANSPARENT, is_unit_rgba};
use crate::foundation::error::{ZmergeError, ZmergeResult};
use crate::layer::stack::LayerStack;
use crate::render::assemble::OutputBuffer;

#[derive(Clone, Debug)]
/// Row-level threading for [`merge_layers`].
pub struct MergeThreading {
    /// Process rows in parallel on a dedicated rayon pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for MergeThreading {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

#[derive(Clone, Debug)]
/// Parameters of one depth-ordered merge.
pub struct MergeOpts {
    /// Sort depth descending instead of ascending.
    pub invert_z: bool,
    /// Sample every pixel's fold starts from.
    pub background: Rgba,
    /// Row-level threading.
    pub threading: MergeThreading,
}

impl Default for MergeOpts {
    fn default() -> Self {
        Self {
            invert_z: false,
            background: TRANSPARENT,
            threading: MergeThreading::default(),
        }
    }
}

/// Composite every pixel of `stack` in its own depth order.
///
/// The background and the stack are validated first; nothing is computed for an
/// out-of-range background or an empty or mixed-resolution stack. Sequential and parallel runs produce identical output.
#[tracing::instrument(skip(stack, opts), fields(layers = stack.len(), invert_z = opts.invert_z))]
pub fn merge_layers(stack: &LayerStack, opts: &MergeOpts) -> ZmergeResult<OutputBuffer> {
    if !is_unit_rgba(&opts.background) {
        return Err(ZmergeError::config(format!(
            "background {:?} has channels outside [0, 1]",
            opts.background
        )));
    }
    stack.validate()?;
    let resolution = stack
        .resolution()
        .ok_or_else(|| ZmergeError::config("no input layers"))?;

    let mut out = OutputBuffer::new(resolution, opts.background);
    if resolution.is_empty() {
        return Ok(out);
    }
    let width = resolution.width as usize;

    if opts.threading.parallel {
        let pool = build_thread_pool(opts.threading.threads)?;
        pool.install(|| {
            out.pixels_mut()
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| merge_row(stack, y * width, row, opts));
        });
    } else {
        for (y, row) in out.pixels_mut().chunks_mut(width).enumerate() {
            merge_row(stack, y * width, row, opts);
        }
    }

    Ok(out)
}

fn merge_row(stack: &LayerStack, row_start: usize, row: &mut [Rgba], opts: &MergeOpts) {
    let mut zs = SmallVec::<[u16; 8]>::new();
    let mut order = DepthOrder::new();
    for (x, px) in row.iter_mut().enumerate() {
        let pixel = row_start + x;
        order_at_into(stack, pixel, opts.invert_z, &mut zs, &mut order);
        *px = composite_at(stack, pixel, &order, opts.background);
    }
}

fn build_thread_pool(threads: Option<usize>) -> ZmergeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ZmergeError::config(
            "merge threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ZmergeError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/merge.rs"]
mod tests;
