use std::path::Path;

use anyhow::Context as _;
use image::DynamicImage;
use rayon::prelude::*;

use crate::config::layers::LayerEntry;
use crate::foundation::error::{ZmergeError, ZmergeResult};
use crate::layer::model::Layer;
use crate::layer::stack::LayerStack;

/// Decode an image file with its format guessed from contents and extension.
pub fn open_image(path: &Path) -> ZmergeResult<DynamicImage> {
    let reader = image::ImageReader::open(path)
        .with_context(|| format!("open image '{}'", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("detect format of '{}'", path.display()))?;
    let img = reader
        .decode()
        .with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(img)
}

/// Decode one entry's color and depth images into a [`Layer`].
pub fn load_layer(index: usize, entry: &LayerEntry) -> ZmergeResult<Layer> {
    let color = open_image(&entry.color)?;
    let depth = open_image(&entry.depth)?;

    let prefix = || {
        format!(
            "layer {index} ('{}' + '{}')",
            entry.color.display(),
            entry.depth.display()
        )
    };
    let layer = Layer::from_images(&color, &depth, entry.mode).map_err(|e| match e {
        ZmergeError::Format(m) => ZmergeError::format(format!("{}: {m}", prefix())),
        ZmergeError::ResolutionMismatch(m) => {
            ZmergeError::resolution(format!("{}: {m}", prefix()))
        }
        other => other,
    })?;

    tracing::debug!(
        index,
        color = %entry.color.display(),
        mode = ?entry.mode,
        resolution = %layer.resolution(),
        "layer decoded"
    );
    Ok(layer)
}

/// Decode all entries in parallel into a validated stack, keeping list order.
///
/// Any failing layer aborts the whole load.
#[tracing::instrument(skip(entries), fields(layers = entries.len()))]
pub fn load_stack(entries: &[LayerEntry]) -> ZmergeResult<LayerStack> {
    let layers = entries
        .par_iter()
        .enumerate()
        .map(|(i, e)| load_layer(i, e))
        .collect::<ZmergeResult<Vec<_>>>()?;
    LayerStack::try_new(layers)
}

#[cfg(test)]
#[path = "../../tests/unit/io/load.rs"]
mod tests;
