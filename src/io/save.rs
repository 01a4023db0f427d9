use std::path::Path;

use anyhow::Context as _;
use image::{DynamicImage, ImageFormat};

use crate::foundation::error::ZmergeResult;

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> ZmergeResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

/// Encode `img` to `path` as PNG, whatever the extension.
///
/// PNG is the only format here that holds both 8- and 16-bit RGBA.
pub fn save_image(img: &DynamicImage, path: &Path) -> ZmergeResult<()> {
    ensure_parent_dir(path)?;
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write image '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/io/save.rs"]
mod tests;
