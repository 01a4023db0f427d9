//! Layer list files.
//!
//! A layer list is a JSON array with one object per layer:
//!
//! ```text
//! // whole-line comments are allowed
//! [
//!   { "I": "beauty_01.png", "Z": "depth_01.png", "M": 0 },
//!   { "I": "beauty_02.png", "Z": "depth_02.png", "M": "screen" }
//! ]
//! ```
//!
//! `I` is the color image, `Z` the 16-bit depth image and `M` the blend mode
//! (`0`/`1`/`2`, also written as `2.0` or as a string, or a mode name).

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{ZmergeError, ZmergeResult};
use crate::layer::model::BlendMode;

#[derive(Clone, Debug, PartialEq, Eq)]
/// One resolved layer-list entry.
pub struct LayerEntry {
    /// Color (RGB/RGBA) image path.
    pub color: PathBuf,
    /// Depth image path.
    pub depth: PathBuf,
    /// Blend mode for the whole layer.
    pub mode: BlendMode,
}

#[derive(serde::Deserialize)]
struct RawEntry {
    #[serde(rename = "I")]
    color: String,
    #[serde(rename = "Z")]
    depth: String,
    #[serde(rename = "M")]
    mode: RawMode,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawMode {
    Code(i64),
    // integral floats only, e.g. `2.0`
    Float(f64),
    Text(String),
}

impl RawMode {
    fn resolve(&self) -> ZmergeResult<BlendMode> {
        match self {
            Self::Code(c) => BlendMode::from_code(*c),
            Self::Float(f) if f.fract() == 0.0 => BlendMode::from_code(*f as i64),
            Self::Float(f) => Err(ZmergeError::blend_mode(format!("non-integral code {f}"))),
            Self::Text(s) => s.parse(),
        }
    }
}

/// Drop every line whose first non-whitespace characters are `//`.
pub fn strip_comment_lines(src: &str) -> String {
    src.lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a layer list, resolving relative paths against `base_dir`.
///
/// Entry order is preserved. An empty list is a config error.
pub fn parse_layer_list(src: &str, base_dir: &Path) -> ZmergeResult<Vec<LayerEntry>> {
    let json = strip_comment_lines(src);
    let raw: Vec<RawEntry> = serde_json::from_str(&json)
        .map_err(|e| ZmergeError::config(format!("invalid layer list: {e}")))?;
    if raw.is_empty() {
        return Err(ZmergeError::config("no input layers"));
    }

    raw.into_iter()
        .map(|r| -> ZmergeResult<LayerEntry> {
            Ok(LayerEntry {
                color: base_dir.join(&r.color),
                depth: base_dir.join(&r.depth),
                mode: r.mode.resolve()?,
            })
        })
        .collect()
}

/// Read and parse a layer list file. Relative paths resolve against its directory.
pub fn read_layer_list(path: &Path) -> ZmergeResult<Vec<LayerEntry>> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("read layer list '{}'", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    parse_layer_list(&src, base_dir)
}

#[cfg(test)]
#[path = "../../tests/unit/config/layers.rs"]
mod tests;
