//! zmerge composites rendered image layers by per-pixel depth.
//!
//! Each layer is a color+alpha image with a co-registered depth (Z) map and one
//! blend mode. Instead of stacking layers in a fixed order, every pixel sorts the
//! layers by that pixel's depth and folds them onto a background, so separately
//! rendered passes merge as if they had been rendered together.
//!
//! # Pipeline overview
//!
//! 1. **Load**: layer list -> decoded images -> [`LayerStack`] (validated resolutions)
//! 2. **Expand** (optional): grow or shrink every depth footprint by one pixel
//! 3. **Merge**: per pixel, [`order_at`] then [`composite_at`], rows in parallel
//! 4. **Assemble**: [`OutputBuffer`] -> 8/16-bit image, optionally resampled, encoded
//!
//! Steps 2 and 3 are pure computation with no I/O. Runs are deterministic:
//! sequential and parallel merges produce identical buffers.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod composite;
mod config;
mod depth;
mod foundation;
mod io;
mod layer;
mod pipeline;
mod render;

pub use composite::blend::{blend_alpha, blend_over, blend_value};
pub use composite::pixel::{composite_at, composite_samples};
pub use config::layers::{LayerEntry, parse_layer_list, read_layer_list, strip_comment_lines};
pub use depth::expand::{MorphOp, expand_depth, morph_depth};
pub use depth::order::{DepthOrder, order_at, order_at_into, sort_by_depth};
pub use foundation::core::{BitDepth, Resolution, Rgba, TRANSPARENT, is_unit_rgba, parse_rgba};
pub use foundation::error::{ZmergeError, ZmergeResult};
pub use io::load::{load_layer, load_stack, open_image};
pub use io::save::{ensure_parent_dir, save_image};
pub use layer::model::{BlendMode, Layer, Sample};
pub use layer::stack::LayerStack;
pub use pipeline::{RunOpts, RunStats, run};
pub use render::assemble::{OutputBuffer, quantize};
pub use render::merge::{MergeOpts, MergeThreading, merge_layers};
