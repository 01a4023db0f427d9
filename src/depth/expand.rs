use rayon::prelude::*;

use crate::layer::stack::LayerStack;

/// Offsets `(dx, dy)` covered by the 2x2 elliptical structuring element,
/// relative to its anchor: the pixel itself, its upper and its left neighbour.
const ELLIPSE_2X2: [(isize, isize); 3] = [(0, 0), (0, -1), (-1, 0)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Morphological operator applied to depth grids.
pub enum MorphOp {
    /// Neighbourhood maximum.
    Dilate,
    /// Neighbourhood minimum.
    Erode,
}

impl MorphOp {
    /// Erode when smaller depth means nearer (`invert_z`), dilate otherwise.
    pub fn for_invert_z(invert_z: bool) -> Self {
        if invert_z { Self::Erode } else { Self::Dilate }
    }

    #[inline]
    fn pick(self, a: u16, b: u16) -> u16 {
        match self {
            Self::Dilate => a.max(b),
            Self::Erode => a.min(b),
        }
    }
}

/// Grow (or shrink) every layer's depth footprint by one structuring-element step.
///
/// Rewrites depth grids in place; the previous depth is discarded. Layers are
/// processed in parallel and the call returns only after all are done.
#[tracing::instrument(skip(stack), fields(layers = stack.len()))]
pub fn expand_depth(stack: &mut LayerStack, invert_z: bool) {
    let op = MorphOp::for_invert_z(invert_z);
    stack.layers_mut().par_iter_mut().for_each(|layer| {
        let res = layer.resolution();
        let out = morph_depth(
            layer.depth(),
            res.width as usize,
            res.height as usize,
            op,
        );
        *layer.depth_mut() = out;
    });
}

/// Apply `op` over a row-major `width * height` depth grid.
///
/// Neighbours outside the grid are ignored.
pub fn morph_depth(src: &[u16], width: usize, height: usize, op: MorphOp) -> Vec<u16> {
    debug_assert_eq!(src.len(), width * height);

    let mut out = Vec::with_capacity(src.len());
    for y in 0..height {
        for x in 0..width {
            let mut v = src[y * width + x];
            for &(dx, dy) in &ELLIPSE_2X2[1..] {
                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };
                if nx >= width || ny >= height {
                    continue;
                }
                v = op.pick(v, src[ny * width + nx]);
            }
            out.push(v);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/depth/expand.rs"]
mod tests;
