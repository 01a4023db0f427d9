use smallvec::SmallVec;

use crate::layer::stack::LayerStack;

/// Layer indices of one pixel, in compositing order (first = composited first).
pub type DepthOrder = SmallVec<[usize; 8]>;

/// Stable-sort layer indices by their depth values.
///
/// Ascending when `invert_z` is false, descending otherwise. Equal depths keep
/// their input order.
pub fn sort_by_depth(zs: &[u16], invert_z: bool, out: &mut DepthOrder) {
    out.clear();
    out.extend(0..zs.len());
    if invert_z {
        out.sort_by(|&a, &b| zs[b].cmp(&zs[a]));
    } else {
        out.sort_by(|&a, &b| zs[a].cmp(&zs[b]));
    }
}

/// Compositing order of the stack at a row-major pixel index.
///
/// `zs` is scratch space for the gathered depth values.
pub fn order_at_into(
    stack: &LayerStack,
    pixel: usize,
    invert_z: bool,
    zs: &mut SmallVec<[u16; 8]>,
    out: &mut DepthOrder,
) {
    zs.clear();
    zs.extend(stack.layers().iter().map(|l| l.depth()[pixel]));
    sort_by_depth(zs.as_slice(), invert_z, out);
}

/// Compositing order of the stack at a row-major pixel index.
pub fn order_at(stack: &LayerStack, pixel: usize, invert_z: bool) -> DepthOrder {
    let mut zs = SmallVec::new();
    let mut out = DepthOrder::new();
    order_at_into(stack, pixel, invert_z, &mut zs, &mut out);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/depth/order.rs"]
mod tests;
