use crate::foundation::core::Rgba;
use crate::layer::model::BlendMode;

/// Alpha of `top` composited over `below` ("over" operator).
#[inline]
pub fn blend_alpha(below: f32, top: f32) -> f32 {
    top + below * (1.0 - top)
}

/// Mode-dependent color of one channel where `top` overlaps `below`.
#[inline]
pub fn blend_value(below: f32, top: f32, mode: BlendMode) -> f32 {
    match mode {
        BlendMode::Normal => top,
        BlendMode::Multiply => below * top,
        BlendMode::Screen => below + top - below * top,
    }
}

/// Composite one straight-alpha layer sample `top` onto the accumulated result `acc`.
///
/// A fully transparent `top` returns `acc` unchanged. The mode only takes effect
/// in proportion to `acc`'s coverage: over a transparent `acc` the result is `top`
/// for every mode.
pub fn blend_over(acc: Rgba, top: Rgba, mode: BlendMode) -> Rgba {
    let top_a = top[3];
    if top_a == 0.0 {
        return acc;
    }
    if top_a == 1.0 && mode == BlendMode::Normal {
        return top;
    }

    let acc_a = acc[3];
    // > 0 since top_a > 0
    let out_a = blend_alpha(acc_a, top_a);
    let w = top_a / out_a;

    let mut out = [0.0f32; 4];
    for c in 0..3 {
        let mixed = (1.0 - acc_a) * top[c] + acc_a * blend_value(acc[c], top[c], mode);
        out[c] = (1.0 - w) * acc[c] + w * mixed;
    }
    out[3] = out_a;
    out
}

#[cfg(test)]
#[path = "../../tests/unit/composite/blend.rs"]
mod tests;
