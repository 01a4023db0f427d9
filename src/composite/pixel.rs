use crate::composite::blend::blend_over;
use crate::foundation::core::Rgba;
use crate::layer::model::Sample;
use crate::layer::stack::LayerStack;

/// Fold samples, already in compositing order, onto `background`.
pub fn composite_samples<I>(background: Rgba, samples: I) -> Rgba
where
    I: IntoIterator<Item = Sample>,
{
    samples
        .into_iter()
        .fold(background, |acc, s| blend_over(acc, s.rgba, s.mode))
}

/// Composite the stack at a row-major pixel index, visiting layers in `order`.
#[inline]
pub fn composite_at(
    stack: &LayerStack,
    pixel: usize,
    order: &[usize],
    background: Rgba,
) -> Rgba {
    let layers = stack.layers();
    composite_samples(
        background,
        order.iter().map(|&k| layers[k].sample_at_index(pixel)),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/composite/pixel.rs"]
mod tests;
