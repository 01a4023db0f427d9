use crate::foundation::core::Resolution;
use crate::foundation::error::{ZmergeError, ZmergeResult};
use crate::layer::model::Layer;

#[derive(Clone, Debug, Default)]
/// Ordered, exclusively-owned collection of layers for one run.
///
/// Sequence order is only the tie-break order for equal depths; depth decides
/// visual order.
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    /// Wrap layers without validating them. See [`LayerStack::validate`].
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// Wrap layers and reject empty or mixed-resolution stacks.
    pub fn try_new(layers: Vec<Layer>) -> ZmergeResult<Self> {
        let stack = Self::new(layers);
        stack.validate()?;
        Ok(stack)
    }

    /// `true` iff every layer has the same width and height as its neighbour.
    pub fn resolution_check(&self) -> bool {
        self.layers
            .windows(2)
            .all(|w| w[0].resolution() == w[1].resolution())
    }

    /// Fail unless the stack is non-empty and [`LayerStack::resolution_check`] holds.
    pub fn validate(&self) -> ZmergeResult<()> {
        let Some(first) = self.layers.first() else {
            return Err(ZmergeError::config("no input layers"));
        };
        if let Some((idx, bad)) = self
            .layers
            .iter()
            .enumerate()
            .find(|(_, l)| l.resolution() != first.resolution())
        {
            return Err(ZmergeError::resolution(format!(
                "layer {idx} is {} but layer 0 is {}",
                bad.resolution(),
                first.resolution()
            )));
        }
        Ok(())
    }

    /// Shared resolution, or `None` for an empty stack.
    pub fn resolution(&self) -> Option<Resolution> {
        self.layers.first().map(Layer::resolution)
    }

    /// Layers in input order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// `true` when the stack holds no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Append a layer at the end of the tie-break order.
    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }
}

impl From<Vec<Layer>> for LayerStack {
    fn from(layers: Vec<Layer>) -> Self {
        Self::new(layers)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/stack.rs"]
mod tests;
