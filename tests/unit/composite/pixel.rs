use super::*;
use crate::depth::order::order_at;
use crate::foundation::core::{Resolution, TRANSPARENT};
use crate::layer::model::{BlendMode, Layer};

fn one_px(rgba: Rgba, z: u16, mode: BlendMode) -> Layer {
    Layer::filled(Resolution::new(1, 1), rgba, z, mode).unwrap()
}

#[test]
fn two_multiply_layers_golden() {
    let a = one_px([0.5, 0.0, 0.0, 0.1], 9, BlendMode::Multiply);
    let b = one_px([0.0, 0.5, 0.0, 0.1], 8, BlendMode::Multiply);
    let stack = LayerStack::new(vec![a, b]);

    let order = order_at(&stack, 0, false);
    assert_eq!(order.to_vec(), vec![1, 0]);

    let out = composite_at(&stack, 0, &order, TRANSPARENT);
    // B lands on transparent: (0, 0.5, 0, 0.1). A over it: out_a = 0.19,
    // r = (0.1 / 0.19) * 0.45, g = (0.09 / 0.19) * 0.5.
    let expected = [0.236_842_1, 0.236_842_1, 0.0, 0.19];
    for c in 0..4 {
        assert!((out[c] - expected[c]).abs() < 1e-6, "{out:?}");
    }
}

#[test]
fn equal_depth_later_layer_ends_on_top() {
    let red = one_px([1.0, 0.0, 0.0, 1.0], 4, BlendMode::Normal);
    let blue = one_px([0.0, 0.0, 1.0, 1.0], 4, BlendMode::Normal);
    let stack = LayerStack::new(vec![red, blue]);

    for invert_z in [false, true] {
        let order = order_at(&stack, 0, invert_z);
        assert_eq!(composite_at(&stack, 0, &order, TRANSPARENT), [0.0, 0.0, 1.0, 1.0]);
    }
}

#[test]
fn transparent_layer_changes_nothing() {
    let base = one_px([0.3, 0.4, 0.5, 0.6], 2, BlendMode::Screen);
    let ghost = one_px([1.0, 1.0, 1.0, 0.0], 1, BlendMode::Multiply);
    let bg = [0.1, 0.1, 0.1, 0.5];

    let with = LayerStack::new(vec![base.clone(), ghost]);
    let without = LayerStack::new(vec![base]);

    let a = composite_at(&with, 0, &order_at(&with, 0, false), bg);
    let b = composite_at(&without, 0, &order_at(&without, 0, false), bg);
    assert_eq!(a, b);
}

#[test]
fn empty_order_returns_background() {
    let bg = [0.1, 0.2, 0.3, 0.4];
    assert_eq!(composite_samples(bg, std::iter::empty()), bg);
}
