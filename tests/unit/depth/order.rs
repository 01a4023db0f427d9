use super::*;
use crate::foundation::core::Resolution;
use crate::layer::model::{BlendMode, Layer};

fn sorted(zs: &[u16], invert_z: bool) -> Vec<usize> {
    let mut out = DepthOrder::new();
    sort_by_depth(zs, invert_z, &mut out);
    out.to_vec()
}

#[test]
fn ascending_without_invert() {
    assert_eq!(sorted(&[9, 8, 10], false), vec![1, 0, 2]);
}

#[test]
fn descending_with_invert() {
    assert_eq!(sorted(&[9, 8, 10], true), vec![2, 0, 1]);
}

#[test]
fn ties_keep_input_order_in_both_directions() {
    assert_eq!(sorted(&[5, 5, 5], false), vec![0, 1, 2]);
    assert_eq!(sorted(&[5, 5, 5], true), vec![0, 1, 2]);
    assert_eq!(sorted(&[3, 1, 3, 1], false), vec![1, 3, 0, 2]);
    assert_eq!(sorted(&[3, 1, 3, 1], true), vec![0, 2, 1, 3]);
}

#[test]
fn empty_input_gives_empty_order() {
    assert!(sorted(&[], false).is_empty());
}

#[test]
fn order_at_reads_each_pixel_independently() {
    let res = Resolution::new(2, 1);
    let a = Layer::new(res, vec![[0.0; 4]; 2], vec![1, 9], BlendMode::Normal).unwrap();
    let b = Layer::new(res, vec![[0.0; 4]; 2], vec![5, 5], BlendMode::Normal).unwrap();
    let stack = LayerStack::new(vec![a, b]);

    assert_eq!(order_at(&stack, 0, false).to_vec(), vec![0, 1]);
    assert_eq!(order_at(&stack, 1, false).to_vec(), vec![1, 0]);
    assert_eq!(order_at(&stack, 1, true).to_vec(), vec![0, 1]);
}
