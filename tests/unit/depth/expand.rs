use super::*;
use crate::foundation::core::Resolution;
use crate::layer::model::{BlendMode, Layer};

#[rustfmt::skip]
const SPOT_HIGH: [u16; 9] = [
    0, 0, 0,
    0, 9, 0,
    0, 0, 0,
];

#[test]
fn dilate_grows_right_and_down() {
    let out = morph_depth(&SPOT_HIGH, 3, 3, MorphOp::Dilate);
    #[rustfmt::skip]
    let expected = [
        0, 0, 0,
        0, 9, 9,
        0, 9, 0,
    ];
    assert_eq!(out, expected);
}

#[test]
fn erode_grows_low_values_right_and_down() {
    let src = SPOT_HIGH.map(|v| 9 - v);
    let out = morph_depth(&src, 3, 3, MorphOp::Erode);
    #[rustfmt::skip]
    let expected = [
        9, 9, 9,
        9, 0, 0,
        9, 0, 9,
    ];
    assert_eq!(out, expected);
}

#[test]
fn borders_are_ignored() {
    let src = [5u16, 1, 1, 1];
    assert_eq!(morph_depth(&src, 2, 2, MorphOp::Dilate), vec![5, 5, 5, 1]);
    assert_eq!(morph_depth(&[3u16], 1, 1, MorphOp::Erode), vec![3]);
}

#[test]
fn op_follows_invert_z() {
    assert_eq!(MorphOp::for_invert_z(false), MorphOp::Dilate);
    assert_eq!(MorphOp::for_invert_z(true), MorphOp::Erode);
}

#[test]
fn expand_depth_rewrites_every_layer_and_keeps_color() {
    let res = Resolution::new(3, 3);
    let mk = || {
        Layer::new(res, vec![[0.25; 4]; 9], SPOT_HIGH.to_vec(), BlendMode::Normal).unwrap()
    };
    let mut stack = LayerStack::new(vec![mk(), mk()]);

    expand_depth(&mut stack, false);

    let expected = morph_depth(&SPOT_HIGH, 3, 3, MorphOp::Dilate);
    for layer in stack.layers() {
        assert_eq!(layer.depth(), expected.as_slice());
        assert!(layer.rgba().iter().all(|px| *px == [0.25; 4]));
    }
}
