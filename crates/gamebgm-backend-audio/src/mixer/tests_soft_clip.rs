//! Tests for soft clipping.

use super::*;

#[test]
fn test_soft_clip_is_tanh() {
    for x in [-3.0, -0.9, -0.1, 0.0, 0.1, 0.9, 3.0] {
        assert_eq!(soft_clip(x), f64::tanh(x));
    }
}

#[test]
fn test_soft_clip_bounded() {
    assert!(soft_clip(100.0) <= 1.0);
    assert!(soft_clip(-100.0) >= -1.0);
}

#[test]
fn test_soft_clip_preserves_sign() {
    let positive = soft_clip(2.0);
    let negative = soft_clip(-2.0);
    assert!(positive > 0.0);
    assert!(negative < 0.0);
    assert!((positive + negative).abs() < 1e-12);
}

#[test]
fn test_soft_clip_headroom_at_target() {
    let clipped = soft_clip(NORMALIZE_TARGET);
    assert!(clipped < 0.717);
    assert!(clipped > 0.716);
}

#[test]
fn test_soft_clip_buffer() {
    let mut samples = vec![0.5, 1.5, -0.3];
    soft_clip_buffer(&mut samples);

    assert!((samples[0] - 0.5_f64.tanh()).abs() < 1e-12);
    assert!((samples[1] - 1.5_f64.tanh()).abs() < 1e-12);
    assert!((samples[2] + 0.3_f64.tanh()).abs() < 1e-12);
}
