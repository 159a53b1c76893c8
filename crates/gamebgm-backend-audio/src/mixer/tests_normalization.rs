//! Tests for normalization and quantization.

use super::*;

#[test]
fn test_peak() {
    assert_eq!(peak(&[0.1, -0.7, 0.3]), 0.7);
    assert_eq!(peak(&[]), 0.0);
}

#[test]
fn test_normalize_to_target() {
    let mut samples = vec![0.5, -2.0, 1.0];
    let gain = normalize(&mut samples, NORMALIZE_TARGET);

    assert!((gain - 0.45).abs() < 1e-12);
    assert!((peak(&samples) - 0.9).abs() < 1e-12);
    assert!((samples[0] - 0.225).abs() < 1e-12);
}

#[test]
fn test_normalize_silence_is_untouched() {
    let mut samples = vec![0.0, 1e-12, -1e-12];
    let gain = normalize(&mut samples, NORMALIZE_TARGET);

    assert_eq!(gain, 0.9);
    assert!(samples.iter().all(|s| s.abs() < 1e-11));
}

#[test]
fn test_normalize_empty() {
    let mut samples: Vec<f64> = vec![];
    normalize(&mut samples, NORMALIZE_TARGET);
    assert!(samples.is_empty());
}

#[test]
fn test_quantize_pcm16() {
    let pcm = quantize_pcm16(&[0.0, 1.0, -1.0, 0.5, 2.0, -2.0]);
    assert_eq!(pcm, vec![0, 32767, -32767, 16384, 32767, -32767]);
}

#[test]
fn test_master_preserves_headroom() {
    let samples: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.1).sin() * 5.0).collect();
    let pcm = master_to_pcm16(&samples);

    let limit = (32767.0 * NORMALIZE_TARGET.tanh()).round() as i16;
    let max = pcm.iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert_eq!(max as i16, limit);
    assert!(pcm.iter().all(|s| s.abs() <= limit));
}

#[test]
fn test_master_does_not_modify_input() {
    let samples = vec![0.1, -0.2, 0.3];
    let before = samples.clone();
    let _ = master_to_pcm16(&samples);
    assert_eq!(samples, before);
}

#[test]
fn test_master_silence() {
    let pcm = master_to_pcm16(&[0.0; 16]);
    assert!(pcm.iter().all(|&s| s == 0));
}
