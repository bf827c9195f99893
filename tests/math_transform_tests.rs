#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use snip_rs::internals::math::transform::{compress, expand, inverse_lls, lls, ramp, scale};

const SAMPLES: [f64; 9] = [0.0, 0.25, 1.0, 3.0, 10.0, 150.0, 2.5e3, 1.0e5, 1.0e6];

#[test]
fn test_lls_round_trip() {
    for &x in &SAMPLES {
        assert_relative_eq!(inverse_lls(lls(x)), x, epsilon = 1e-9, max_relative = 1e-9);
    }
}

#[test]
fn test_lls_round_trip_below_zero() {
    // Domain is x >= -1; lls(-1) is exactly 0
    assert_eq!(lls(-1.0f64), 0.0);
    assert_eq!(inverse_lls(0.0f64), -1.0);
    for &x in &[-1.0f64, -0.9, -0.5, -0.1] {
        assert_relative_eq!(inverse_lls(lls(x)), x, epsilon = 1e-9);
    }
}

#[test]
fn test_inverse_is_not_the_nested_exponential() {
    // exp(exp(sqrt(y) + 1) + 1) + 1 does not undo the forward transform
    for &x in &[1.0f64, 10.0, 100.0] {
        let y = lls(x);
        let nested = ((y.sqrt() + 1.0).exp() + 1.0).exp() + 1.0;
        assert!((nested - x).abs() > 1.0, "x={} nested={}", x, nested);
    }
}

#[test]
fn test_lls_is_monotonic_and_compressive() {
    let compressed = compress(&SAMPLES);
    for w in compressed.windows(2) {
        assert!(w[1] > w[0]);
    }
    // Six decades of input squeezed into a small range
    assert!(compressed[SAMPLES.len() - 1] - compressed[0] < 2.0);
}

#[test]
fn test_lls_out_of_domain_is_nan() {
    assert!(lls(-2.0f64).is_nan());
}

#[test]
fn test_slice_forms_match_scalar_forms() {
    let compressed = compress(&SAMPLES);
    let restored = expand(&compressed);
    for ((&c, &r), &x) in compressed.iter().zip(restored.iter()).zip(SAMPLES.iter()) {
        assert_eq!(c, lls(x));
        assert_relative_eq!(r, x, epsilon = 1e-9, max_relative = 1e-9);
    }
}

#[test]
fn test_lls_f32() {
    let x = 42.0f32;
    assert_relative_eq!(inverse_lls(lls(x)), x, max_relative = 1e-4);
}

#[test]
fn test_scale_and_ramp() {
    assert_eq!(scale(&[1.0, -2.0, 0.5], 4.0), vec![4.0, -8.0, 2.0]);
    assert_eq!(ramp(&[-3.0, 0.0, 1.0, 2.0], 1.0), vec![0.0, 0.0, 1.0, 2.0]);
    assert_eq!(ramp(&[-3.0, 0.0, 1.0], 0.0), vec![0.0, 0.0, 1.0]);
}
