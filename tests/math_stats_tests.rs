#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use snip_rs::internals::math::stats::{mean, stddev};
use snip_rs::internals::primitives::errors::SnipError;

const DATA: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

#[test]
fn test_mean() {
    assert_relative_eq!(mean(&DATA).unwrap(), 5.0);
    assert_eq!(mean::<f64>(&[]), None);
}

#[test]
fn test_population_stddev() {
    assert_relative_eq!(stddev(&DATA, 0).unwrap(), 2.0, epsilon = 1e-12);
}

#[test]
fn test_sample_stddev() {
    // sum of squares = 32, n - 1 = 7
    assert_relative_eq!(
        stddev(&DATA, 1).unwrap(),
        (32.0f64 / 7.0).sqrt(),
        epsilon = 1e-12
    );
}

#[test]
fn test_constant_data_has_zero_spread() {
    assert_eq!(stddev(&[3.0, 3.0, 3.0], 0).unwrap(), 0.0);
}

#[test]
fn test_stddev_requires_two_points() {
    assert_eq!(
        stddev(&[1.0], 0),
        Err(SnipError::TooFewPoints { got: 1, min: 2 })
    );
    assert_eq!(
        stddev::<f64>(&[], 0),
        Err(SnipError::TooFewPoints { got: 0, min: 2 })
    );
}

#[test]
fn test_stddev_rejects_exhausted_degrees_of_freedom() {
    assert_eq!(
        stddev(&[1.0, 2.0], 2),
        Err(SnipError::InvalidDdof { ddof: 2, len: 2 })
    );
    assert!(stddev(&[1.0, 2.0], 1).is_ok());
}
