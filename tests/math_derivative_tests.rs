#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use snip_rs::internals::math::derivative::{gradient, midpoint};
use snip_rs::internals::primitives::errors::SnipError;

const GRAD_INPUT: [f64; 6] = [1.0, 2.0, 4.0, 7.0, 11.0, 16.0];
const MID_INPUT: [f64; 7] = [1.0, 4.0, 6.0, 2.0, 4.0, 2.0, 5.0];

fn assert_all_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_relative_eq!(*a, *e, epsilon = 1e-12);
    }
}

// ============================================================================
// Gradient
// ============================================================================

#[test]
fn test_gradient_first_order() {
    let grad = gradient(&GRAD_INPUT, 1).unwrap();
    assert_all_close(&grad, &[1.0, 1.5, 2.5, 3.5, 4.5, 5.0]);
}

#[test]
fn test_gradient_second_order() {
    let grad = gradient(&GRAD_INPUT, 2).unwrap();
    assert_all_close(&grad, &[0.5, 0.75, 1.0, 1.0, 0.75, 0.5]);
}

#[test]
fn test_gradient_third_order() {
    let grad = gradient(&GRAD_INPUT, 3).unwrap();
    assert_all_close(&grad, &[0.25, 0.25, 0.125, -0.125, -0.25, -0.25]);
}

#[test]
fn test_gradient_higher_order_equals_repeated_first_order() {
    let once = gradient(&GRAD_INPUT, 1).unwrap();
    let twice = gradient(&once, 1).unwrap();
    let thrice = gradient(&twice, 1).unwrap();

    assert_eq!(gradient(&GRAD_INPUT, 2).unwrap(), twice);
    assert_eq!(gradient(&GRAD_INPUT, 3).unwrap(), thrice);
}

#[test]
fn test_gradient_order_zero_is_identity() {
    assert_eq!(gradient(&GRAD_INPUT, 0).unwrap(), GRAD_INPUT.to_vec());
    assert_eq!(gradient(&[3.0, -1.0], 0).unwrap(), vec![3.0, -1.0]);
}

#[test]
fn test_gradient_two_points() {
    // Both end points use the one-sided difference
    assert_eq!(gradient(&[2.0, 5.0], 1).unwrap(), vec![3.0, 3.0]);
}

#[test]
fn test_gradient_requires_two_points() {
    assert_eq!(
        gradient(&[1.0], 1),
        Err(SnipError::TooFewPoints { got: 1, min: 2 })
    );
    assert_eq!(
        gradient::<f64>(&[], 0),
        Err(SnipError::TooFewPoints { got: 0, min: 2 })
    );
}

#[test]
fn test_gradient_f32() {
    let data: Vec<f32> = GRAD_INPUT.iter().map(|&v| v as f32).collect();
    let grad = gradient(&data, 2).unwrap();
    assert_relative_eq!(grad[2], 1.0f32);
    assert_relative_eq!(grad[5], 0.5f32);
}

// ============================================================================
// Midpoint
// ============================================================================

#[test]
fn test_midpoint_documented_orders() {
    assert_eq!(midpoint(&MID_INPUT, 0), MID_INPUT.to_vec());
    assert_all_close(
        &midpoint(&MID_INPUT, 1),
        &[1.0, 3.5, 3.0, 5.0, 2.0, 4.5, 5.0],
    );
    assert_all_close(
        &midpoint(&MID_INPUT, 2),
        &[1.0, 4.0, 2.5, 3.0, 5.5, 2.0, 5.0],
    );
    assert_all_close(
        &midpoint(&MID_INPUT, 3),
        &[1.0, 4.0, 6.0, 3.0, 4.0, 2.0, 5.0],
    );
}

#[test]
fn test_midpoint_large_orders_are_identity() {
    for order in 4..10 {
        assert_eq!(midpoint(&MID_INPUT, order), MID_INPUT.to_vec());
    }
}

#[test]
fn test_midpoint_of_line_is_line() {
    let line: Vec<f64> = (0..11).map(|i| 2.0 * i as f64 - 3.0).collect();
    for order in 1..=5 {
        assert_all_close(&midpoint(&line, order), &line);
    }
}
