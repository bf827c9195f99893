#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use snip_rs::internals::algorithms::snip::{
    OrderSchedule, clip_compressed, clipped_midpoint, estimate_background,
};
use snip_rs::internals::math::transform::compress;

/// Flat baseline with two Gaussian peaks.
fn two_peak_spectrum(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            let p1 = 400.0 * (-((x - 30.0) / 3.0).powi(2) / 2.0).exp();
            let p2 = 150.0 * (-((x - 70.0) / 5.0).powi(2) / 2.0).exp();
            20.0 + p1 + p2
        })
        .collect()
}

// ============================================================================
// Order Schedule
// ============================================================================

#[test]
fn test_order_schedule() {
    assert_eq!(OrderSchedule::default(), OrderSchedule::Increasing(8));
    assert_eq!(OrderSchedule::Increasing(4).orders(), vec![1, 2, 3, 4]);
    assert_eq!(OrderSchedule::Increasing(4).len(), 4);
    assert!(OrderSchedule::Increasing(0).is_empty());

    let custom = OrderSchedule::Custom(vec![5, 2, 2]);
    assert_eq!(custom.orders(), vec![5, 2, 2]);
    assert_eq!(custom.len(), 3);
}

// ============================================================================
// Clipping
// ============================================================================

#[test]
fn test_clipped_midpoint_never_raises() {
    let data = compress(&two_peak_spectrum(100));
    for order in 1..20 {
        let clipped = clipped_midpoint(&data, order);
        for (c, d) in clipped.iter().zip(data.iter()) {
            assert!(c <= d);
        }
    }
}

#[test]
fn test_clipped_midpoint_example() {
    let data = [1.0, 4.0, 6.0, 2.0, 4.0, 2.0, 5.0];
    assert_eq!(
        clipped_midpoint(&data, 1),
        vec![1.0, 3.5, 3.0, 2.0, 2.0, 2.0, 5.0]
    );
}

#[test]
fn test_history_is_monotonically_non_increasing() {
    let data = compress(&two_peak_spectrum(100));
    let mut previous = data.clone();
    for order in 1..=12 {
        let next = clipped_midpoint(&previous, order);
        for (n, p) in next.iter().zip(previous.iter()) {
            assert!(n <= p, "order {}", order);
        }
        previous = next;
    }
    assert_eq!(previous, clip_compressed(&data, 1..=12));
}

#[test]
fn test_flat_input_is_fixed_point() {
    let flat = vec![37.0; 50];
    let background = estimate_background(&flat, 1..=10);
    for v in &background {
        assert_relative_eq!(*v, 37.0, epsilon = 1e-9);
    }
}

#[test]
fn test_background_below_data() {
    let data = two_peak_spectrum(100);
    let background = estimate_background(&data, 1..=15);

    assert_eq!(background.len(), data.len());
    for (b, d) in background.iter().zip(data.iter()) {
        assert!(*b <= *d + 1e-9);
    }
}

#[test]
fn test_peaks_are_removed() {
    let data = two_peak_spectrum(100);
    let background = estimate_background(&data, 1..=15);

    // Under the peak apexes the estimate sits far below the data
    assert!(background[30] < 0.25 * data[30]);
    assert!(background[70] < 0.5 * data[70]);
    // Far from the peaks the baseline is retained
    assert_relative_eq!(background[50], 20.0, max_relative = 0.05);
}

#[test]
fn test_boundaries_preserved() {
    let data = two_peak_spectrum(60);
    let background = estimate_background(&data, 1..=8);

    // Index 0 and n-1 are never inside any update range
    assert_relative_eq!(background[0], data[0], max_relative = 1e-9);
    assert_relative_eq!(background[59], data[59], max_relative = 1e-9);
}

#[test]
fn test_custom_order_sequence() {
    let data = two_peak_spectrum(100);
    let decreasing = estimate_background(&data, (1..=10).rev());
    let increasing = estimate_background(&data, 1..=10);

    assert_eq!(decreasing.len(), increasing.len());
    for (d, v) in decreasing.iter().zip(data.iter()) {
        assert!(*d <= *v + 1e-9);
    }
}

#[test]
fn test_oversized_orders_leave_data_unchanged() {
    let data = [5.0, 1.0, 9.0, 2.0];
    let compressed = compress(&data);
    assert_eq!(clip_compressed(&compressed, [2, 3, 50]), compressed);
}

#[test]
fn test_f32_background() {
    let data: Vec<f32> = two_peak_spectrum(80).iter().map(|&v| v as f32).collect();
    let background = estimate_background(&data, 1..=10);
    assert_eq!(background.len(), 80);
    assert!(background.iter().all(|v| v.is_finite()));
    assert!(background[30] < data[30]);
}
