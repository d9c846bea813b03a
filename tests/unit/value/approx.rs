use super::*;

#[test]
fn sum_of_tenths_matches() {
    assert!(nearly_equal_f64(0.1 + 0.2, 0.3));
    assert!(nearly_equal_f32(0.1 + 0.2, 0.3));
}

#[test]
fn opposite_signs_never_match() {
    assert!(!nearly_equal_f64(1.0, -1.0));
    assert!(!nearly_equal_f32(1.0, -1.0));
}

#[test]
fn signed_zeros_match() {
    assert!(nearly_equal_f64(0.0, -0.0));
    assert!(nearly_equal_f32(-0.0, 0.0));
}

#[test]
fn accumulated_sum_differs_from_single_step() {
    let mut sum = 0.0f64;
    for _ in 0..1_000_000 {
        sum += 0.1;
    }
    assert!(!nearly_equal_f64(sum, 0.1));
}

#[test]
fn zero_against_tiny_uses_absolute_floor() {
    assert!(!nearly_equal_f64(0.0, 1e-12));
    assert!(nearly_equal_f64(0.0, f64::MIN_POSITIVE * 1e-10));
}

#[test]
fn nan_and_infinities() {
    assert!(!nearly_equal_f64(f64::NAN, f64::NAN));
    assert!(nearly_equal_f64(f64::INFINITY, f64::INFINITY));
    assert!(!nearly_equal_f64(f64::INFINITY, f64::MAX));
    assert!(!nearly_equal_f32(f32::NAN, 1.0));
}

#[test]
fn single_precision_is_looser() {
    let a = 1.0f64;
    let b = 1.0 + 1e-7;
    assert!(!nearly_equal_f64(a, b));
    assert!(nearly_equal_f32(a as f32, b as f32));
}
