//! Test assertion helpers
//!
//! Money and ratio values come out of floating-point arithmetic; compare
//! them with a tolerance instead of `assert_eq!`.

/// Assert that two floating-point values are approximately equal
///
/// # Examples
///
/// ```
/// # use broker_roi_tests::assertions::assert_approx_eq;
/// assert_approx_eq(metrics.net_savings, 200_000.0, 1e-6);
/// ```
#[allow(dead_code)]
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Float values not approximately equal:\n  actual: {}\n  expected: {}\n  diff: {} (epsilon: {})",
        actual, expected, diff, epsilon
    );
}

/// Assert that a currency amount matches to the cent
#[allow(dead_code)]
pub fn assert_money_eq(actual: f64, expected: f64) {
    assert_approx_eq(actual, expected, 0.01);
}

/// Assert that a ratio is defined and approximately equal to `expected`
///
/// # Examples
///
/// ```
/// # use broker_roi_tests::assertions::assert_ratio_eq;
/// assert_ratio_eq(metrics.total_roi, 3.0);
/// ```
#[allow(dead_code)]
pub fn assert_ratio_eq(actual: Option<f64>, expected: f64) {
    match actual {
        Some(value) => assert_approx_eq(value, expected, 1e-9),
        None => panic!("Ratio undefined, expected {}", expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq_pass() {
        assert_approx_eq(0.75, 0.75, 0.01);
        assert_approx_eq(0.75, 0.7501, 0.01);
    }

    #[test]
    #[should_panic(expected = "Float values not approximately equal")]
    fn test_assert_approx_eq_fail() {
        assert_approx_eq(0.75, 0.80, 0.01);
    }

    #[test]
    fn test_assert_money_eq_pass() {
        assert_money_eq(200_000.0, 200_000.004);
    }

    #[test]
    #[should_panic(expected = "Ratio undefined")]
    fn test_assert_ratio_eq_undefined() {
        assert_ratio_eq(None, 1.0);
    }
}
