//! Performance measures for adaptive filters.

/// Added to values before taking the logarithm, so that [`to_db`] never
/// returns less than -400 dB.
pub const DB_EPSILON: f64 = 1e-40;

/// Converts a power ratio to decibels.
pub fn to_db(value: f64) -> f64 {
    10.0 * libm::log10(DB_EPSILON + value)
}

/// Returns the normalized weight misalignment
/// `||reference - estimate||² / ||reference||²`.
///
/// Both sums are accumulated left to right in a single pass. The result is
/// `NaN` or infinite if `reference` is all zeros.
pub fn misalignment(reference: &[f64], estimate: &[f64]) -> f64 {
    assert_eq!(
        reference.len(),
        estimate.len(),
        "reference and estimate must have the same length"
    );
    let mut difference_norm = 0.0;
    let mut reference_norm = 0.0;
    for (r, e) in reference.iter().zip(estimate.iter()) {
        let difference = r - e;
        difference_norm += difference * difference;
        reference_norm += r * r;
    }
    difference_norm / reference_norm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_db() {
        assert!((to_db(1.0)).abs() < 1e-12);
        assert!((to_db(0.01) + 20.0).abs() < 1e-9);
        assert!((to_db(0.0) + 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_misalignment() {
        let reference = [1.0, -2.0, 2.0];
        assert_eq!(misalignment(&reference, &reference), 0.0);
        assert_eq!(misalignment(&reference, &[0.0; 3]), 1.0);
        // ||(0, 0, 3)||² / 9
        assert_eq!(misalignment(&reference, &[1.0, -2.0, -1.0]), 1.0);
        assert!((misalignment(&reference, &[1.0, -2.0, 1.0]) - 1.0 / 9.0).abs() < 1e-15);
    }

    #[test]
    fn test_zero_reference() {
        assert!(misalignment(&[0.0, 0.0], &[0.0, 0.0]).is_nan());
        assert!(misalignment(&[0.0], &[1.0]).is_infinite());
    }

    #[test]
    #[should_panic]
    fn test_length_mismatch() {
        misalignment(&[1.0, 2.0], &[1.0]);
    }
}
