//! `[f64]` extensions.

/// `[f64]` extensions.
pub trait F64ArrayExt {
    /// Returns the squared [L2 norm](https://en.wikipedia.org/wiki/Norm_(mathematics)#Euclidean_norm),
    /// i.e. the sum of the squared elements.
    ///
    /// The sum is accumulated strictly left to right, one element at a time.
    /// Filter results depend on this value, so changing the summation order
    /// (pairwise or vectorized reductions, fused multiply-add) changes the
    /// rounding and breaks bit-exact reproducibility.
    fn squared_norm(&self) -> f64;
    /// Returns the maximum absolute value.
    fn peak_level(&self) -> f64;
}

impl F64ArrayExt for [f64] {
    fn squared_norm(&self) -> f64 {
        let mut norm = 0.0;
        for value in self.iter() {
            norm += value * value;
        }
        norm
    }

    fn peak_level(&self) -> f64 {
        let mut max: f64 = 0.0;
        for sample in self.iter() {
            let value = libm::fabs(*sample);
            if value > max {
                max = value
            }
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use super::F64ArrayExt;

    #[test]
    fn test_empty_array() {
        let values: [f64; 0] = [];
        assert!(values.squared_norm() == 0.0);
        assert!(values.peak_level() == 0.0);
    }

    #[test]
    fn test_squared_norm() {
        assert_eq!([1.0, -2.0, 3.0][..].squared_norm(), 14.0);
    }

    #[test]
    fn test_squared_norm_summation_order() {
        // 1e16 + 1 + 1 rounds away both ones when summed left to right.
        let values = [1e8, 1.0, 1.0];
        assert_eq!(values[..].squared_norm(), 1e16);
        let reordered = [1.0, 1.0, 1e8];
        assert_eq!(reordered[..].squared_norm(), 1e16 + 2.0);
    }

    #[test]
    fn test_peak_level() {
        assert_eq!([0.5, -3.0, 2.0][..].peak_level(), 3.0);
    }
}
