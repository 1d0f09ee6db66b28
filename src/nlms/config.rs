#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors detected when validating a filter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("Filter length must be greater than 0")]
    ZeroLength,
    #[error("Regularization must be positive, got {0}")]
    NonPositiveRegularization(f64),
    #[error("Step size must be finite, got {0}")]
    NonFiniteStepSize(f64),
    #[error("Expected {expected} {what}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// NLMS filter options. Fixed for the lifetime of a filter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterConfig {
    /// The step size μ. Larger values track changes faster at the cost of
    /// more steady state error. Stable for 0 < μ < 2.
    pub step_size: f64,
    /// Constant added to the input energy in the update step denominator to
    /// avoid division by zero. Larger values are more robust at low signal
    /// levels but slow down adaptation.
    pub regularization: f64,
    /// The number of taps.
    pub length: usize,
}

impl FilterConfig {
    pub const DEFAULT_STEP_SIZE: f64 = 0.02;
    pub const DEFAULT_REGULARIZATION: f64 = 1e-3;

    pub fn new(length: usize, step_size: f64, regularization: f64) -> Self {
        FilterConfig {
            step_size,
            regularization,
            length,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if !(self.regularization > 0.0) {
            return Err(ConfigError::NonPositiveRegularization(self.regularization));
        }
        if !self.step_size.is_finite() {
            return Err(ConfigError::NonFiniteStepSize(self.step_size));
        }
        Ok(())
    }

    pub(crate) fn check_length(&self, what: &'static str, actual: usize) -> Result<(), ConfigError> {
        if actual != self.length {
            return Err(ConfigError::LengthMismatch {
                what,
                expected: self.length,
                actual,
            });
        }
        Ok(())
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig::new(1, Self::DEFAULT_STEP_SIZE, Self::DEFAULT_REGULARIZATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(FilterConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_length() {
        let config = FilterConfig::new(0, 0.5, 1e-6);
        assert_eq!(config.validate(), Err(ConfigError::ZeroLength));
    }

    #[test]
    fn test_regularization() {
        let zero = FilterConfig::new(4, 0.5, 0.0);
        assert_eq!(
            zero.validate(),
            Err(ConfigError::NonPositiveRegularization(0.0))
        );
        let nan = FilterConfig::new(4, 0.5, f64::NAN);
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::NonPositiveRegularization(_))
        ));
    }

    #[test]
    fn test_step_size() {
        let config = FilterConfig::new(4, f64::INFINITY, 1e-6);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteStepSize(f64::INFINITY))
        );
        // Zero freezes the weights but is otherwise fine.
        assert_eq!(FilterConfig::new(4, 0.0, 1e-6).validate(), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        let error = ConfigError::LengthMismatch {
            what: "weights",
            expected: 3,
            actual: 2,
        };
        assert_eq!(error.to_string(), "Expected 3 weights, got 2");
        assert_eq!(
            ConfigError::ZeroLength.to_string(),
            "Filter length must be greater than 0"
        );
    }
}
