//! [System identification](https://en.wikipedia.org/wiki/System_identification)
//! test bench.
//!
//! Feeds the same input to a fixed reference FIR filter (the "unknown"
//! system) and to an [`NlmsFilter`], using the reference output as the desired
//! signal, and tracks how well the adaptive filter has identified the
//! reference weights.
//!
//! The input signal is supplied by the caller, which keeps random number
//! generation out of this crate.
//!
//! ```
//! use rand::{rngs::StdRng, Rng, SeedableRng};
//! use micro_nlms::identification::{PassThresholds, SystemIdentification};
//! use micro_nlms::nlms::FilterConfig;
//!
//! let mut rng = StdRng::seed_from_u64(824);
//! let reference: Vec<f64> = (0..8).map(|_| rng.gen_range(-1.0..1.0)).collect();
//! let mut bench = SystemIdentification::new(&reference, FilterConfig::new(8, 0.5, 1e-10));
//!
//! let inputs = (0..2000).map(|_| rng.gen_range(-1.0..1.0));
//! bench.run(inputs, |metrics| {
//!     if metrics.iteration % 500 == 0 {
//!         println!("{}: misalignment {:.1} dB", metrics.iteration, metrics.misalignment_db);
//!     }
//! });
//! let thresholds = PassThresholds {
//!     misalignment_db: -200.0,
//!     squared_error_db: -200.0,
//! };
//! assert!(bench.verdict(&thresholds).passed());
//! ```

use crate::fir::FirFilter;
use crate::metrics::{misalignment, to_db};
use crate::nlms::{ConfigError, FilterConfig, NlmsFilter};

/// The largest final metric values, in dB, that count as a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassThresholds {
    pub misalignment_db: f64,
    pub squared_error_db: f64,
}

impl Default for PassThresholds {
    fn default() -> Self {
        PassThresholds {
            misalignment_db: -290.0,
            squared_error_db: -290.0,
        }
    }
}

/// Measurements taken after one update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationMetrics {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Adaptive filter output.
    pub output: f64,
    /// Instantaneous squared error in dB.
    pub squared_error_db: f64,
    /// Normalized weight misalignment in dB.
    pub misalignment_db: f64,
}

/// Outcome of comparing the final metrics against [`PassThresholds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub misalignment_passed: bool,
    pub squared_error_passed: bool,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        self.misalignment_passed && self.squared_error_passed
    }
}

pub struct SystemIdentification {
    reference: FirFilter,
    adaptive: NlmsFilter,
    latest: Option<IterationMetrics>,
}

impl SystemIdentification {
    /// Panics if the configuration is invalid or if its length differs from
    /// the number of reference weights.
    pub fn new(reference_weights: &[f64], config: FilterConfig) -> Self {
        match SystemIdentification::try_new(reference_weights, config) {
            Ok(bench) => bench,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_new(reference_weights: &[f64], config: FilterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        config.check_length("reference weights", reference_weights.len())?;
        Ok(SystemIdentification {
            reference: FirFilter::new(reference_weights),
            adaptive: NlmsFilter::try_from_config(config)?,
            latest: None,
        })
    }

    pub fn reference(&self) -> &FirFilter {
        &self.reference
    }

    pub fn adaptive(&self) -> &NlmsFilter {
        &self.adaptive
    }

    /// The metrics of the most recent iteration, if any.
    pub fn latest(&self) -> Option<&IterationMetrics> {
        self.latest.as_ref()
    }

    pub fn step(&mut self, input: f64) -> IterationMetrics {
        let desired = self.reference.process(input);
        let output = self.adaptive.run_with_desired(input, desired);
        let error = self.adaptive.last_error();
        let metrics = IterationMetrics {
            iteration: self.latest.map_or(1, |m| m.iteration + 1),
            output,
            squared_error_db: to_db(error * error),
            misalignment_db: to_db(misalignment(
                self.reference.weights(),
                self.adaptive.weights(),
            )),
        };
        self.latest = Some(metrics);
        metrics
    }

    /// Calls [`step`](Self::step) for every input sample, passing the
    /// resulting metrics to `handler`.
    pub fn run<I, F>(&mut self, inputs: I, mut handler: F)
    where
        I: IntoIterator<Item = f64>,
        F: FnMut(&IterationMetrics),
    {
        for input in inputs {
            let metrics = self.step(input);
            handler(&metrics);
        }
    }

    /// Compares the metrics of the most recent iteration with `thresholds`.
    /// A metric fails if it is above its threshold or `NaN`. Fails if no
    /// iterations have been run.
    pub fn verdict(&self, thresholds: &PassThresholds) -> Verdict {
        match self.latest {
            Some(metrics) => {
                let verdict = Verdict {
                    misalignment_passed: metrics.misalignment_db <= thresholds.misalignment_db,
                    squared_error_passed: metrics.squared_error_db <= thresholds.squared_error_db,
                };
                tracing::info!(
                    iteration = metrics.iteration,
                    misalignment_db = metrics.misalignment_db,
                    squared_error_db = metrics.squared_error_db,
                    passed = verdict.passed(),
                    "system identification verdict"
                );
                verdict
            }
            None => Verdict {
                misalignment_passed: false,
                squared_error_passed: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_weights(rng: &mut StdRng, count: usize) -> Vec<f64> {
        (0..count).map(|_| rng.gen_range(-1.0..1.0)).collect()
    }

    #[test]
    fn test_converges_to_reference() {
        // 30 taps, μ = 0.3, 5000 iterations.
        let mut rng = StdRng::seed_from_u64(824);
        let reference = random_weights(&mut rng, 30);
        let mut bench = SystemIdentification::new(&reference, FilterConfig::new(30, 0.3, 1e-10));

        let mut first = None;
        let inputs: Vec<f64> = (0..5000).map(|_| rng.gen_range(-1.0..1.0)).collect();
        bench.run(inputs, |metrics| {
            if first.is_none() {
                first = Some(*metrics);
            }
        });

        let first = first.unwrap();
        let last = *bench.latest().unwrap();
        assert_eq!(first.iteration, 1);
        assert_eq!(last.iteration, 5000);
        assert!(first.misalignment_db > -3.0);
        assert!(last.misalignment_db < -200.0);
        assert!(last.squared_error_db < -200.0);

        let thresholds = PassThresholds {
            misalignment_db: -200.0,
            squared_error_db: -200.0,
        };
        assert!(bench.verdict(&thresholds).passed());
        assert!(bench.verdict(&PassThresholds::default()).passed());
    }

    #[test]
    fn test_too_few_iterations_fail() {
        let mut rng = StdRng::seed_from_u64(1);
        let reference = random_weights(&mut rng, 16);
        let mut bench = SystemIdentification::new(&reference, FilterConfig::new(16, 0.3, 1e-10));
        for _ in 0..20 {
            bench.step(rng.gen_range(-1.0..1.0));
        }
        let verdict = bench.verdict(&PassThresholds::default());
        assert!(!verdict.misalignment_passed);
        assert!(!verdict.passed());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut bench = SystemIdentification::new(&[1.0], FilterConfig::new(1, 0.5, 1e-10));
        let metrics = bench.step(0.0);
        // Zero input: no error and no adaptation, the weights are still all wrong.
        assert_eq!(metrics.misalignment_db, to_db(1.0));
        assert_eq!(metrics.squared_error_db, to_db(0.0));
        let thresholds = PassThresholds {
            misalignment_db: to_db(1.0),
            squared_error_db: to_db(0.0),
        };
        let verdict = bench.verdict(&thresholds);
        assert!(verdict.misalignment_passed);
        assert!(verdict.squared_error_passed);
    }

    #[test]
    fn test_no_iterations_fail() {
        let bench = SystemIdentification::new(&[1.0, 0.5], FilterConfig::new(2, 0.5, 1e-10));
        assert!(bench.latest().is_none());
        assert!(!bench.verdict(&PassThresholds::default()).passed());
    }

    #[test]
    fn test_length_mismatch() {
        let result = SystemIdentification::try_new(&[1.0, 0.5], FilterConfig::new(3, 0.5, 1e-10));
        assert!(matches!(
            result.err(),
            Some(ConfigError::LengthMismatch {
                expected: 3,
                actual: 2,
                ..
            })
        ));
    }
}
