//! [Normalized least mean squares](https://en.wikipedia.org/wiki/Least_mean_squares_filter#Normalized_least_mean_squares_filter_(NLMS))
//! adaptive filter.
//!
//! Each update filters one input sample x(n) with the current weights w and
//! moves the weights along the gradient of the squared error e(n), normalized
//! by the energy of the input history:
//!
//! ```text
//! y(n) = w · x(n)
//! e(n) = d(n) - y(n)
//! w   += μ / (ε + ||x(n)||²) · e(n) · x(n)
//! ```
//!
//! Results are bit-exact reproducible: the same inputs and initial state
//! always produce the same outputs and weights.
//!
//! # Examples
//! ## Noise cancellation
//!
//! This example uses the same noise signal for x(n) and d(n).
//! The expected result is convergence to an identity filter with all
//! zeros except a 1 at index 0.
//!
//! ```
//! use rand::{rngs::StdRng, Rng, SeedableRng};
//! use micro_nlms::common::F64ArrayExt;
//! use micro_nlms::nlms::NlmsFilter;
//!
//! // Generate noise signal
//! let sample_count = 10000;
//! let mut signal = vec![0.0; sample_count];
//! let mut rng = StdRng::seed_from_u64(123);
//! for i in 0..sample_count {
//!     signal[i] = rng.gen_range(-1.0..=1.0);
//! }
//!
//! // Create filter instance
//! let mut filter = NlmsFilter::from_options(10, 0.5, 0.00001);
//!
//! // Perform filtering
//! for (i, x) in signal.iter().enumerate() {
//!     let d = *x;
//!     filter.run_with_desired(*x, d);
//!
//!     // Give the filter time to converge
//!     if i > 400 {
//!         // The signal should be almost completely cancelled out
//!         assert!(filter.last_error().abs() < 0.001);
//!     }
//! }
//! // The filter should have an identity response.
//! assert!((filter.weights()[0] - 1.0).abs() < 1e-5);
//! assert!(filter.weights()[1..].peak_level() < 1e-5);
//! ```
//!
//! ## Externally measured error
//!
//! When the error is measured after the output has been used, for example
//! acoustically, pass it in with the next input sample.
//!
//! ```
//! use micro_nlms::nlms::{FilterConfig, NlmsFilter};
//!
//! let mut filter = NlmsFilter::from_config(FilterConfig::new(4, 0.5, 1e-6));
//! let mut error = 0.0;
//! for n in 0..100 {
//!     let x = if n % 3 == 0 { 1.0 } else { -0.5 };
//!     let y = filter.run_with_error(x, error);
//!     // The system being modelled just scales its input by 0.5.
//!     error = 0.5 * x - y;
//! }
//! ```

mod config;
mod nlms_filter;

pub use config::{ConfigError, FilterConfig};
pub use nlms_filter::NlmsFilter;
