//! A [normalized least mean squares](https://en.wikipedia.org/wiki/Least_mean_squares_filter#Normalized_least_mean_squares_filter_(NLMS))
//! (NLMS) adaptive filter, for estimating the impulse response of an unknown
//! linear system from streaming samples. Typical uses are echo cancellation,
//! channel equalization and noise cancellation.
//!
//! Features
//! * Filtering with either a desired signal or an externally measured error signal.
//! * No allocations after construction, suitable for real time use.
//! * Bit-exact reproducible results.
//! * `no_std` compatible (requires `alloc`).
//!
//! # Examples
//!
//! ```
//! use micro_nlms::nlms::NlmsFilter;
//!
//! let mut filter = NlmsFilter::from_options(32, 0.5, 1e-6);
//! # let reference = [0.0f64; 100];
//! # let capture = [0.0f64; 100];
//! for (x, d) in reference.iter().zip(capture.iter()) {
//!     let estimate = filter.run_with_desired(*x, *d);
//!     let cleaned = d - estimate;
//! }
//! ```
//!
//! See the [`nlms`] module for more examples and the [`identification`]
//! module for a convergence test bench.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod common;
pub mod fir;
pub mod identification;
pub mod metrics;
pub mod nlms;
