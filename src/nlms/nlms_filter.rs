use alloc::{boxed::Box, vec};

use crate::common::{F64ArrayExt, RingBuffer};
use crate::fir::convolve_oldest_first;
use crate::nlms::config::{ConfigError, FilterConfig};

/// An adaptive [normalized least mean squares filter](https://en.wikipedia.org/wiki/Least_mean_squares_filter#Normalized_least_mean_squares_filter_(NLMS)).
///
/// Memory is only allocated on construction. All processing methods operate
/// in place on the filter's own buffers.
#[derive(Clone, Debug)]
pub struct NlmsFilter {
    config: FilterConfig,
    /// FIR filter coefficients. `weights[k]` is applied to the input sample
    /// `k` steps older than the most recent one.
    weights: Box<[f64]>,
    /// Most recent input values.
    history: RingBuffer,
    /// Error of the most recent update.
    last_error: f64,
}

impl NlmsFilter {
    /// Creates a filter with `length` taps and default step size and regularization.
    pub fn new(length: usize) -> Self {
        NlmsFilter::from_options(
            length,
            FilterConfig::DEFAULT_STEP_SIZE,
            FilterConfig::DEFAULT_REGULARIZATION,
        )
    }

    pub fn from_options(length: usize, step_size: f64, regularization: f64) -> Self {
        NlmsFilter::from_config(FilterConfig::new(length, step_size, regularization))
    }

    /// Creates a filter with zero weights and history.
    ///
    /// Panics if the configuration is invalid.
    pub fn from_config(config: FilterConfig) -> Self {
        match NlmsFilter::try_from_config(config) {
            Ok(filter) => filter,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_from_config(config: FilterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        trace_created(&config, "created NLMS filter");
        Ok(NlmsFilter {
            config,
            weights: vec![0.0; config.length].into_boxed_slice(),
            history: RingBuffer::new(config.length),
            last_error: 0.0,
        })
    }

    /// Creates a filter with caller provided initial weights and history.
    /// The write position starts at 0, so `history[0]` is the first sample
    /// to be overwritten and is treated as the oldest one.
    ///
    /// Panics if the configuration is invalid or if a slice length differs from
    /// the configured filter length.
    pub fn from_parts(config: FilterConfig, weights: &[f64], history: &[f64]) -> Self {
        match NlmsFilter::try_from_parts(config, weights, history) {
            Ok(filter) => filter,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_from_parts(
        config: FilterConfig,
        weights: &[f64],
        history: &[f64],
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        config.check_length("weights", weights.len())?;
        config.check_length("history samples", history.len())?;
        trace_created(&config, "created NLMS filter from initial state");
        Ok(NlmsFilter {
            config,
            weights: weights.into(),
            history: RingBuffer::from_slice(history),
            last_error: 0.0,
        })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn length(&self) -> usize {
        self.config.length
    }

    pub fn step_size(&self) -> f64 {
        self.config.step_size
    }

    pub fn regularization(&self) -> f64 {
        self.config.regularization
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The input history in storage order.
    pub fn history(&self) -> &[f64] {
        self.history.as_slice()
    }

    /// The error used by the most recent weight update.
    pub fn last_error(&self) -> f64 {
        self.last_error
    }

    /// Filters `input`, then adapts the weights towards `desired`.
    ///
    /// The returned output is computed with the weights as they were before
    /// this call. The error `desired - output` is available from
    /// [`last_error`](Self::last_error) afterwards.
    pub fn run_with_desired(&mut self, input: f64, desired: f64) -> f64 {
        let output = self.filter(input);
        self.last_error = desired - output;
        self.adapt_weights();
        output
    }

    /// Adapts the weights using an externally measured `error`, then filters
    /// `input` with the updated weights.
    ///
    /// This is the reverse order of [`run_with_desired`](Self::run_with_desired):
    /// `error` refers to the previously returned output, so the update uses
    /// the history as it was before `input` is added.
    pub fn run_with_error(&mut self, input: f64, error: f64) -> f64 {
        self.last_error = error;
        self.adapt_weights();
        self.filter(input)
    }

    /// Calls [`run_with_desired`](Self::run_with_desired) for each sample,
    /// writing the outputs to `outputs`. All slices must have the same length.
    pub fn run_block_with_desired(&mut self, inputs: &[f64], desired: &[f64], outputs: &mut [f64]) {
        assert_eq!(
            inputs.len(),
            desired.len(),
            "input and desired blocks must match"
        );
        assert_eq!(
            inputs.len(),
            outputs.len(),
            "output buffer length must match input block"
        );
        for ((x, d), y) in inputs.iter().zip(desired.iter()).zip(outputs.iter_mut()) {
            *y = self.run_with_desired(*x, *d);
        }
    }

    /// Calls [`run_with_error`](Self::run_with_error) for each sample,
    /// writing the outputs to `outputs`. All slices must have the same length.
    pub fn run_block_with_error(&mut self, inputs: &[f64], errors: &[f64], outputs: &mut [f64]) {
        assert_eq!(
            inputs.len(),
            errors.len(),
            "input and error blocks must match"
        );
        assert_eq!(
            inputs.len(),
            outputs.len(),
            "output buffer length must match input block"
        );
        for ((x, e), y) in inputs.iter().zip(errors.iter()).zip(outputs.iter_mut()) {
            *y = self.run_with_error(*x, *e);
        }
    }

    /// Zeroes weights, history and error.
    pub fn reset(&mut self) {
        for weight in self.weights.iter_mut() {
            *weight = 0.0;
        }
        self.history.clear();
        self.last_error = 0.0;
    }

    fn filter(&mut self, input: f64) -> f64 {
        self.history.push(input);
        convolve_oldest_first(&self.weights, &self.history)
    }

    fn adapt_weights(&mut self) {
        // Energy of the whole history, in storage order.
        let energy = self.history.as_slice().squared_norm();
        let normalized_step_size = self.config.step_size / (self.config.regularization + energy);

        // Same tap/sample pairing as the filter output.
        for (weight, sample) in self.weights.iter_mut().rev().zip(self.history.iter()) {
            *weight += normalized_step_size * self.last_error * sample;
        }
    }
}

fn trace_created(config: &FilterConfig, message: &str) {
    tracing::debug!(
        length = config.length,
        step_size = config.step_size,
        regularization = config.regularization,
        "{}",
        message
    );
    if config.step_size < 0.0 || config.step_size >= 2.0 {
        tracing::warn!(
            step_size = config.step_size,
            "step size outside (0, 2), the filter will not converge"
        );
    }
}
