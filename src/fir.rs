//! [Finite impulse response](https://en.wikipedia.org/wiki/Finite_impulse_response) filtering
//! over a [`RingBuffer`] sample history.

use alloc::boxed::Box;

use crate::common::RingBuffer;

/// Computes the inner product of `weights` and the samples in `history`.
///
/// The history is walked oldest first while the tap index walks from the last
/// weight down to the first, so `weights[0]` multiplies the newest sample and
/// `weights[k]` the sample `k` steps older. Terms are accumulated in exactly
/// that order.
pub fn convolve_oldest_first(weights: &[f64], history: &RingBuffer) -> f64 {
    debug_assert_eq!(weights.len(), history.len());
    let mut output = 0.0;
    for (weight, sample) in weights.iter().rev().zip(history.iter()) {
        output += weight * sample;
    }
    output
}

/// A FIR filter with fixed coefficients.
///
/// Uses the same tap/sample pairing as [`NlmsFilter`](crate::nlms::NlmsFilter),
/// which makes it suitable as the unknown system in system identification
/// experiments: an adaptive filter that has converged to this filter's
/// weights produces identical output.
#[derive(Clone, Debug)]
pub struct FirFilter {
    weights: Box<[f64]>,
    history: RingBuffer,
}

impl FirFilter {
    pub fn new(weights: &[f64]) -> Self {
        if weights.is_empty() {
            panic!("FIR filter must have at least one weight")
        }
        FirFilter {
            weights: weights.into(),
            history: RingBuffer::new(weights.len()),
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Pushes `input` into the history and returns the new output sample.
    pub fn process(&mut self, input: f64) -> f64 {
        self.history.push(input);
        convolve_oldest_first(&self.weights, &self.history)
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}
