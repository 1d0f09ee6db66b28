use alloc::{boxed::Box, vec};
use core::iter::Chain;
use core::slice::Iter;

/// Fixed length circular sample history.
///
/// `position` is the index the next sample is written to. Since the buffer is
/// always full, that is also the index of the oldest sample.
#[derive(Clone, Debug)]
pub struct RingBuffer {
    samples: Box<[f64]>,
    position: usize,
}

impl RingBuffer {
    /// Creates a zero filled buffer holding `length` samples.
    pub fn new(length: usize) -> Self {
        if length == 0 {
            panic!("Ring buffer length must be greater than 0")
        }
        RingBuffer {
            samples: vec![0.0; length].into_boxed_slice(),
            position: 0,
        }
    }

    /// Creates a buffer with the given initial contents. Index 0 is treated
    /// as the oldest sample, i.e. it is the first one to be overwritten.
    pub fn from_slice(samples: &[f64]) -> Self {
        if samples.is_empty() {
            panic!("Ring buffer length must be greater than 0")
        }
        RingBuffer {
            samples: samples.into(),
            position: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The samples in storage order, ignoring the write position.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Overwrites the oldest sample.
    pub fn push(&mut self, sample: f64) {
        self.samples[self.position] = sample;
        self.position += 1;
        if self.position == self.samples.len() {
            self.position = 0;
        }
    }

    /// Iterates over all samples, oldest first. Use `.rev()` to get the
    /// newest sample first.
    pub fn iter(&self) -> Chain<Iter<'_, f64>, Iter<'_, f64>> {
        let (newer, older) = self.samples.split_at(self.position);
        older.iter().chain(newer.iter())
    }

    /// Zeroes all samples and rewinds the write position.
    pub fn clear(&mut self) {
        for sample in self.samples.iter_mut() {
            *sample = 0.0;
        }
        self.position = 0;
    }
}
