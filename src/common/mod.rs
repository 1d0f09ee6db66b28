//! Common algorithms and utilities.

mod f64_array_ext;
mod ring_buffer;

pub use f64_array_ext::F64ArrayExt;
pub use ring_buffer::RingBuffer;
