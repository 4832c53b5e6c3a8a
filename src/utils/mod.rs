//! Utility kernels shared by the vector adapter.

pub mod strided;
pub use strided::{strided_power_sum, strided_sum};
