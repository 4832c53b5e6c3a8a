//! Options controlling how vectors are written to text streams.
//!
//! This module provides the `PrintOptions` struct consumed by
//! [`VectorBase::print_with`](crate::core::VectorBase::print_with). The defaults
//! write three significant decimals in scientific notation, all entries on one line.

/// Number formatting & layout for printed vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    /// Digits after the decimal point
    pub precision: usize,

    /// Scientific (`1.234e+05`) instead of fixed (`123400.000`) notation
    pub scientific: bool,

    /// Space-separated on one line instead of one entry per line
    pub across: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self { precision: 3, scientific: true, across: true }
    }
}
