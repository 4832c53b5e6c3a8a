//! Human-readable output of the locally stored entries.

use std::io::Write;

use super::vector::VectorBase;
use super::view::VectorView;
use crate::backend::{RawVector, Scalar};
use crate::config::PrintOptions;
use crate::error::Result;

impl<V: RawVector> VectorBase<V> {
    /// Write the local entries to `out`, followed by an empty line.
    ///
    /// `precision` is the number of digits after the decimal point. With
    /// `across` all entries go on one line separated by spaces, otherwise one
    /// entry per line.
    pub fn print<W: Write + ?Sized>(&self, out: &mut W, precision: usize, scientific: bool, across: bool) -> Result<()> {
        self.print_with(out, &PrintOptions { precision, scientific, across })
    }

    pub fn print_with<W: Write + ?Sized>(&self, out: &mut W, options: &PrintOptions) -> Result<()> {
        out.flush()?;
        let view = VectorView::new(&self.raw)?;
        for &x in view.iter() {
            let s = format_entry(x, options);
            if options.across {
                write!(out, "{} ", s)?;
            } else {
                writeln!(out, "{}", s)?;
            }
        }
        writeln!(out)?;
        view.restore()?;
        out.flush()?;
        Ok(())
    }
}

fn format_entry(x: Scalar, options: &PrintOptions) -> String {
    if !options.scientific {
        return format!("{:.*}", options.precision, x);
    }
    // Rust writes `1.5e3`; use the `1.500e+03` form
    let s = format!("{:.*e}", options.precision, x);
    match s.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => format!("{}e{}{:02}", mantissa, if e < 0 { '-' } else { '+' }, e.abs()),
            Err(_) => s,
        },
        None => s,
    }
}
