//! Glyph-at-a-time producer for animated output.
//!
//! Rendering stays pure: the caller owns the clock and decides how long to
//! wait between items.

use crate::render::symbol::value_to_symbol;

/// Yields one palette glyph per input value, without downsampling.
#[derive(Clone)]
pub struct SymbolStream<'a> {
    values: std::slice::Iter<'a, f64>,
    palette: &'a [char],
}

impl<'a> SymbolStream<'a> {
    #[must_use]
    pub fn new(values: &'a [f64], palette: &'a [char]) -> Self {
        Self {
            values: values.iter(),
            palette,
        }
    }
}

impl Iterator for SymbolStream<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        self.values.next().map(|&v| value_to_symbol(v, self.palette))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl ExactSizeIterator for SymbolStream<'_> {}
