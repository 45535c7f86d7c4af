//! Range helpers + terminal size plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::constants::FALLBACK_COLUMNS;

/// Inclusive extrema of the finite values, without padding.
///
/// Falls back to `(0.0, 1.0)` when the slice is empty or holds only
/// non-finite values.
#[must_use]
pub fn finite_range(values: &[f64]) -> (f64, f64) {
    let (low, high) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if low.is_finite() && high.is_finite() {
        (low, high)
    } else {
        (0.0, 1.0)
    }
}

/// Position of `value` inside `[low, high]`, clamped to `[0, 1]`.
///
/// A zero or non-finite span, and a NaN value, all yield `0.0`.
#[inline]
#[must_use]
pub fn unit_ratio(value: f64, low: f64, high: f64) -> f64 {
    let span = high - low;
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    let r = (value - low) / span;
    if r.is_nan() { 0.0 } else { r.clamp(0.0, 1.0) }
}

/// Current terminal width in columns (80 fallback).
#[inline]
#[must_use]
pub fn terminal_columns() -> usize {
    let Width(w) = terminal_size().map_or(Width(FALLBACK_COLUMNS), |(w, _)| w);
    usize::from(w)
}

/// Glyph count that fits `columns` once `reserved` columns of annotation
/// are set aside.  Never less than one.
#[inline]
#[must_use]
pub fn fit_length(columns: usize, reserved: usize) -> usize {
    columns.saturating_sub(reserved).max(1)
}
