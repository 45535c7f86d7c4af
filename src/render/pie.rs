//! Proportional one-line "pie" (stacked bar) with a legend.

use std::fmt::Write;

use crate::core::{color::colorize, config::Config, constants::PIE_GLYPHS};

/// Negative and non-finite magnitudes count as nothing.
#[inline]
fn magnitude(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Largest-remainder apportionment of `length` cells over `weights`.
///
/// Every slice first gets `floor(weight / total * length)`; leftover cells
/// go one at a time to the largest fractional parts (ties by index,
/// cycling if needed).  The result always sums to `length` when the total
/// weight is positive, and is all zeros otherwise.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn apportion(weights: &[f64], length: usize) -> Vec<usize> {
    let weights: Vec<f64> = weights.iter().copied().map(magnitude).collect();
    let total: f64 = weights.iter().sum();
    if weights.is_empty() || !total.is_finite() || total <= 0.0 {
        return vec![0; weights.len()];
    }

    let raw: Vec<f64> = weights.iter().map(|w| w / total * length as f64).collect();
    let mut cells: Vec<usize> = raw.iter().map(|r| r.floor() as usize).collect();
    let frac = |i: usize| raw[i] - raw[i].floor();

    // stable sort keeps index order among equal fractions
    let mut order: Vec<usize> = (0..raw.len()).collect();
    order.sort_by(|&a, &b| frac(b).total_cmp(&frac(a)));

    let assigned: usize = cells.iter().sum();
    if assigned < length {
        for &i in order.iter().cycle().take(length - assigned) {
            cells[i] += 1;
        }
    } else {
        // float error pushed a floor over; take back from the smallest fractions
        let mut excess = assigned - length;
        for &i in order.iter().rev().cycle() {
            if excess == 0 {
                break;
            }
            if cells[i] > 0 {
                cells[i] -= 1;
                excess -= 1;
            }
        }
    }
    cells
}

/// Render `values` as `cfg.length` slice glyphs followed by
/// `v(p%) … total=<sum>` and the label.
///
/// Empty input or a non-positive total renders as an empty string.
#[must_use]
pub fn pie_chart(values: &[f64], cfg: &Config) -> String {
    let vals: Vec<f64> = values.iter().copied().map(magnitude).collect();
    let total: f64 = vals.iter().sum();
    if vals.is_empty() || !total.is_finite() || total <= 0.0 {
        return String::new();
    }

    let cells = apportion(&vals, cfg.length);
    let slices: String = cells
        .iter()
        .enumerate()
        .flat_map(|(i, &n)| std::iter::repeat_n(PIE_GLYPHS[i % PIE_GLYPHS.len()], n))
        .collect();

    let mut out = match cfg.color {
        Some(c) => colorize(c, &slices),
        None => slices,
    };
    for v in &vals {
        let _ = write!(out, " {v}({:.1}%)", v / total * 100.0);
    }
    let _ = write!(out, " total={total}");
    out.push_str(&cfg.label_suffix());
    out
}
