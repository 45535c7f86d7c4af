//! One-line 24-bit colour heat map.
//!
//! Samples are reduced first and the auto range is taken over the reduced
//! set, so a spike skipped by decimation does not stretch the scale.

use std::fmt::Write;

use crate::{
    core::{
        bounds::{finite_range, unit_ratio},
        color::{RESET, Rgb},
        config::Config,
        constants::{FLAT_RANGE_EPSILON, HEAT_GLYPH, MONO_HUE, RAINBOW_HUE_SPAN},
    },
    render::downsample::downsample,
};

/// Colour decision for one sampled value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatCell {
    /// Position inside the range, `[0, 1]`.
    pub ratio: f64,
    /// `(1 - ratio) * 240`: blue for low values, red for high.
    pub hue: f64,
    pub rgb: Rgb,
}

/// Range actually used for `sampled`: explicit bounds win, the rest come
/// from the finite samples; a collapsed range is widened by a tiny epsilon.
#[must_use]
#[allow(clippy::float_cmp)] // only an exactly collapsed range is widened
pub fn heat_range(sampled: &[f64], cfg: &Config) -> (f64, f64) {
    let (auto_lo, auto_hi) = finite_range(sampled);
    let low = cfg.min.unwrap_or(auto_lo);
    let mut high = cfg.max.unwrap_or(auto_hi);
    if high == low {
        high = low + FLAT_RANGE_EPSILON;
    }
    (low, high)
}

/// Per-cell ratio, hue and colour, one entry per sampled value.
#[must_use]
pub fn heat_cells(values: &[f64], cfg: &Config) -> Vec<HeatCell> {
    let sampled = downsample(values, cfg.length);
    let (low, high) = heat_range(&sampled, cfg);

    sampled
        .iter()
        .map(|&v| {
            let ratio = unit_ratio(v, low, high);
            let hue = (1.0 - ratio) * RAINBOW_HUE_SPAN;
            let rgb = if cfg.rainbow {
                Rgb::from_hsv(hue, 1.0, ratio)
            } else {
                Rgb::from_hsv(MONO_HUE, 1.0, ratio)
            };
            HeatCell { ratio, hue, rgb }
        })
        .collect()
}

/// Render `values` as coloured solid blocks terminated by a reset.
/// Empty input renders as an empty string.
#[must_use]
pub fn heat_map(values: &[f64], cfg: &Config) -> String {
    let cells = heat_cells(values, cfg);
    if cells.is_empty() {
        return String::new();
    }

    // "\x1b[38;2;RRR;GGG;BBBm" + 3-byte glyph
    let mut out = String::with_capacity(cells.len() * 22 + RESET.len() + cfg.label.len() + 1);
    for cell in &cells {
        let _ = write!(out, "{}{HEAT_GLYPH}", cell.rgb);
    }
    out.push_str(RESET);
    out.push_str(&cfg.label_suffix());
    out
}
