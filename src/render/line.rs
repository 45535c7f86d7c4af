//! One-line sparkline.

use crate::{
    core::{color::colorize, config::Config},
    render::{downsample::downsample, symbol::value_to_symbol},
};

/// Render `values` as exactly `cfg.length` cells (glyphs, then space
/// padding when the input is shorter), followed by the label if any.
///
/// With `cfg.length == 0` the input is neither reduced nor padded.
#[must_use]
pub fn line_plot(values: &[f64], cfg: &Config) -> String {
    let sampled = downsample(values, cfg.length);
    let glyphs: String = sampled
        .iter()
        .map(|&v| value_to_symbol(v, cfg.palette.glyphs()))
        .collect();

    let mut chart = match cfg.color {
        Some(c) => colorize(c, &glyphs),
        None => glyphs,
    };
    chart.extend(std::iter::repeat_n(' ', cfg.length.saturating_sub(sampled.len())));
    chart.push_str(&cfg.label_suffix());
    chart
}
