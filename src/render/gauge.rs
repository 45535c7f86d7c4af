//! Horizontal fill gauge.

use crate::core::{
    bounds::unit_ratio,
    color::colorize,
    config::Config,
    constants::{GAUGE_EMPTY, GAUGE_FULL},
};

/// `floor(length * ratio)` full glyphs, the rest empty, then
/// `" <value>"` and the label.
///
/// `min == max` (or a NaN value) renders an empty gauge.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn gauge_plot(value: f64, min: f64, max: f64, cfg: &Config) -> String {
    let ratio = unit_ratio(value, min, max);
    let filled = ((cfg.length as f64 * ratio).floor() as usize).min(cfg.length);

    let mut bar: String = std::iter::repeat_n(GAUGE_FULL, filled)
        .chain(std::iter::repeat_n(GAUGE_EMPTY, cfg.length - filled))
        .collect();
    if let Some(c) = cfg.color {
        bar = colorize(c, &bar);
    }
    format!("{bar} {value}{}", cfg.label_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::{RESET, Rgb};

    fn cfg(length: usize, label: &str) -> Config {
        Config::builder().length(length).label(label).build().unwrap()
    }

    fn split(out: &str) -> (usize, usize) {
        let full = out.chars().take_while(|&c| c == GAUGE_FULL).count();
        let empty = out.chars().skip(full).take_while(|&c| c == GAUGE_EMPTY).count();
        (full, empty)
    }

    #[test]
    fn three_quarters() {
        let out = gauge_plot(75.0, 0.0, 100.0, &cfg(100, "[km/h] test"));
        assert_eq!(split(&out), (75, 25));
        assert!(out.ends_with(" 75 [km/h] test"));
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(split(&gauge_plot(-10.0, 0.0, 1.0, &cfg(10, ""))), (0, 10));
        assert_eq!(split(&gauge_plot(10.0, 0.0, 1.0, &cfg(10, ""))), (10, 0));
    }

    #[test]
    fn floors_partial_cells() {
        assert_eq!(split(&gauge_plot(0.999, 0.0, 1.0, &cfg(10, ""))), (9, 1));
    }

    #[test]
    fn collapsed_range_is_empty_gauge() {
        let out = gauge_plot(5.0, 5.0, 5.0, &cfg(4, ""));
        assert_eq!(out, "░░░░ 5");
        assert_eq!(split(&gauge_plot(9.0, 5.0, 5.0, &cfg(4, ""))), (0, 4));
    }

    #[test]
    fn colour_skipped_without_glyphs() {
        let c = Config::builder().length(0).color(Rgb::red()).build().unwrap();
        assert_eq!(gauge_plot(3.0, 0.0, 10.0, &c), " 3");
        let c = Config::builder().length(2).color(Rgb::red()).build().unwrap();
        assert_eq!(gauge_plot(10.0, 0.0, 10.0, &c), format!("{}██{RESET} 10", Rgb::red()));
    }

    #[test]
    fn nan_value_is_empty_gauge() {
        assert_eq!(split(&gauge_plot(f64::NAN, 0.0, 1.0, &cfg(4, ""))), (0, 4));
    }
}
