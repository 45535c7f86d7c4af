//! Public-facing crate root – re-exports + one-shot helper.
//!
//! Every renderer is a pure function of its inputs and a [`Config`]; the
//! returned string is ready to print.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{ColorError, RESET, Rgb, colorize, strip_ansi},
    config::{Config, ConfigBuilder, Palette},
    constants::DEFAULT_LENGTH,
    data::{ParseError, read_samples, read_samples_from_path, read_values, sine_samples},
    error::{ChartError, ConfigError},
};

pub use crate::render::{
    HeatCell, SymbolStream, apportion, downsample, gauge_plot, heat_cells, heat_map, line_plot,
    pie_chart, value_to_symbol,
};

/// Convenience function: print a sparkline of `values` at the default
/// width, with `label` after it.
///
/// # Errors
///
/// [`ChartError::Io`] when stdout cannot be written.
pub fn plot_line(values: &[f64], label: &str) -> Result<(), ChartError> {
    use std::io::Write;

    let cfg = Config::builder().label(label).build()?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", line_plot(values, &cfg))?;
    Ok(())
}
