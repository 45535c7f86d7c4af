use clap::{Args, Parser, Subcommand};

use crate::core::constants::{DEFAULT_LENGTH, DEFAULT_STREAM_DELAY_MS};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "cli-chart",
    about = "Sparklines, heat maps, gauges and pie charts for the terminal"
)]
pub struct Cli {
    /// Emit timing diagnostics on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Without a subcommand the demonstration is printed
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print one of every chart kind
    Demo,
    /// Sparkline of values in [-1, 1]
    Line(LineArgs),
    /// True-colour heat map
    Heat(HeatArgs),
    /// Fill gauge for a single value
    Gauge(GaugeArgs),
    /// Proportional slices with legend
    Pie(PieArgs),
    /// Print a sparkline glyph by glyph
    Stream(StreamArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Show the built-in palettes
    Palettes,
    /// Print example invocations
    Examples,
}

/// Where the numbers come from.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Values to plot; read from `--file` when omitted
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Numbers file (use `-` for stdin)
    #[arg(short, long, default_value = "-")]
    pub file: String,
}

/// Width and annotation shared by every chart.
#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Output width in glyphs
    #[arg(short = 'n', long, default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Fit the chart to the terminal width (overrides --length)
    #[arg(long)]
    pub fit: bool,

    /// Text printed after the chart
    #[arg(short, long)]
    pub label: Option<String>,
}

/// `cli-chart line …`
#[derive(Args, Debug)]
pub struct LineArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Palette name (blocks, eighths, shades, ascii) or literal glyphs
    #[arg(short, long, default_value = "blocks")]
    pub palette: String,

    /// Color (name or `#RRGGBB`)
    #[arg(long)]
    pub color: Option<String>,
}

/// `cli-chart heat …`
#[derive(Args, Debug)]
pub struct HeatArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Lower bound (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,
    /// Upper bound (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Blue-to-red hue sweep instead of a single-hue ramp
    #[arg(long)]
    pub rainbow: bool,

    /// Strip colour escapes (shows the bare glyph run)
    #[arg(long)]
    pub plain: bool,
}

/// `cli-chart gauge …`
#[derive(Args, Debug)]
pub struct GaugeArgs {
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub value: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub min: f64,
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub max: f64,

    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Color (name or `#RRGGBB`)
    #[arg(long)]
    pub color: Option<String>,
}

/// `cli-chart pie …`
#[derive(Args, Debug)]
pub struct PieArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Color (name or `#RRGGBB`)
    #[arg(long)]
    pub color: Option<String>,
}

/// `cli-chart stream …`
#[derive(Args, Debug)]
pub struct StreamArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Palette name (blocks, eighths, shades, ascii) or literal glyphs
    #[arg(short, long, default_value = "blocks")]
    pub palette: String,

    /// Pause between glyphs
    #[arg(long, default_value_t = DEFAULT_STREAM_DELAY_MS)]
    pub delay_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_demo() {
        let cli = Cli::try_parse_from(["cli-chart"]).unwrap();
        assert!(cli.cmd.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn negative_values_are_positional() {
        let cli = Cli::try_parse_from(["cli-chart", "line", "-0.5", "1", "--length", "8"]).unwrap();
        let Some(Command::Line(a)) = cli.cmd else {
            panic!("expected line");
        };
        assert_eq!(a.input.values, vec![-0.5, 1.0]);
        assert_eq!(a.layout.length, 8);
        assert_eq!(a.palette, "blocks");
    }

    #[test]
    fn gauge_bounds() {
        let cli = Cli::try_parse_from([
            "cli-chart", "--debug", "gauge", "75", "--min", "-10", "--max", "90", "-l", "km/h",
        ])
        .unwrap();
        assert!(cli.debug);
        let Some(Command::Gauge(a)) = cli.cmd else {
            panic!("expected gauge");
        };
        assert_eq!((a.value, a.min, a.max), (75.0, -10.0, 90.0));
        assert_eq!(a.layout.label.as_deref(), Some("km/h"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
