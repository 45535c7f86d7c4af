use std::{
    io::{Write, stdout},
    thread,
    time::{Duration, Instant},
};

use crate::{
    core::{
        bounds::{fit_length, terminal_columns},
        color::{Rgb, colorize, strip_ansi},
        config::{Config, ConfigBuilder, Palette},
        data::{ramp, read_samples_from_path, sine_samples},
        error::ChartError,
    },
    render::{SymbolStream, gauge_plot, heat_map, line_plot, pie_chart},
};

use super::parse::{GaugeArgs, HeatArgs, InputArgs, LayoutArgs, LineArgs, PieArgs, StreamArgs};

// --- Helpers ---

/// Positional values win; otherwise read `--file`.
fn load(input: &InputArgs, debug: bool) -> Result<Vec<f64>, ChartError> {
    if !input.values.is_empty() {
        return Ok(input.values.clone());
    }
    let t_ingest = Instant::now();
    let values = read_samples_from_path(&input.file)?;
    if debug {
        eprintln!(
            "ingest: {} µs   ({} values from {})",
            t_ingest.elapsed().as_micros(),
            values.len(),
            input.file
        );
    }
    Ok(values)
}

fn parse_color(c: Option<&str>) -> Result<Option<Rgb>, ChartError> {
    c.map(Rgb::from_name).transpose().map_err(ChartError::from)
}

/// Base builder for `layout`; `annotation` is how many columns the text
/// after the glyph run needs when `--fit` is on.
fn builder(layout: &LayoutArgs, annotation: usize) -> ConfigBuilder {
    let length = if layout.fit {
        fit_length(terminal_columns(), annotation)
    } else {
        layout.length
    };
    Config::builder()
        .length(length)
        .label_opt(layout.label.as_deref())
}

/// Columns taken by `" label"`.
fn label_width(layout: &LayoutArgs) -> usize {
    layout.label.as_ref().map_or(0, |l| l.chars().count() + 1)
}

/// Print `render()` and, with `--debug`, how long it took.
fn emit(what: &str, debug: bool, render: impl FnOnce() -> String) {
    let t_render = Instant::now();
    let out = render();
    let dur_render = t_render.elapsed().as_micros();
    println!("{out}");
    if debug {
        eprintln!("{what} render: {dur_render} µs   ({} bytes)", out.len());
    }
}

// --- Charts ---

pub fn line(a: &LineArgs, debug: bool) -> Result<(), ChartError> {
    let values = load(&a.input, debug)?;
    let cfg = builder(&a.layout, label_width(&a.layout))
        .palette(Palette::from_name(&a.palette)?)
        .color_opt(parse_color(a.color.as_deref())?)
        .build()?;
    emit("line", debug, || line_plot(&values, &cfg));
    Ok(())
}

pub fn heat(a: &HeatArgs, debug: bool) -> Result<(), ChartError> {
    let values = load(&a.input, debug)?;
    let cfg = builder(&a.layout, label_width(&a.layout))
        .min_opt(a.min)
        .max_opt(a.max)
        .rainbow(a.rainbow)
        .build()?;
    emit("heat", debug, || {
        let out = heat_map(&values, &cfg);
        if a.plain { strip_ansi(&out) } else { out }
    });
    Ok(())
}

pub fn gauge(a: &GaugeArgs, debug: bool) -> Result<(), ChartError> {
    let color = parse_color(a.color.as_deref())?;
    // zero-width gauge is exactly the annotation
    let bare = builder(&a.layout, 0).length(0).build()?;
    let annotation = gauge_plot(a.value, a.min, a.max, &bare).chars().count();

    let cfg = builder(&a.layout, annotation).color_opt(color).build()?;
    emit("gauge", debug, || gauge_plot(a.value, a.min, a.max, &cfg));
    Ok(())
}

pub fn pie(a: &PieArgs, debug: bool) -> Result<(), ChartError> {
    let values = load(&a.input, debug)?;
    let color = parse_color(a.color.as_deref())?;
    // zero-width pie is exactly the legend
    let bare = builder(&a.layout, 0).length(0).build()?;
    let annotation = pie_chart(&values, &bare).chars().count();

    let cfg = builder(&a.layout, annotation).color_opt(color).build()?;
    emit("pie", debug, || pie_chart(&values, &cfg));
    Ok(())
}

/// Glyph-by-glyph sparkline; the pause lives here, not in the renderer.
pub fn stream(a: &StreamArgs, debug: bool) -> Result<(), ChartError> {
    let values = load(&a.input, debug)?;
    let palette = Palette::from_name(&a.palette)?;
    let pause = Duration::from_millis(a.delay_ms);

    let started = Instant::now();
    let mut term = stdout().lock();
    for glyph in SymbolStream::new(&values, palette.glyphs()) {
        write!(term, "{glyph}")?;
        term.flush()?;
        thread::sleep(pause);
    }
    writeln!(term)?;

    if debug {
        eprintln!(
            "stream: {} glyphs in {} ms",
            values.len(),
            started.elapsed().as_millis()
        );
    }
    Ok(())
}

// --- Fixed output ---

/// One of every chart with its caption, written to `out`.
pub fn demo(out: &mut impl Write, debug: bool) -> Result<(), ChartError> {
    let t_demo = Instant::now();
    let sine = sine_samples(100, 3.0);
    let steps = [1., 1., 1., 1., 2., 2., 2., 3., 3., 3., 4., 4., 4.];

    let plain = Config::default();
    let pie_cfg = Config::builder().label("pie-label").build()?;
    let gauge_cfg = Config::builder().label("[km/h] test").build()?;
    let rainbow = Config::builder().rainbow(true).build()?;

    writeln!(out, "Pie chart:")?;
    writeln!(out, "{}", pie_chart(&[10.0, 20.0, 70.0], &pie_cfg))?;
    writeln!(out, "Gauge plot:")?;
    writeln!(out, "{}", gauge_plot(75.0, 0.0, 100.0, &gauge_cfg))?;
    writeln!(out, "Line plot:")?;
    writeln!(out, "{}", line_plot(&sine, &plain))?;
    writeln!(out, "heatmap:")?;
    writeln!(out, "{}", heat_map(&sine, &plain))?;
    writeln!(out, "{}", heat_map(&steps, &plain))?;
    writeln!(out, "rainbow heatmap:")?;
    writeln!(out, "{}", heat_map(&sine, &rainbow))?;
    out.flush()?;

    if debug {
        eprintln!("demo: {} µs", t_demo.elapsed().as_micros());
    }
    Ok(())
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for (name, c) in [
        ("orange", Rgb::orange()),
        ("olive", Rgb::olive()),
        ("moss", Rgb::moss()),
        ("amber", Rgb::amber()),
        ("red", Rgb::red()),
        ("green", Rgb::green()),
        ("blue", Rgb::blue()),
        ("white", Rgb::white()),
    ] {
        println!("{} {}", colorize(c, "███"), colorize(c, name));
    }
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(Rgb::new(0x50, 0x50, 0x50), "#505050")
    );
}

/// Each built-in palette drawn as a rising ramp.
pub fn palettes() {
    println!("\nBuilt-in palettes:");
    for (name, p) in &Palette::NAMED {
        let width = p.glyphs().len() * 4;
        let cfg = Config {
            length: width,
            label: (*name).to_owned(),
            palette: p.clone(),
            ..Config::default()
        };
        println!("{}", line_plot(&ramp(width), &cfg));
    }
    println!("Any other --palette string is used glyph by glyph, lowest first.\n");
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run --"; // adjust if you rename the binary
    println!(
        "
Example invocations
-------------------
• Demonstration    : {bin}
• Sparkline        : {bin} line -1 -0.5 0 0.5 1 --label ramp
• From a file      : {bin} line --file samples.txt --fit
• Heat map         : {bin} heat 1 1 2 3 5 8 13 --rainbow
• Fixed heat range : {bin} heat --file temps.csv --min -10 --max 40
• Gauge            : {bin} gauge 75 --min 0 --max 100 --label km/h
• Pie chart        : {bin} pie 10 20 70 --label share --color amber
• Streaming        : {bin} stream --file samples.txt --delay-ms 20
"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::RESET;

    fn demo_lines() -> Vec<String> {
        let mut buf = Vec::<u8>::new();
        demo(&mut buf, false).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn demo_captions_in_order() {
        let lines = demo_lines();
        assert_eq!(lines.len(), 11);
        let captions: Vec<&str> = [0, 2, 4, 6, 9].iter().map(|&i| lines[i].as_str()).collect();
        assert_eq!(
            captions,
            ["Pie chart:", "Gauge plot:", "Line plot:", "heatmap:", "rainbow heatmap:"]
        );
    }

    #[test]
    fn demo_charts() {
        let lines = demo_lines();
        assert!(lines[1].ends_with("10(10.0%) 20(20.0%) 70(70.0%) total=100 pie-label"));
        assert!(lines[3].ends_with(" 75 [km/h] test"));
        assert_eq!(lines[5].chars().count(), 100);

        // sine heat map first, then the 13-step one, then rainbow
        let sine = sine_samples(100, 3.0);
        assert_eq!(lines[7], heat_map(&sine, &Config::default()));
        assert_eq!(strip_ansi(&lines[8]), "█".repeat(13));
        assert!(lines[10].ends_with(RESET));
        assert_ne!(lines[10], lines[7]);
    }

    #[test]
    fn empty_file_input_is_empty_data() {
        let path = std::env::temp_dir().join(format!("cli-chart-empty-{}.txt", std::process::id()));
        std::fs::write(&path, "# nothing here\n").unwrap();
        let input = InputArgs {
            values: Vec::new(),
            file: path.to_string_lossy().into_owned(),
        };
        let res = load(&input, false);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(res, Err(ChartError::EmptyData)));
    }
}
