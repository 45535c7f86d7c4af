//! End-to-end checks through the public API.

use cli_chart::{
    Config, Palette, Rgb, SymbolStream, apportion, downsample, gauge_plot, heat_cells, heat_map,
    line_plot, pie_chart, read_values, sine_samples, strip_ansi, value_to_symbol,
};

fn with_length(length: usize) -> Config {
    Config::builder().length(length).build().unwrap()
}

#[test]
fn symbol_always_in_palette() {
    for p in Palette::NAMED.iter().map(|(_, p)| p) {
        for v in [-1e12, -1.0, -0.3, 0.0, 0.49, 1.0, 7.5, f64::NAN, f64::INFINITY] {
            assert!(p.glyphs().contains(&value_to_symbol(v, p.glyphs())));
        }
    }
}

#[test]
fn downsample_is_identity_when_short() {
    let v = sine_samples(37, 1.0);
    assert_eq!(downsample(&v, 37), v);
    assert_eq!(downsample(&v, 100), v);
}

#[test]
fn line_width_ignoring_label() {
    let sine = sine_samples(1000, 4.0);
    for len in [1, 50, 100, 1000, 2000] {
        let cfg = Config::builder().length(len).label("sig").build().unwrap();
        let out = line_plot(&sine, &cfg);
        let body = out.strip_suffix(" sig").unwrap();
        assert_eq!(body.chars().count(), len);
    }
}

#[test]
fn pie_slices_sum_to_length() {
    for len in [1, 3, 64, 100, 333] {
        let cells = apportion(&[10.0, 20.0, 70.0, 0.5, 3.25], len);
        assert_eq!(cells.iter().sum::<usize>(), len);
    }
    assert_eq!(pie_chart(&[], &with_length(100)), "");
    assert_eq!(pie_chart(&[0.0, 0.0], &with_length(100)), "");
}

#[test]
fn pie_default_width() {
    let out = pie_chart(&[10.0, 20.0, 70.0], &Config::default());
    let bar: Vec<char> = out.chars().take_while(|c| *c != ' ').collect();
    assert_eq!(bar.len(), 100);
    assert_eq!(bar.iter().filter(|&&c| c == '█').count(), 10);
    assert_eq!(bar.iter().filter(|&&c| c == '░').count(), 20);
    assert_eq!(bar.iter().filter(|&&c| c == '▓').count(), 70);
    assert!(out.ends_with("total=100"));
}

#[test]
fn gauge_seventy_five_of_hundred() {
    let out = gauge_plot(75.0, 0.0, 100.0, &Config::default());
    let expected = format!("{}{} 75", "█".repeat(75), "░".repeat(25));
    assert_eq!(out, expected);
}

#[test]
fn heat_steps_monotonic() {
    let steps = [1., 1., 1., 1., 2., 2., 2., 3., 3., 3., 4., 4., 4.];
    let cells = heat_cells(&steps, &Config::default());
    assert_eq!(cells.first().unwrap().ratio, 0.0);
    assert_eq!(cells.last().unwrap().ratio, 1.0);
    for (w, pair) in cells.windows(2).zip(steps.windows(2)) {
        if pair[1] > pair[0] {
            assert!(w[1].hue < w[0].hue);
        } else {
            assert_eq!(w[1].hue, w[0].hue);
        }
    }
}

#[test]
fn heat_strip_recovers_solid_run() {
    for n in [1, 13, 99, 100, 450] {
        let v = sine_samples(n, 2.0);
        for rainbow in [false, true] {
            let cfg = Config::builder().rainbow(rainbow).build().unwrap();
            let out = strip_ansi(&heat_map(&v, &cfg));
            assert_eq!(out, "█".repeat(n.min(100)));
        }
    }
}

#[test]
fn heat_rainbow_top_is_red() {
    let cfg = Config::builder().rainbow(true).build().unwrap();
    let out = heat_map(&[0.0, 1.0], &cfg);
    assert!(out.contains(&format!("{}█", Rgb::red())));
    assert!(out.ends_with("\x1b[0m"));
}

#[test]
fn stream_matches_symbols() {
    let v = [0.9, -0.9, 0.1];
    let glyphs: Vec<char> = SymbolStream::new(&v, Palette::BLOCKS.glyphs()).collect();
    let direct: Vec<char> = v
        .iter()
        .map(|&x| value_to_symbol(x, Palette::BLOCKS.glyphs()))
        .collect();
    assert_eq!(glyphs, direct);
}

#[test]
fn ingest_then_render() {
    let values = read_values("t\n-1\n0\n1\n".as_bytes()).unwrap();
    assert_eq!(line_plot(&values, &with_length(4)), "▁▃█ ");
}
