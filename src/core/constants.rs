//! A collection of constants.

/// Width (in glyphs) used when the caller does not ask for one.
pub const DEFAULT_LENGTH: usize = 100;

/// Six block heights, low to high.
pub const BLOCKS: &[char] = &['▁', '▂', '▃', '▄', '▅', '█'];
/// All eight block heights.
pub const EIGHTHS: &[char] = &['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
/// Shade ramp starting at blank.
pub const SHADES: &[char] = &[' ', '░', '▒', '▓', '█'];
/// Plain ASCII for terminals without block glyphs.
pub const ASCII: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Gauge glyphs.
pub const GAUGE_FULL: char = '█';
pub const GAUGE_EMPTY: char = '░';

/// Every heat-map cell is a solid block; only its colour varies.
pub const HEAT_GLYPH: char = '█';

/// Hue (degrees) for the single-colour heat map.
pub const MONO_HUE: f64 = 200.0;
/// Hue of the lowest value in a rainbow heat map (blue). The highest is 0° (red).
pub const RAINBOW_HUE_SPAN: f64 = 240.0;
/// Added to `max` when a heat map range collapses to a point.
pub const FLAT_RANGE_EPSILON: f64 = 1e-9;

/// Slice glyphs, cycled by slice index.
pub const PIE_GLYPHS: &[char] = &['█', '░', '▓', '▒', '▌', '▐'];

/// Pause between glyphs of the streaming plot.
pub const DEFAULT_STREAM_DELAY_MS: u64 = 30;

/// Fallback terminal width when stdout is not a tty.
pub const FALLBACK_COLUMNS: u16 = 80;
