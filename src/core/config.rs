//! Per-call display parameters + fluent builder.

use std::borrow::Cow;

use crate::core::{
    color::Rgb,
    constants::{ASCII, BLOCKS, DEFAULT_LENGTH, EIGHTHS, SHADES},
    error::ConfigError,
};

/// Ordered glyphs of increasing intensity.  Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette(Cow<'static, [char]>);

impl Palette {
    pub const BLOCKS: Self = Self(Cow::Borrowed(BLOCKS));
    pub const EIGHTHS: Self = Self(Cow::Borrowed(EIGHTHS));
    pub const SHADES: Self = Self(Cow::Borrowed(SHADES));
    pub const ASCII: Self = Self(Cow::Borrowed(ASCII));

    /// Every built-in palette with its name.
    pub const NAMED: [(&'static str, Self); 4] = [
        ("blocks", Self::BLOCKS),
        ("eighths", Self::EIGHTHS),
        ("shades", Self::SHADES),
        ("ascii", Self::ASCII),
    ];

    /// # Errors
    ///
    /// [`ConfigError::EmptyPalette`] for an empty `glyphs`.
    pub fn custom(glyphs: Vec<char>) -> Result<Self, ConfigError> {
        if glyphs.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self(Cow::Owned(glyphs)))
    }

    /// Built-in palette by name, otherwise the string's own characters.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyPalette`] for an empty string.
    pub fn from_name(s: &str) -> Result<Self, ConfigError> {
        let key = s.trim().to_ascii_lowercase();
        match Self::NAMED.iter().find(|(name, _)| *name == key) {
            Some((_, p)) => Ok(p.clone()),
            None => Self::custom(s.chars().collect()),
        }
    }

    #[inline]
    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::BLOCKS
    }
}

/// Immutable parameters handed to every renderer.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output width in glyphs.
    pub length: usize,
    /// Appended after a single space; empty means none.
    pub label: String,
    /// Explicit heat-map range; `None` means derive from the samples.
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Full hue sweep instead of the single-hue ramp.
    pub rainbow: bool,
    pub palette: Palette,
    /// Plain foreground for the glyph run of line, gauge and pie charts.
    pub color: Option<Rgb>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// `" label"` or nothing.
    #[inline]
    pub(crate) fn label_suffix(&self) -> String {
        if self.label.is_empty() {
            String::new()
        } else {
            format!(" {}", self.label)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            label: String::new(),
            min: None,
            max: None,
            rainbow: false,
            palette: Palette::default(),
            color: None,
        }
    }
}

/// Fluent builder; validation happens once in `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    length: Option<usize>,
    label: Option<String>,
    min: Option<f64>,
    max: Option<f64>,
    rainbow: bool,
    palette: Option<Palette>,
    color: Option<Rgb>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn length(mut self, n: usize) -> Self {
        self.length = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn label(mut self, l: impl Into<String>) -> Self {
        self.label = Some(l.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn label_opt(mut self, l: Option<&str>) -> Self {
        if let Some(t) = l {
            self.label = Some(t.to_owned());
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn min(mut self, v: f64) -> Self {
        self.min = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn max(mut self, v: f64) -> Self {
        self.max = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn min_opt(mut self, v: Option<f64>) -> Self {
        self.min = v.or(self.min);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_opt(mut self, v: Option<f64>) -> Self {
        self.max = v.or(self.max);
        self
    }
    #[inline]
    #[must_use]
    pub fn range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.min = Some(*r.start());
        self.max = Some(*r.end());
        self
    }
    #[inline]
    #[must_use]
    pub fn rainbow(mut self, on: bool) -> Self {
        self.rainbow = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn palette(mut self, p: Palette) -> Self {
        self.palette = Some(p);
        self
    }
    #[inline]
    #[must_use]
    pub fn color(mut self, c: Rgb) -> Self {
        self.color = Some(c);
        self
    }
    #[inline]
    #[must_use]
    pub fn color_opt(mut self, c: Option<Rgb>) -> Self {
        self.color = c.or(self.color);
        self
    }

    /// Freeze the parameters.  The palette needs no check here since a
    /// [`Palette`] is never empty.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NonFiniteBound`] when `min` or `max` is NaN or infinite.
    pub fn build(self) -> Result<Config, ConfigError> {
        for (field, bound) in [("min", self.min), ("max", self.max)] {
            if let Some(value) = bound.filter(|v| !v.is_finite()) {
                return Err(ConfigError::NonFiniteBound { field, value });
            }
        }
        Ok(Config {
            length: self.length.unwrap_or(DEFAULT_LENGTH),
            label: self.label.unwrap_or_default(),
            min: self.min,
            max: self.max,
            rainbow: self.rainbow,
            palette: self.palette.unwrap_or_default(),
            color: self.color,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
