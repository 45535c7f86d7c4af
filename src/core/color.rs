//! 24-bit ANSI colour: HSV conversion, escape sequences, stripping.

use std::fmt;

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, PartialEq, Eq)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
}

/// A true-colour foreground.  Displays as `ESC[38;2;R;G;Bm`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn orange() -> Self {
        Self::new(255, 100, 0)
    }
    #[must_use]
    pub const fn olive() -> Self {
        Self::new(100, 100, 0)
    }
    #[must_use]
    pub const fn moss() -> Self {
        Self::new(50, 100, 0)
    }
    #[must_use]
    pub const fn amber() -> Self {
        Self::new(255, 200, 0)
    }
    #[must_use]
    pub const fn red() -> Self {
        Self::new(255, 0, 0)
    }
    #[must_use]
    pub const fn green() -> Self {
        Self::new(0, 255, 0)
    }
    #[must_use]
    pub const fn blue() -> Self {
        Self::new(0, 0, 255)
    }
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Standard sextant HSV→RGB.
    ///
    /// * `h` – hue in degrees, reduced modulo 360
    /// * `s`, `v` – saturation and value in `[0, 1]`
    ///
    /// Channels are truncated, not rounded, then clamped to `0..=255`.
    #[must_use]
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h = h.rem_euclid(360.0);
        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Self::new(channel(r + m), channel(g + m), channel(b + m))
    }

    /// Parse colour names or `#rrggbb`.  Falls back to hex parser on miss.
    ///
    /// # Errors
    ///
    /// As [`Rgb::from_hex`] for anything that is not a known name.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orange" => Ok(Self::orange()),
            "olive" => Ok(Self::olive()),
            "moss" => Ok(Self::moss()),
            "amber" => Ok(Self::amber()),
            "red" => Ok(Self::red()),
            "green" => Ok(Self::green()),
            "blue" => Ok(Self::blue()),
            "white" => Ok(Self::white()),
            _ => Self::from_hex(s),
        }
    }

    /// `#rrggbb` or `rrggbb`.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHexLength`] unless exactly six ASCII characters
    /// remain, [`ColorError::InvalidHexDigit`] for a non-hex digit.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::new(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(unit: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    (unit * 255.0).clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Wrap `text` in colour + reset sequence.  Empty text stays empty.
#[inline]
#[must_use]
pub fn colorize(c: Rgb, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("{c}{text}{RESET}")
}

/// Drop every `ESC[ … m` sequence, leaving the printable text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
        }
    }
}
impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_primaries() {
        assert_eq!(Rgb::from_hsv(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hsv(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hsv(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::from_hsv(360.0, 1.0, 1.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn hsv_zero_value_is_black() {
        for h in [0.0, 90.0, 200.0, 300.0] {
            assert_eq!(Rgb::from_hsv(h, 1.0, 0.0), Rgb::new(0, 0, 0));
        }
    }

    #[test]
    fn hsv_truncates_channels() {
        // 0.5 * 255 = 127.5
        assert_eq!(Rgb::from_hsv(0.0, 0.0, 0.5), Rgb::new(127, 127, 127));
    }

    #[test]
    fn escape_format() {
        assert_eq!(Rgb::new(1, 22, 255).to_string(), "\x1b[38;2;1;22;255m");
        assert_eq!(colorize(Rgb::red(), "x"), "\x1b[38;2;255;0;0mx\x1b[0m");
        assert_eq!(colorize(Rgb::red(), ""), "");
    }

    #[test]
    fn names_and_hex() {
        assert_eq!(Rgb::from_name(" Orange "), Ok(Rgb::orange()));
        assert_eq!(Rgb::from_name("#0a0B0c"), Ok(Rgb::new(10, 11, 12)));
        assert_eq!(Rgb::from_name("#12345"), Err(ColorError::InvalidHexLength));
        assert_eq!(Rgb::from_hex("zz0000"), Err(ColorError::InvalidHexDigit));
    }

    #[test]
    fn strip_removes_only_escapes() {
        let s = format!("{}█{}█{RESET} tail", Rgb::red(), Rgb::blue());
        assert_eq!(strip_ansi(&s), "██ tail");
        assert_eq!(strip_ansi("plain"), "plain");
    }
}
