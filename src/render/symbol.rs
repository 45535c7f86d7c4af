//! Scalar in `[-1, 1]` to one palette glyph.

/// Pick the glyph for `value`.
///
/// `value` is clamped to `[-1, 1]` (`NaN` counts as `-1`) and mapped
/// linearly onto the palette, rounding half to even.  An empty palette
/// yields a space.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn value_to_symbol(value: f64, palette: &[char]) -> char {
    let Some(top) = palette.len().checked_sub(1) else {
        return ' ';
    };
    let v = if value.is_nan() { -1.0 } else { value.clamp(-1.0, 1.0) };
    let idx = ((v + 1.0) / 2.0 * top as f64).round_ties_even() as usize;
    palette[idx.min(top)]
}
