//! Nearest-neighbour decimation to a fixed length.

/// Source indices picked for `target` outputs out of `n` inputs.
///
/// Index `i` maps to `floor(i * n / target)` clamped to `n - 1`, so the
/// sequence is non-decreasing and starts at 0.  When `n <= target` (or
/// `target == 0`) every index is kept.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn sample_indices(n: usize, target: usize) -> impl Iterator<Item = usize> {
    let keep_all = target == 0 || n <= target;
    let count = if keep_all { n } else { target };
    let stride = if keep_all { 1.0 } else { n as f64 / target as f64 };
    (0..count).map(move |i| ((i as f64 * stride) as usize).min(n.saturating_sub(1)))
}

/// Reduce `values` to at most `target` samples.  Shorter input passes
/// through unchanged; `target == 0` means "no limit".
#[must_use]
pub fn downsample(values: &[f64], target: usize) -> Vec<f64> {
    sample_indices(values.len(), target)
        .map(|i| values[i])
        .collect()
}
