//! Normalisation of accumulated deviations onto a 0–100 scale.

/// Map a sum of squared per-dimension deviations to a percentage of the
/// largest sum attainable when every one of `n` dimensions deviates by
/// `per_dim_bound`.
///
/// `sqrt(sum_sq) / sqrt(n · bound²) · 100`. Not clamped.
pub fn euclidean_norm_to_percent(sum_sq: f64, per_dim_bound: f64, n: usize) -> f64 {
    let max = (n as f64 * per_dim_bound * per_dim_bound).sqrt();
    sum_sq.sqrt() / max * 100.0
}

/// `count / n · 100`.
pub fn ratio_to_percent(count: usize, n: usize) -> f64 {
    count as f64 / n as f64 * 100.0
}

/// Round to the nearest integer, then clamp into `[lo, hi]`.
/// Inputs are non-negative, so half-away-from-zero rounding matches half-up.
pub fn clamp_score(raw: f64, lo: u32, hi: u32) -> u32 {
    let rounded = raw.round();
    if rounded.is_nan() || rounded <= lo as f64 {
        lo
    } else if rounded >= hi as f64 {
        hi
    } else {
        rounded as u32
    }
}
