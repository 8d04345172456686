//! Weight rounding helper.

/// Rounds `value` to the nearest multiple of `step`.
///
/// Display weights are rounded to the nearest 0.1 unit. A non-positive step
/// returns the value unchanged.
pub fn to_nearest(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}
