//! Weighted closeness between a song feature and a target.

/// Return `weight * (1 - |song_value - target_value|)`.
///
/// For inputs on the unit interval and a weight of `1.0` the result lies in
/// `[0, 1]`: `1.0` is an exact match and `0.0` means the values sit at
/// opposite ends. Inputs outside the unit interval are evaluated as-is and
/// the result is then unbounded.
///
/// # Examples
/// ```
/// use cadence_scorer::closeness;
///
/// let points = closeness(0.4, 0.6, 1.2);
/// assert!((points - 0.96).abs() < 1e-12);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "closeness is a weighted absolute difference"
)]
#[must_use]
pub fn closeness(song_value: f64, target_value: f64, weight: f64) -> f64 {
    weight * (1.0 - (song_value - target_value).abs())
}
