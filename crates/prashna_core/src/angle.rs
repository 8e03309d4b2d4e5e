//! Angle normalization shared by every layer of the engine.

/// Normalize an angle to [0, 360) degrees. Idempotent.
///
/// For a tiny negative remainder the `+ 360.0` step rounds to exactly
/// 360.0, so the result is folded back to 0.0 to keep the half-open range.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}
