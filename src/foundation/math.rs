/// Interpolation fraction for row `y` of an image `size` rows tall.
///
/// Uses `size` (not `size - 1`) as the denominator, so the last row never reaches `1.0`.
pub(crate) fn row_fraction(y: u32, size: u32) -> f64 {
    f64::from(y) / f64::from(size)
}

/// `start + (end - start) * t`, truncated toward zero.
pub(crate) fn lerp_channel(start: u8, end: u8, t: f64) -> u8 {
    let v = f64::from(start) + (f64::from(end) - f64::from(start)) * t;
    v.trunc().clamp(0.0, 255.0) as u8
}
