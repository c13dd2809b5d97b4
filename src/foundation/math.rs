/// Axis deltas below this (in pixels) are treated as exactly zero when classifying slopes.
pub(crate) const DEGENERATE_EPSILON: f64 = 1e-6;

pub(crate) fn is_near_zero(v: f64) -> bool {
    v.abs() < DEGENERATE_EPSILON
}

/// Round a real channel value to the nearest representable `u8`.
pub(crate) fn round_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
