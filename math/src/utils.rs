use super::{DEG_2_RAD, RAD_2_DEG};

/// Exact at both ends: `t == 0` yields `a` and `t == 1` yields `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[inline]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

#[inline]
pub fn to_rad(degrees: f64) -> f64 {
    degrees * DEG_2_RAD
}

#[inline]
pub fn to_deg(radians: f64) -> f64 {
    radians * RAD_2_DEG
}
