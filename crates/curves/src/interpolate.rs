//! Scalar easing and basis functions.
//!
//! Everything here works on a local segment parameter `s` in `[0, 1]`, the caller is
//! responsible for mapping time onto it.

use crate::curve_type::DEFAULT_TENSION;

pub fn interpolate_linear(first: f64, second: f64, t: f64) -> f64 {
    first + t * (second - first)
}

/// Cubic ease-in/ease-out remap of `s`.
pub fn smoothstep(s: f64) -> f64 {
    s * s * (3.0 - 2.0 * s)
}

/// Cubic Hermite blend of two values and their tangents.
pub fn interpolate_hermite(
    first_value: f64,
    second_value: f64,
    first_tangent: f64,
    second_tangent: f64,
    interpolation_time: f64,
) -> f64 {
    let s = interpolation_time;
    let s2 = s * s;
    let s3 = s2 * s;

    let h0 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h1 = -2.0 * s3 + 3.0 * s2;
    let h2 = s3 - 2.0 * s2 + s;
    let h3 = s3 - s2;

    (h0 * first_value) + (h1 * second_value) + (h2 * first_tangent) + (h3 * second_tangent)
}

/// Cardinal spline between `p1` and `p2`, tangents scaled by `tension`.
pub fn interpolate_cardinal(p0: f64, p1: f64, p2: f64, p3: f64, s: f64, tension: f64) -> f64 {
    let t0 = tension * (p2 - p0);
    let t1 = tension * (p3 - p1);

    interpolate_hermite(p1, p2, t0, t1, s)
}

pub fn interpolate_catmull_rom(p0: f64, p1: f64, p2: f64, p3: f64, s: f64) -> f64 {
    interpolate_cardinal(p0, p1, p2, p3, s, DEFAULT_TENSION)
}
