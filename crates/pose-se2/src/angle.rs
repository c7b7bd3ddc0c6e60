/// Wraps an angle in radians into `(-π, π]`.
///
/// Uses the same convention as `atan2`, so `wrap_angle(theta)` is exactly the heading that
/// a round-trip through a rotation matrix produces.
#[inline]
pub fn wrap_angle(theta: f64) -> f64 {
    theta.sin().atan2(theta.cos())
}
