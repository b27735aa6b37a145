use glam::DVec2;
use std::f64::consts::TAU;

/// Heart curve in curve units, y pointing up.
#[inline]
pub fn heart_curve(t: f64) -> DVec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    DVec2::new(x, y)
}

/// Number of samples taken over [0, 2π) at `step`.
#[inline]
pub fn sample_count(step: f64) -> usize {
    (TAU / step).ceil() as usize
}

/// Sample the heart boundary into canvas coordinates.
///
/// Canvas y grows downward, so the curve's y is negated before scaling.
pub fn heart_points(center: DVec2, scale: f64, step: f64) -> Vec<DVec2> {
    (0..sample_count(step))
        .map(|i| {
            let c = heart_curve(i as f64 * step);
            center + scale * DVec2::new(c.x, -c.y)
        })
        .collect()
}

#[inline]
pub fn scale_about(point: DVec2, center: DVec2, factor: f64) -> DVec2 {
    (point - center) * factor + center
}
