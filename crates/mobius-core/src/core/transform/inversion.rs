use nalgebra::Point3;

/// Inverts `z` through the unit sphere centered at `center`.
///
/// Computes `(z - P) / |z - P|^2 + P`. Returns `None` when `z` coincides with
/// the center, the only point where the inversion is undefined. No tolerance
/// is applied: only an exact zero squared distance is singular.
#[inline]
pub fn invert(z: &Point3<f64>, center: &Point3<f64>) -> Option<Point3<f64>> {
    let d = z - center;
    let r2 = d.norm_squared();
    if r2 == 0.0 {
        return None;
    }
    Some(center + d / r2)
}

/// Inversion with the documented fallback: the singular point maps to the
/// center itself.
#[inline]
pub fn invert_or_center(z: &Point3<f64>, center: &Point3<f64>) -> Point3<f64> {
    invert(z, center).unwrap_or(*center)
}
