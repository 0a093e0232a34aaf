use nalgebra::{Point2, Point3};
use thiserror::Error;

/// Below this determinant magnitude three samples are treated as collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-10;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CircumcircleError {
    #[error("Points are collinear or too close together (determinant {determinant:e})")]
    Collinear { determinant: f64 },
    #[error("At least 3 samples are required to recover a circle, got {count}")]
    TooFewSamples { count: usize },
}

/// Center of the circle through three points, from the intersection of two
/// perpendicular bisectors.
pub fn circumcenter(
    p1: &Point2<f64>,
    p2: &Point2<f64>,
    p3: &Point2<f64>,
) -> Result<Point2<f64>, CircumcircleError> {
    let a = p2.x - p1.x;
    let b = p2.y - p1.y;
    let c = p3.x - p1.x;
    let d = p3.y - p1.y;
    let e = a * (p1.x + p2.x) + b * (p1.y + p2.y);
    let f = c * (p1.x + p3.x) + d * (p1.y + p3.y);
    let g = 2.0 * (a * (p3.y - p2.y) - b * (p3.x - p2.x));

    if g.abs() < COLLINEAR_EPSILON {
        return Err(CircumcircleError::Collinear { determinant: g });
    }

    Ok(Point2::new((d * e - b * f) / g, (a * f - c * e) / g))
}

/// Radius measured from the circumcenter to `p1`.
#[inline]
pub fn circumradius(center: &Point2<f64>, p1: &Point2<f64>) -> f64 {
    nalgebra::distance(center, p1)
}

/// Indices of the three samples used to recover a transformed circle: the
/// first, the middle (`n / 2`) and the second-to-last (`n - 2`). The last
/// sample of a closed loop duplicates the first, so it is skipped.
pub fn sample_indices(count: usize) -> Result<[usize; 3], CircumcircleError> {
    if count < 3 {
        return Err(CircumcircleError::TooFewSamples { count });
    }
    Ok([0, count / 2, count - 2])
}

/// The circle recovered from transformed samples, in the `xy` plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleFit {
    pub center: Point2<f64>,
    pub radius: f64,
}

impl CircleFit {
    pub fn from_points(
        p1: &Point2<f64>,
        p2: &Point2<f64>,
        p3: &Point2<f64>,
    ) -> Result<Self, CircumcircleError> {
        let center = circumcenter(p1, p2, p3)?;
        Ok(Self {
            center,
            radius: circumradius(&center, p1),
        })
    }

    /// Fits the circle through the conventional three samples of a
    /// transformed circle (see [`sample_indices`]).
    pub fn from_samples(points: &[Point3<f64>]) -> Result<Self, CircumcircleError> {
        let [i, j, k] = sample_indices(points.len())?;
        Self::from_points(&points[i].xy(), &points[j].xy(), &points[k].xy())
    }

    /// Origin with zero radius, for frames where no circle can be recovered.
    pub fn fallback() -> Self {
        Self {
            center: Point2::origin(),
            radius: 0.0,
        }
    }
}
