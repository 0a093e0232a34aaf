use super::inversion::invert;
use super::scaling::{ScalingPolicy, scale};
use nalgebra::Point3;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Which of the two inversions of the transform hit the singular point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InversionStage {
    First,
    Second,
}

impl fmt::Display for InversionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TransformError {
    #[error("Point coincides with the transform center at the {stage} inversion")]
    Singular { stage: InversionStage },
    #[error("Transform produced a non-finite coordinate")]
    NonFinite,
}

/// A Möbius scaling transform anchored at `center` with zoom `zoom`.
///
/// The map is `invert -> scale -> invert`, where both inversions are through
/// the unit sphere around `center` and the scale factor is chosen by
/// `policy`. Since inversions and scalings are conformal, the composite sends
/// circles and spheres to circles and spheres (or lines and planes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusTransform {
    pub center: Point3<f64>,
    pub zoom: f64,
    pub policy: ScalingPolicy,
}

impl MobiusTransform {
    pub fn new(center: Point3<f64>, zoom: f64, policy: ScalingPolicy) -> Self {
        Self {
            center,
            zoom,
            policy,
        }
    }

    /// An exponential-policy transform with `zoom = 0`, which maps every point
    /// other than the center to itself.
    pub fn identity_at(center: Point3<f64>) -> Self {
        Self::new(center, 0.0, ScalingPolicy::Exponential)
    }

    pub fn with_zoom(self, zoom: f64) -> Self {
        Self { zoom, ..self }
    }

    pub fn with_center(self, center: Point3<f64>) -> Self {
        Self { center, ..self }
    }

    /// Applies the transform, reporting the singular cases instead of hiding
    /// them.
    pub fn try_apply(&self, z: &Point3<f64>) -> Result<Point3<f64>, TransformError> {
        let inverted = invert(z, &self.center).ok_or(TransformError::Singular {
            stage: InversionStage::First,
        })?;
        let factor = self.policy.factor(self.zoom, &inverted, &self.center);
        let scaled = scale(&inverted, factor);
        let result = invert(&scaled, &self.center).ok_or(TransformError::Singular {
            stage: InversionStage::Second,
        })?;

        if result.iter().all(|c| c.is_finite()) {
            Ok(result)
        } else {
            Err(TransformError::NonFinite)
        }
    }

    /// Applies the transform. Any point that cannot be mapped (the center
    /// itself, or a point whose scaled inversion lands on the center) maps to
    /// the center.
    pub fn apply(&self, z: &Point3<f64>) -> Point3<f64> {
        match self.try_apply(z) {
            Ok(p) => p,
            Err(e) => {
                debug!(
                    "Möbius transform fallback for ({}, {}, {}): {}",
                    z.x, z.y, z.z, e
                );
                self.center
            }
        }
    }

    pub fn apply_all<'a, I>(&self, points: I) -> Vec<Point3<f64>>
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        points.into_iter().map(|p| self.apply(p)).collect()
    }
}

/// Free-function form of [`MobiusTransform::apply`].
#[inline]
pub fn mobius_scaling_transform(
    point: &Point3<f64>,
    center: &Point3<f64>,
    zoom: f64,
    policy: ScalingPolicy,
) -> Point3<f64> {
    MobiusTransform::new(*center, zoom, policy).apply(point)
}
