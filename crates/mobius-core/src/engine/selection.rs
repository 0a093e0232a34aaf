use super::baseline::Baseline;
use crate::core::shapes::{CircleFit, CircleShape, CircumcircleError};
use crate::core::transform::MobiusTransform;
use nalgebra::{Point3, Vector3};
use tracing::{debug, warn};

/// Offset added to each coordinate of a picked point before it becomes the
/// transform center.
pub const CENTER_NUDGE: f64 = 1e-6;

/// Moves a picked point slightly off itself so that the object it was picked
/// from does not sit exactly on the singular point of the transform.
#[inline]
pub fn nudge_center(point: &Point3<f64>) -> Point3<f64> {
    point + Vector3::repeat(CENTER_NUDGE)
}

/// A circle that can be zoomed into its transformed image and reset.
///
/// Zooming replaces the circle with the one recovered from its current
/// transformed samples, so the next frame starts from that circle's pristine
/// samples.
#[derive(Debug, Clone)]
pub struct CircleView {
    original: CircleShape,
    baseline: Baseline<CircleShape>,
}

impl CircleView {
    pub fn new(shape: CircleShape) -> Self {
        Self {
            original: shape,
            baseline: Baseline::new(shape),
        }
    }

    pub fn shape(&self) -> &CircleShape {
        self.baseline.shape()
    }

    pub fn is_zoomed(&self) -> bool {
        *self.baseline.shape() != self.original
    }

    pub fn points(&mut self, transform: &MobiusTransform) -> &[Point3<f64>] {
        self.baseline.apply(transform)
    }

    pub fn fit(&mut self, transform: &MobiusTransform) -> Result<CircleFit, CircumcircleError> {
        CircleFit::from_samples(self.baseline.apply(transform))
    }

    /// Adopts the circle through the transformed samples. Degenerate frames
    /// leave the view unchanged.
    pub fn zoom_in(&mut self, transform: &MobiusTransform) -> Option<CircleFit> {
        match self.fit(transform) {
            Ok(fit) => {
                let current = *self.baseline.shape();
                debug!(
                    "Zooming circle to center ({}, {}) radius {}",
                    fit.center.x, fit.center.y, fit.radius
                );
                self.baseline.set_shape(CircleShape {
                    center: fit.center,
                    radius: fit.radius,
                    ..current
                });
                Some(fit)
            }
            Err(e) => {
                warn!("Cannot zoom circle: {}", e);
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.baseline.set_shape(self.original);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transform::ScalingPolicy;
    use nalgebra::Point2;

    const TOLERANCE: f64 = 1e-6;

    fn unit_circle() -> CircleShape {
        CircleShape::new(Point2::origin(), 1.0, 64)
    }

    #[test]
    fn nudge_offsets_every_coordinate() {
        let p = nudge_center(&Point3::new(1.0, -2.0, 0.0));
        assert_eq!(p, Point3::new(1.0 + 1e-6, -2.0 + 1e-6, 1e-6));
    }

    #[test]
    fn nudged_atom_position_does_not_collapse() {
        let atom = Point3::new(0.6, 0.0, 0.0);
        let t = MobiusTransform::new(nudge_center(&atom), 1.0, ScalingPolicy::Exponential);
        assert!(t.try_apply(&atom).is_ok());
    }

    #[test]
    fn fit_of_identity_frame_recovers_the_circle() {
        let mut view = CircleView::new(unit_circle());
        let fit = view
            .fit(&MobiusTransform::identity_at(Point3::new(5.0, 5.0, 0.0)))
            .unwrap();
        assert!((fit.center - Point2::origin()).norm() < TOLERANCE);
        assert!((fit.radius - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn zoom_in_adopts_the_transformed_circle() {
        let mut view = CircleView::new(unit_circle());
        let t = MobiusTransform::new(Point3::new(3.0, 0.0, 0.0), 0.5, ScalingPolicy::Exponential);
        let fit = view.zoom_in(&t).unwrap();

        assert!(view.is_zoomed());
        assert_eq!(view.shape().center, fit.center);
        assert_eq!(view.shape().radius, fit.radius);
        assert_eq!(view.shape().segments, 64);
    }

    #[test]
    fn reset_restores_the_original_circle() {
        let mut view = CircleView::new(unit_circle());
        let t = MobiusTransform::new(Point3::new(3.0, 0.0, 0.0), 1.0, ScalingPolicy::Exponential);
        view.zoom_in(&t);
        view.reset();
        assert!(!view.is_zoomed());
        assert_eq!(*view.shape(), unit_circle());
    }

    #[test]
    fn degenerate_frame_leaves_the_view_unchanged() {
        let mut view = CircleView::new(CircleShape::new(Point2::origin(), 1.0, 2));
        let t = MobiusTransform::identity_at(Point3::new(3.0, 0.0, 0.0));
        assert!(view.zoom_in(&t).is_none());
        assert!(!view.is_zoomed());
    }

    #[test]
    fn points_track_the_current_shape() {
        let mut view = CircleView::new(unit_circle());
        let t = MobiusTransform::new(Point3::new(0.0, 3.0, 0.0), -1.0, ScalingPolicy::Linear);
        assert_eq!(view.points(&t).len(), 65);
        view.zoom_in(&t);
        assert_eq!(view.points(&t).len(), 65);
    }
}
