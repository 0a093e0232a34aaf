use crate::core::shapes::Sampled;
use crate::core::transform::MobiusTransform;
use nalgebra::Point3;
use tracing::trace;

/// Keeps the pristine samples of a shape and the positions derived from them.
///
/// The pristine samples are captured on first use and reused for every later
/// transform, so repeated parameter changes never compound floating-point
/// error: each call to [`Baseline::apply`] maps the pristine samples afresh
/// and overwrites the previous positions. Changing the transform never
/// invalidates the capture; changing the shape does.
#[derive(Debug, Clone)]
pub struct Baseline<S> {
    shape: S,
    pristine: Option<Vec<Point3<f64>>>,
    positions: Vec<Point3<f64>>,
}

impl<S: Sampled + PartialEq> Baseline<S> {
    pub fn new(shape: S) -> Self {
        Self {
            shape,
            pristine: None,
            positions: Vec::new(),
        }
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }

    pub fn is_captured(&self) -> bool {
        self.pristine.is_some()
    }

    /// The untransformed samples, capturing them if needed.
    pub fn pristine(&mut self) -> &[Point3<f64>] {
        let shape = &self.shape;
        self.pristine.get_or_insert_with(|| {
            trace!("Capturing pristine baseline samples.");
            shape.samples()
        })
    }

    /// Re-derives every position from the pristine samples.
    pub fn apply(&mut self, transform: &MobiusTransform) -> &[Point3<f64>] {
        let shape = &self.shape;
        let pristine = self.pristine.get_or_insert_with(|| {
            trace!("Capturing pristine baseline samples.");
            shape.samples()
        });
        self.positions.clear();
        self.positions
            .extend(pristine.iter().map(|p| transform.apply(p)));
        &self.positions
    }

    /// Positions produced by the last [`Baseline::apply`], empty before the
    /// first call or after a shape change.
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Replaces the shape. The capture is dropped only if the shape actually
    /// changed; returns whether it was.
    pub fn set_shape(&mut self, shape: S) -> bool {
        if shape == self.shape {
            return false;
        }
        self.shape = shape;
        self.pristine = None;
        self.positions.clear();
        true
    }
}
