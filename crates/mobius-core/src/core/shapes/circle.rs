use super::Sampled;
use crate::core::transform::MobiusTransform;
use nalgebra::{Point2, Point3};
use std::f64::consts::TAU;

/// A circle of `radius` around `center` in the `z = 0` plane, sampled at
/// `segments` equal angular steps.
///
/// A closed shape repeats its first sample at the end (`segments + 1`
/// points), which suits line strips. An open shape stops one step short
/// (`segments` points), which suits filled polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    pub center: Point2<f64>,
    pub radius: f64,
    pub segments: u32,
    pub closed: bool,
}

impl CircleShape {
    pub fn new(center: Point2<f64>, radius: f64, segments: u32) -> Self {
        Self {
            center,
            radius,
            segments,
            closed: true,
        }
    }

    pub fn open(center: Point2<f64>, radius: f64, segments: u32) -> Self {
        Self {
            closed: false,
            ..Self::new(center, radius, segments)
        }
    }

    fn sample_at(&self, i: u32) -> Point3<f64> {
        let angle = f64::from(i) / f64::from(self.segments) * TAU;
        Point3::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
            0.0,
        )
    }

    pub fn transformed(&self, transform: &MobiusTransform) -> Vec<Point3<f64>> {
        self.samples().iter().map(|p| transform.apply(p)).collect()
    }
}

impl Sampled for CircleShape {
    /// Zero segments yield no samples.
    fn samples(&self) -> Vec<Point3<f64>> {
        if self.segments == 0 {
            return Vec::new();
        }
        let end = if self.closed {
            self.segments + 1
        } else {
            self.segments
        };
        (0..end).map(|i| self.sample_at(i)).collect()
    }
}

/// Samples a closed circle and transforms every sample. Returns
/// `segments + 1` points whose first and last entries coincide.
pub fn generate_circle(
    radius: f64,
    segments: u32,
    center: &Point2<f64>,
    transform: &MobiusTransform,
) -> Vec<Point3<f64>> {
    CircleShape::new(*center, radius, segments).transformed(transform)
}

/// Samples an open circle outline (no closing duplicate) and transforms
/// every sample. Returns `segments` points.
pub fn generate_disk_outline(
    radius: f64,
    segments: u32,
    center: &Point2<f64>,
    transform: &MobiusTransform,
) -> Vec<Point3<f64>> {
    CircleShape::open(*center, radius, segments).transformed(transform)
}
