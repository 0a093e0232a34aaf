//! Parametric shape samplers feeding the Möbius transform.
//!
//! Each shape describes its pristine, untransformed samples through
//! [`Sampled`]. Transformed output is always derived from those samples,
//! never from a previously transformed point set.
//!
//! - [`circle`] - closed circle loops and open disk outlines in the `z = 0` plane
//! - [`sphere`] - UV-tessellated spheres with a triangle index buffer
//! - [`plane`] - square grids used as deformable reference planes
//! - [`circumcircle`] - recovering the circle through transformed samples

pub mod circle;
pub mod circumcircle;
pub mod plane;
pub mod sphere;

use nalgebra::Point3;

pub use circle::{CircleShape, generate_circle, generate_disk_outline};
pub use circumcircle::{CircleFit, CircumcircleError};
pub use plane::PlaneShape;
pub use sphere::{SphereMesh, SphereShape, generate_sphere};

/// Largest sphere segment count or plane resolution whose vertex indices
/// still fit in a `u32` index buffer: `(65_534 + 1)^2 - 1 < u32::MAX`.
pub const MAX_MESH_SEGMENTS: u32 = 65_534;

/// A shape that can produce its untransformed sample points in a fixed,
/// deterministic order.
pub trait Sampled {
    fn samples(&self) -> Vec<Point3<f64>>;

    fn sample_count(&self) -> usize {
        self.samples().len()
    }
}
