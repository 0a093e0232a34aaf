use super::Sampled;
use crate::core::transform::MobiusTransform;
use nalgebra::Point3;
use std::f64::consts::{PI, TAU};

/// A UV sphere: `segments + 1` polar rings of `segments + 1` azimuthal
/// samples each. The seam column (`φ = 2π`) and the pole rows are kept as
/// distinct vertices so every quad has its own UVs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereShape {
    pub center: Point3<f64>,
    pub radius: f64,
    pub segments: u32,
}

/// Flat mesh buffers ready for upload: `vertices` holds `xyz` triples, `uvs`
/// holds `uv` pairs, `indices` holds triangle corner indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SphereMesh {
    pub vertices: Vec<f64>,
    pub uvs: Vec<f64>,
    pub indices: Vec<u32>,
}

impl SphereShape {
    pub fn new(center: Point3<f64>, radius: f64, segments: u32) -> Self {
        Self {
            center,
            radius,
            segments,
        }
    }

    fn row_len(&self) -> usize {
        self.segments as usize + 1
    }

    /// `(u, v)` texture coordinates in sample order.
    pub fn uvs(&self) -> Vec<f64> {
        if self.segments == 0 {
            return Vec::new();
        }
        let n = f64::from(self.segments);
        let mut uvs = Vec::with_capacity(self.row_len() * self.row_len() * 2);
        for i in 0..=self.segments {
            for j in 0..=self.segments {
                uvs.push(f64::from(j) / n);
                uvs.push(f64::from(i) / n);
            }
        }
        uvs
    }

    /// Two triangles per quad cell, `(a, b, a + 1)` and `(a + 1, b, b + 1)`
    /// with `a = i * (segments + 1) + j` and `b = a + segments + 1`.
    ///
    /// Indices are only representable up to [`MAX_MESH_SEGMENTS`](super::MAX_MESH_SEGMENTS).
    pub fn indices(&self) -> Vec<u32> {
        let n = self.segments;
        let cells = n as usize;
        let mut indices = Vec::with_capacity(cells * cells * 6);
        for i in 0..n {
            for j in 0..n {
                let a = i * (n + 1) + j;
                let b = a + n + 1;
                indices.extend_from_slice(&[a, b, a + 1]);
                indices.extend_from_slice(&[a + 1, b, b + 1]);
            }
        }
        indices
    }

    pub fn mesh(&self, transform: &MobiusTransform) -> SphereMesh {
        let vertices = self
            .samples()
            .iter()
            .flat_map(|p| {
                let t = transform.apply(p);
                [t.x, t.y, t.z]
            })
            .collect();
        SphereMesh {
            vertices,
            uvs: self.uvs(),
            indices: self.indices(),
        }
    }
}

impl Sampled for SphereShape {
    fn samples(&self) -> Vec<Point3<f64>> {
        if self.segments == 0 {
            return Vec::new();
        }
        let n = f64::from(self.segments);
        let mut samples = Vec::with_capacity(self.row_len() * self.row_len());
        for i in 0..=self.segments {
            let theta = f64::from(i) / n * PI;
            for j in 0..=self.segments {
                let phi = f64::from(j) / n * TAU;
                samples.push(Point3::new(
                    self.center.x + self.radius * theta.sin() * phi.cos(),
                    self.center.y + self.radius * theta.sin() * phi.sin(),
                    self.center.z + self.radius * theta.cos(),
                ));
            }
        }
        samples
    }
}

impl SphereMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex(&self, index: usize) -> Option<Point3<f64>> {
        let xyz = self.vertices.get(index * 3..index * 3 + 3)?;
        Some(Point3::new(xyz[0], xyz[1], xyz[2]))
    }

    pub fn points(&self) -> Vec<Point3<f64>> {
        self.vertices
            .chunks_exact(3)
            .map(|xyz| Point3::new(xyz[0], xyz[1], xyz[2]))
            .collect()
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Tessellates a sphere and transforms each vertex.
pub fn generate_sphere(
    radius: f64,
    segments: u32,
    center: &Point3<f64>,
    transform: &MobiusTransform,
) -> SphereMesh {
    SphereShape::new(*center, radius, segments).mesh(transform)
}
