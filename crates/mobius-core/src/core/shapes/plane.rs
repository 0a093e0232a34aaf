use super::Sampled;
use nalgebra::Point3;

/// A `size x size` square grid in the `z = 0` plane, centered on the origin,
/// split into `resolution x resolution` cells.
///
/// Vertices run row by row from the top-left corner: `x` grows along a row,
/// `y` shrinks from one row to the next. A resolution of zero is treated as
/// a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneShape {
    pub size: f64,
    pub resolution: u32,
}

impl PlaneShape {
    pub fn new(size: f64, resolution: u32) -> Self {
        Self { size, resolution }
    }

    fn cells(&self) -> u32 {
        self.resolution.max(1)
    }

    pub fn vertex_count(&self) -> usize {
        let row = self.cells() as usize + 1;
        row * row
    }

    pub fn uvs(&self) -> Vec<f64> {
        let cells = self.cells();
        let n = f64::from(cells);
        let mut uvs = Vec::with_capacity(self.vertex_count() * 2);
        for iy in 0..=cells {
            for ix in 0..=cells {
                uvs.push(f64::from(ix) / n);
                uvs.push(1.0 - f64::from(iy) / n);
            }
        }
        uvs
    }

    /// Two counter-clockwise triangles per cell.
    pub fn indices(&self) -> Vec<u32> {
        let cells = self.cells();
        let row = cells + 1;
        let n = cells as usize;
        let mut indices = Vec::with_capacity(n * n * 6);
        for iy in 0..cells {
            for ix in 0..cells {
                let a = ix + row * iy;
                let b = ix + row * (iy + 1);
                let c = (ix + 1) + row * (iy + 1);
                let d = (ix + 1) + row * iy;
                indices.extend_from_slice(&[a, b, d]);
                indices.extend_from_slice(&[b, c, d]);
            }
        }
        indices
    }
}

impl Sampled for PlaneShape {
    fn samples(&self) -> Vec<Point3<f64>> {
        let cells = self.cells();
        let half = self.size / 2.0;
        let step = self.size / f64::from(cells);
        let mut samples = Vec::with_capacity(self.vertex_count());
        for iy in 0..=cells {
            let y = half - f64::from(iy) * step;
            for ix in 0..=cells {
                let x = f64::from(ix) * step - half;
                samples.push(Point3::new(x, y, 0.0));
            }
        }
        samples
    }

    fn sample_count(&self) -> usize {
        self.vertex_count()
    }
}
