pub mod circle;
pub mod render;
pub mod transform;

use nalgebra::Point3;

pub(crate) fn format_point(p: &Point3<f64>, precision: usize) -> String {
    format!(
        "{:.prec$} {:.prec$} {:.prec$}",
        p.x,
        p.y,
        p.z,
        prec = precision
    )
}
