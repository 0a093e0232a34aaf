use crate::core::models::placed::{BOND_RADIUS, PlacedAtom, PlacedBond};
use crate::core::shapes::CircleFit;
use nalgebra::Point3;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV writing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRecord<'a> {
    pub shape: &'a str,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriangleRecord<'a> {
    pub shape: &'a str,
    pub index: usize,
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

/// Texture coordinate of the mesh vertex with the same `index`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UvRecord<'a> {
    pub shape: &'a str,
    pub index: usize,
    pub u: f64,
    pub v: f64,
}

/// Degenerate fits are written with empty center and radius columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleFitRecord<'a> {
    pub shape: &'a str,
    pub center_x: Option<f64>,
    pub center_y: Option<f64>,
    pub radius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomRecord<'a> {
    pub index: usize,
    pub symbol: &'a str,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub radius: f64,
    pub color: &'a str,
}

/// One cylinder per row; multiple bonds produce one row per strand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondStrandRecord {
    pub bond: usize,
    pub strand: usize,
    pub order: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub length: f64,
    pub radius: f64,
    pub qx: f64,
    pub qy: f64,
    pub qz: f64,
    pub qw: f64,
}

pub fn point_records<'a>(shape: &'a str, points: &[Point3<f64>]) -> Vec<PointRecord<'a>> {
    points
        .iter()
        .enumerate()
        .map(|(index, p)| PointRecord {
            shape,
            index,
            x: p.x,
            y: p.y,
            z: p.z,
        })
        .collect()
}

/// Groups a flat index buffer into triangles. A trailing partial triangle is
/// dropped.
pub fn triangle_records<'a>(shape: &'a str, indices: &[u32]) -> Vec<TriangleRecord<'a>> {
    indices
        .chunks_exact(3)
        .enumerate()
        .map(|(index, t)| TriangleRecord {
            shape,
            index,
            a: t[0],
            b: t[1],
            c: t[2],
        })
        .collect()
}

/// Groups a flat `uv` buffer into per-vertex pairs. A trailing lone value is
/// dropped.
pub fn uv_records<'a>(shape: &'a str, uvs: &[f64]) -> Vec<UvRecord<'a>> {
    uvs.chunks_exact(2)
        .enumerate()
        .map(|(index, uv)| UvRecord {
            shape,
            index,
            u: uv[0],
            v: uv[1],
        })
        .collect()
}

pub fn circle_fit_record<'a>(shape: &'a str, fit: Option<&CircleFit>) -> CircleFitRecord<'a> {
    CircleFitRecord {
        shape,
        center_x: fit.map(|f| f.center.x),
        center_y: fit.map(|f| f.center.y),
        radius: fit.map(|f| f.radius),
    }
}

pub fn atom_records(atoms: &[PlacedAtom]) -> Vec<AtomRecord<'_>> {
    atoms
        .iter()
        .map(|a| AtomRecord {
            index: a.index,
            symbol: &a.symbol,
            x: a.position.x,
            y: a.position.y,
            z: a.position.z,
            radius: a.radius,
            color: a.color,
        })
        .collect()
}

pub fn bond_records(bonds: &[PlacedBond]) -> Vec<BondStrandRecord> {
    bonds
        .iter()
        .flat_map(|bond| {
            let q = bond.orientation.quaternion();
            bond.strands
                .iter()
                .enumerate()
                .map(move |(strand, s)| BondStrandRecord {
                    bond: bond.index,
                    strand,
                    order: bond.order.to_string(),
                    x: s.center.x,
                    y: s.center.y,
                    z: s.center.z,
                    length: bond.length,
                    radius: BOND_RADIUS,
                    qx: q.i,
                    qy: q.j,
                    qz: q.k,
                    qw: q.w,
                })
        })
        .collect()
}

/// Writes `records` as CSV with a header row taken from the record fields.
pub fn write_records<W: Write, R: Serialize>(writer: W, records: &[R]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn export_records<R: Serialize>(path: &Path, records: &[R]) -> Result<(), ExportError> {
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    write_records(std::io::BufWriter::new(file), records).map_err(|e| ExportError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::molecule::BondOrder;
    use crate::core::models::placed::BondStrand;
    use nalgebra::{Point2, UnitQuaternion};
    use tempfile::tempdir;

    fn to_csv<R: Serialize>(records: &[R]) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn points_are_written_with_header_and_shape_label() {
        let points = [Point3::new(1.0, 2.0, 3.0), Point3::new(-0.5, 0.0, 0.25)];
        let csv = to_csv(&point_records("circle-0", &points));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "shape,index,x,y,z");
        assert_eq!(lines[1], "circle-0,0,1.0,2.0,3.0");
        assert_eq!(lines[2], "circle-0,1,-0.5,0.0,0.25");
    }

    #[test]
    fn triangles_group_the_index_buffer() {
        let records = triangle_records("sphere-0", &[0, 3, 1, 1, 3, 4, 9]);
        assert_eq!(records.len(), 2);
        assert_eq!((records[1].a, records[1].b, records[1].c), (1, 3, 4));
    }

    #[test]
    fn uvs_are_paired_per_vertex() {
        let csv = to_csv(&uv_records("plane-0", &[0.0, 1.0, 0.5, 0.25, 0.75]));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "shape,index,u,v");
        assert_eq!(lines[2], "plane-0,1,0.5,0.25");
    }

    #[test]
    fn degenerate_fit_leaves_columns_empty() {
        let fit = CircleFit {
            center: Point2::new(0.5, -1.0),
            radius: 2.0,
        };
        let csv = to_csv(&[
            circle_fit_record("circle-0", Some(&fit)),
            circle_fit_record("circle-1", None),
        ]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "shape,center_x,center_y,radius");
        assert_eq!(lines[1], "circle-0,0.5,-1.0,2.0");
        assert_eq!(lines[2], "circle-1,,,");
    }

    #[test]
    fn atoms_carry_radius_and_color() {
        let atoms = [PlacedAtom {
            index: 0,
            symbol: "O".to_string(),
            position: Point3::new(0.0, 0.0, 1.0),
            radius: 0.25,
            color: "#FF0000",
        }];
        let csv = to_csv(&atom_records(&atoms));
        assert_eq!(csv.lines().nth(1), Some("0,O,0.0,0.0,1.0,0.25,#FF0000"));
    }

    #[test]
    fn each_bond_strand_becomes_a_row() {
        let bond = PlacedBond {
            index: 4,
            order: BondOrder::Double,
            start: Point3::new(0.0, -1.0, 0.0),
            end: Point3::new(0.0, 1.0, 0.0),
            midpoint: Point3::origin(),
            length: 2.0,
            orientation: UnitQuaternion::identity(),
            strands: vec![
                BondStrand {
                    center: Point3::new(0.0, 0.0, -0.145),
                    offset: -0.145,
                },
                BondStrand {
                    center: Point3::new(0.0, 0.0, 0.145),
                    offset: 0.145,
                },
            ],
        };
        let records = bond_records(&[bond]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].strand, 1);
        assert_eq!(records[1].order, "Double");
        assert_eq!(records[0].qw, 1.0);
    }

    #[test]
    fn export_writes_a_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        export_records(&path, &point_records("plane-0", &[Point3::origin()])).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("shape,index,x,y,z"));
    }

    #[test]
    fn export_into_missing_directory_fails_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("points.csv");
        let result = export_records(&path, &point_records("plane-0", &[Point3::origin()]));
        assert!(matches!(result, Err(ExportError::Io { .. })));
    }
}
