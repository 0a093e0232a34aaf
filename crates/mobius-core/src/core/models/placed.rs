use super::molecule::BondOrder;
use nalgebra::{Point3, UnitQuaternion};

/// Fraction of the element radius used for the rendered sphere.
pub const ATOM_DISPLAY_SCALE: f64 = 0.3;
/// Distance between the parallel cylinders of a multiple bond.
pub const BOND_STRAND_SPACING: f64 = 0.145;
/// Radius of a single bond cylinder.
pub const BOND_RADIUS: f64 = 0.05;

const SINGLE_OFFSETS: [f64; 1] = [0.0];
const DOUBLE_OFFSETS: [f64; 2] = [-BOND_STRAND_SPACING, BOND_STRAND_SPACING];
const TRIPLE_OFFSETS: [f64; 3] = [-BOND_STRAND_SPACING, 0.0, BOND_STRAND_SPACING];

/// Strand offsets along `z` for each bond order. Aromatic bonds are drawn
/// as a single strand.
pub fn strand_offsets(order: BondOrder) -> &'static [f64] {
    match order {
        BondOrder::Single | BondOrder::Aromatic => &SINGLE_OFFSETS,
        BondOrder::Double => &DOUBLE_OFFSETS,
        BondOrder::Triple => &TRIPLE_OFFSETS,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedAtom {
    pub index: usize,
    pub symbol: String,
    pub position: Point3<f64>,
    pub radius: f64,
    pub color: &'static str,
}

/// One cylinder of a bond, centered on `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondStrand {
    pub center: Point3<f64>,
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBond {
    pub index: usize,
    pub order: BondOrder,
    pub start: Point3<f64>,
    pub end: Point3<f64>,
    pub midpoint: Point3<f64>,
    pub length: f64,
    /// Rotates a cylinder modelled along `+Y` onto the bond direction.
    pub orientation: UnitQuaternion<f64>,
    pub strands: Vec<BondStrand>,
}

/// A molecule after every atom and bond has gone through the transform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacedMolecule {
    pub atoms: Vec<PlacedAtom>,
    pub bonds: Vec<PlacedBond>,
}
