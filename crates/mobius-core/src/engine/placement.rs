use crate::core::models::elements::{atom_color, atomic_radius};
use crate::core::models::molecule::{Atom, Bond, Molecule};
use crate::core::models::placed::{
    ATOM_DISPLAY_SCALE, BondStrand, PlacedAtom, PlacedBond, PlacedMolecule, strand_offsets,
};
use crate::core::transform::MobiusTransform;
use nalgebra::{Point3, UnitQuaternion, Vector3};

/// Size multiplier for an atom whose untransformed position is `original`.
///
/// Atoms near the transform center grow with the zoom, with the effect
/// decaying as `e^(-dist / 2)`. An atom sitting exactly on the center keeps
/// its base size.
pub fn atom_scaling_factor(original: &Point3<f64>, transform: &MobiusTransform) -> f64 {
    let dist = nalgebra::distance(original, &transform.center);
    if dist == 0.0 {
        return 1.0;
    }
    1.0 + (transform.zoom - 1.0) * (-dist * 0.5).exp() * 4.0
}

pub fn place_atom(index: usize, atom: &Atom, transform: &MobiusTransform) -> PlacedAtom {
    let scale = atom_scaling_factor(&atom.position, transform);
    let radius = (atomic_radius(&atom.symbol) * ATOM_DISPLAY_SCALE * scale).max(0.0);
    PlacedAtom {
        index,
        symbol: atom.symbol.clone(),
        position: transform.apply(&atom.position),
        radius,
        color: atom_color(&atom.symbol),
    }
}

pub fn place_bond(
    index: usize,
    bond: &Bond,
    start: &Atom,
    end: &Atom,
    transform: &MobiusTransform,
) -> PlacedBond {
    let start = transform.apply(&start.position);
    let end = transform.apply(&end.position);
    let delta = end - start;
    let length = delta.norm();
    let midpoint = nalgebra::center(&start, &end);

    let direction = if length > 0.0 {
        delta / length
    } else {
        Vector3::zeros()
    };
    // Antiparallel to +Y has no unique rotation axis; a cylinder is symmetric
    // under that flip, so identity is exact.
    let orientation = UnitQuaternion::rotation_between(&Vector3::y(), &direction)
        .unwrap_or_else(UnitQuaternion::identity);

    let strands = strand_offsets(bond.order)
        .iter()
        .map(|&offset| BondStrand {
            center: midpoint + Vector3::new(0.0, 0.0, offset),
            offset,
        })
        .collect();

    PlacedBond {
        index,
        order: bond.order,
        start,
        end,
        midpoint,
        length,
        orientation,
        strands,
    }
}

pub fn place_molecule(molecule: &Molecule, transform: &MobiusTransform) -> PlacedMolecule {
    let atoms = molecule
        .atoms()
        .iter()
        .enumerate()
        .map(|(i, atom)| place_atom(i, atom, transform))
        .collect();

    let bonds = molecule
        .bonds()
        .iter()
        .enumerate()
        .filter_map(|(i, bond)| {
            let start = molecule.atom(bond.start)?;
            let end = molecule.atom(bond.end)?;
            Some(place_bond(i, bond, start, end, transform))
        })
        .collect();

    PlacedMolecule { atoms, bonds }
}
