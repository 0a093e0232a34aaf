use crate::core::models::molecule::{Atom, Bond, BondOrder, Molecule, MoleculeError};
use crate::core::shapes::{CircleShape, MAX_MESH_SEGMENTS, PlaneShape, SphereShape};
use nalgebra::{Point2, Point3};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid {entity}: {reason}")]
    Invalid { entity: String, reason: String },
    #[error("Invalid molecule: {0}")]
    Molecule(#[from] MoleculeError),
    #[error("Bond {bond} has unknown order code {code}")]
    UnknownBondOrder { bond: usize, code: u8 },
}

/// Everything one frame transforms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub circles: Vec<CircleShape>,
    pub spheres: Vec<SphereShape>,
    pub planes: Vec<PlaneShape>,
    pub molecule: Option<Molecule>,
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path).map_err(|e| SceneError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: SceneFile = toml::from_str(&content).map_err(|e| SceneError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        file.into_scene()
    }

    pub fn parse_str(content: &str) -> Result<Self, SceneError> {
        let file: SceneFile = toml::from_str(content).map_err(|e| SceneError::Toml {
            path: "<inline>".to_string(),
            source: e,
        })?;
        file.into_scene()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
            && self.spheres.is_empty()
            && self.planes.is_empty()
            && self.molecule.as_ref().is_none_or(Molecule::is_empty)
    }

    /// Rejects shapes that cannot be sampled meaningfully: zero segment
    /// counts, negative or non-finite sizes, and non-finite coordinates.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (i, c) in self.circles.iter().enumerate() {
            let entity = || format!("circle #{}", i);
            require(c.segments > 0, entity, "segments must be positive")?;
            require(is_size(c.radius), entity, "radius must be finite and non-negative")?;
            require(
                c.center.iter().all(|v| v.is_finite()),
                entity,
                "center must be finite",
            )?;
        }
        for (i, s) in self.spheres.iter().enumerate() {
            let entity = || format!("sphere #{}", i);
            require(s.segments > 0, entity, "segments must be positive")?;
            require(
                s.segments <= MAX_MESH_SEGMENTS,
                entity,
                "segments exceed the mesh index range",
            )?;
            require(is_size(s.radius), entity, "radius must be finite and non-negative")?;
            require(
                s.center.iter().all(|v| v.is_finite()),
                entity,
                "center must be finite",
            )?;
        }
        for (i, p) in self.planes.iter().enumerate() {
            let entity = || format!("plane #{}", i);
            require(is_size(p.size), entity, "size must be finite and non-negative")?;
            require(
                p.resolution <= MAX_MESH_SEGMENTS,
                entity,
                "resolution exceeds the mesh index range",
            )?;
        }
        if let Some(molecule) = &self.molecule {
            for (i, atom) in molecule.atoms().iter().enumerate() {
                require(
                    atom.position.iter().all(|v| v.is_finite()),
                    || format!("atom #{} ({})", i, atom.symbol),
                    "position must be finite",
                )?;
            }
        }
        Ok(())
    }
}

fn is_size(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn require(
    ok: bool,
    entity: impl FnOnce() -> String,
    reason: &str,
) -> Result<(), SceneError> {
    if ok {
        Ok(())
    } else {
        Err(SceneError::Invalid {
            entity: entity(),
            reason: reason.to_string(),
        })
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    #[serde(default)]
    circles: Vec<CircleEntry>,
    #[serde(default)]
    spheres: Vec<SphereEntry>,
    #[serde(default)]
    planes: Vec<PlaneEntry>,
    molecule: Option<MoleculeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CircleEntry {
    center: [f64; 2],
    radius: f64,
    segments: u32,
    #[serde(default = "default_closed")]
    closed: bool,
}

fn default_closed() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SphereEntry {
    center: [f64; 3],
    radius: f64,
    segments: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaneEntry {
    size: f64,
    resolution: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MoleculeEntry {
    atoms: Vec<AtomEntry>,
    #[serde(default)]
    bonds: Vec<BondEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AtomEntry {
    symbol: String,
    position: [f64; 3],
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BondEntry {
    start: usize,
    end: usize,
    #[serde(default = "default_bond_order")]
    order: u8,
}

fn default_bond_order() -> u8 {
    1
}

impl SceneFile {
    fn into_scene(self) -> Result<Scene, SceneError> {
        let circles = self
            .circles
            .into_iter()
            .map(|c| {
                let center = Point2::from(c.center);
                if c.closed {
                    CircleShape::new(center, c.radius, c.segments)
                } else {
                    CircleShape::open(center, c.radius, c.segments)
                }
            })
            .collect();
        let spheres = self
            .spheres
            .into_iter()
            .map(|s| SphereShape::new(Point3::from(s.center), s.radius, s.segments))
            .collect();
        let planes = self
            .planes
            .into_iter()
            .map(|p| PlaneShape::new(p.size, p.resolution))
            .collect();
        let molecule = self.molecule.map(MoleculeEntry::into_molecule).transpose()?;

        let scene = Scene {
            circles,
            spheres,
            planes,
            molecule,
        };
        scene.validate()?;
        Ok(scene)
    }
}

impl MoleculeEntry {
    fn into_molecule(self) -> Result<Molecule, SceneError> {
        let atoms = self
            .atoms
            .into_iter()
            .map(|a| Atom::new(&a.symbol, Point3::from(a.position)))
            .collect();
        let bonds = self
            .bonds
            .into_iter()
            .enumerate()
            .map(|(i, b)| {
                let order = BondOrder::from_code(b.order)
                    .ok_or(SceneError::UnknownBondOrder { bond: i, code: b.order })?;
                Ok(Bond::new(b.start, b.end, order))
            })
            .collect::<Result<Vec<_>, SceneError>>()?;
        Ok(Molecule::new(atoms, bonds)?)
    }
}
