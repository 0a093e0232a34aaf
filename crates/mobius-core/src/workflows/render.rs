use crate::core::io::scene::Scene;
use crate::core::models::placed::PlacedMolecule;
use crate::core::shapes::{CircleFit, CircleShape, PlaneShape, Sampled, SphereMesh, SphereShape};
use crate::engine::config::TransformConfig;
use crate::engine::error::EngineError;
use crate::engine::placement::place_molecule;
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::Point3;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCircle {
    pub shape: CircleShape,
    pub points: Vec<Point3<f64>>,
    /// `None` when the transformed samples are too degenerate to fit.
    pub fit: Option<CircleFit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSphere {
    pub shape: SphereShape,
    pub mesh: SphereMesh,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPlane {
    pub shape: PlaneShape,
    pub vertices: Vec<Point3<f64>>,
    pub uvs: Vec<f64>,
    pub indices: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedScene {
    pub config: TransformConfig,
    pub circles: Vec<RenderedCircle>,
    pub spheres: Vec<RenderedSphere>,
    pub planes: Vec<RenderedPlane>,
    pub molecule: Option<PlacedMolecule>,
}

#[instrument(skip_all, name = "render_workflow")]
pub fn run(
    scene: &Scene,
    config: &TransformConfig,
    reporter: &ProgressReporter,
) -> Result<RenderedScene, EngineError> {
    scene.validate()?;
    let transform = config.transform();
    info!(
        "Rendering scene at center ({}, {}, {}) with zoom {} ({} policy).",
        config.center.x, config.center.y, config.center.z, config.zoom, config.policy
    );

    let circles = reporter.run_phase("Circles", &scene.circles, |shape| {
        let points = shape.transformed(&transform);
        let fit = match CircleFit::from_samples(&points) {
            Ok(fit) => Some(fit),
            Err(e) => {
                warn!(
                    "No circle fit for circle at ({}, {}): {}",
                    shape.center.x, shape.center.y, e
                );
                reporter.report(Progress::Warning(format!(
                    "circle at ({}, {}) has no fit: {}",
                    shape.center.x, shape.center.y, e
                )));
                None
            }
        };
        RenderedCircle {
            shape: *shape,
            points,
            fit,
        }
    });

    let spheres = reporter.run_phase("Spheres", &scene.spheres, |shape| RenderedSphere {
        shape: *shape,
        mesh: shape.mesh(&transform),
    });

    let planes = reporter.run_phase("Planes", &scene.planes, |shape| RenderedPlane {
        shape: *shape,
        vertices: transform.apply_all(&shape.samples()),
        uvs: shape.uvs(),
        indices: shape.indices(),
    });

    let molecule = scene.molecule.as_ref().map(|molecule| {
        reporter.report(Progress::PhaseStart { name: "Molecule" });
        let placed = place_molecule(molecule, &transform);
        debug!(
            "Placed {} atoms and {} bonds.",
            placed.atoms.len(),
            placed.bonds.len()
        );
        reporter.report(Progress::PhaseFinish);
        placed
    });

    info!(
        "Rendered {} circles, {} spheres, {} planes.",
        circles.len(),
        spheres.len(),
        planes.len()
    );

    Ok(RenderedScene {
        config: *config,
        circles,
        spheres,
        planes,
        molecule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::molecule::{Atom, Bond, BondOrder, Molecule};
    use crate::core::transform::ScalingPolicy;
    use crate::engine::config::TransformConfigBuilder;
    use nalgebra::Point2;
    use std::sync::{Arc, Mutex};

    fn config(zoom: f64) -> TransformConfig {
        TransformConfigBuilder::new()
            .center(Point3::new(3.0, 0.0, 0.0))
            .zoom(zoom)
            .policy(ScalingPolicy::Exponential)
            .build()
            .unwrap()
    }

    fn scene() -> Scene {
        Scene {
            circles: vec![
                CircleShape::new(Point2::origin(), 1.0, 64),
                CircleShape::new(Point2::new(0.0, 0.0), 1.0, 2),
            ],
            spheres: vec![SphereShape::new(Point3::new(0.0, 0.0, 0.0), 1.0, 8)],
            planes: vec![PlaneShape::new(4.0, 4)],
            molecule: Some(
                Molecule::new(
                    vec![
                        Atom::new("C", Point3::new(0.0, 0.0, 0.0)),
                        Atom::new("O", Point3::new(1.2, 0.0, 0.0)),
                    ],
                    vec![Bond::new(0, 1, BondOrder::Double)],
                )
                .unwrap(),
            ),
        }
    }

    #[test]
    fn renders_every_part_of_the_scene() {
        let rendered = run(&scene(), &config(0.5), &ProgressReporter::new()).unwrap();

        assert_eq!(rendered.circles.len(), 2);
        assert_eq!(rendered.circles[0].points.len(), 65);
        assert!(rendered.circles[0].fit.is_some());
        assert_eq!(rendered.spheres[0].mesh.triangle_count(), 2 * 8 * 8);
        assert_eq!(rendered.planes[0].vertices.len(), 25);
        assert_eq!(rendered.planes[0].indices.len(), 4 * 4 * 6);

        let molecule = rendered.molecule.unwrap();
        assert_eq!(molecule.atoms.len(), 2);
        assert_eq!(molecule.bonds[0].strands.len(), 2);
    }

    #[test]
    fn degenerate_circle_has_no_fit_and_reports_a_warning() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |p| {
            sink.lock().unwrap().push(p);
        }));

        let rendered = run(&scene(), &config(0.5), &reporter).unwrap();
        assert!(rendered.circles[1].fit.is_none());

        let events = events.lock().unwrap();
        assert!(events.iter().any(|e| matches!(e, Progress::Warning(_))));
        let phases: Vec<&str> = events
            .iter()
            .filter_map(|e| match e {
                Progress::PhaseStart { name } => Some(*name),
                _ => None,
            })
            .collect();
        assert_eq!(phases, ["Circles", "Spheres", "Planes", "Molecule"]);
    }

    #[test]
    fn zero_zoom_leaves_the_plane_in_place() {
        let rendered = run(&scene(), &config(0.0), &ProgressReporter::new()).unwrap();
        let pristine = scene().planes[0].samples();
        for (v, p) in rendered.planes[0].vertices.iter().zip(&pristine) {
            assert!((v - p).norm() < 1e-9);
        }
    }

    #[test]
    fn fitted_circle_matches_the_transformed_samples() {
        let rendered = run(&scene(), &config(1.0), &ProgressReporter::new()).unwrap();
        let circle = &rendered.circles[0];
        let fit = circle.fit.unwrap();
        for p in &circle.points {
            let r = (p.xy() - fit.center).norm();
            assert!((r - fit.radius).abs() / fit.radius < 1e-6);
        }
    }

    #[test]
    fn invalid_scene_is_rejected_before_rendering() {
        let mut scene = scene();
        scene.spheres[0].segments = 0;
        let result = run(&scene, &config(1.0), &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::Scene(_))));
    }
}
