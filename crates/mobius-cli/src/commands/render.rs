use crate::cli::RenderArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use mobiusview::core::io::export::{
    atom_records, bond_records, circle_fit_record, export_records, point_records,
    triangle_records, uv_records,
};
use mobiusview::core::io::scene::Scene;
use mobiusview::engine::config::{TransformConfig, TransformConfigBuilder};
use mobiusview::engine::progress::ProgressReporter;
use mobiusview::engine::selection::nudge_center;
use mobiusview::workflows::render::{self, RenderedScene};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: RenderArgs, quiet: bool) -> Result<()> {
    let app = build_config(&args.params)?;

    info!("Loading scene from {:?}", &args.input);
    let mut scene = Scene::load(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;
    if let Some(segments) = app.output.segments {
        override_segments(&mut scene, segments);
    }

    let config = match args.pick_atom {
        Some(index) => center_on_atom(&scene, index, &app.transform)?,
        None => app.transform,
    };

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Rendering scene...");
    info!("Invoking the core render workflow...");
    let rendered = render::run(&scene, &config, &reporter)?;

    std::fs::create_dir_all(&args.output)?;
    let written = write_tables(&rendered, &args.output)?;
    println!(
        "✓ Wrote {} table(s) to: {}",
        written.len(),
        args.output.display()
    );
    Ok(())
}

fn override_segments(scene: &mut Scene, segments: u32) {
    for circle in &mut scene.circles {
        circle.segments = segments;
    }
    for sphere in &mut scene.spheres {
        sphere.segments = segments;
    }
    for plane in &mut scene.planes {
        plane.resolution = segments;
    }
}

fn center_on_atom(
    scene: &Scene,
    index: usize,
    base: &TransformConfig,
) -> Result<TransformConfig> {
    let atom = scene
        .molecule
        .as_ref()
        .and_then(|m| m.atom(index))
        .ok_or_else(|| CliError::Argument(format!("Scene has no atom with index {}", index)))?;
    info!("Centering the transform on atom {} ({}).", index, atom.symbol);
    TransformConfigBuilder::new()
        .center(nudge_center(&atom.position))
        .zoom(base.zoom)
        .policy(base.policy)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn labels(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}-{}", prefix, i)).collect()
}

fn export_table<R: Serialize>(
    dir: &Path,
    name: &str,
    records: &[R],
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    let path = dir.join(name);
    export_records(&path, records)?;
    info!("Wrote {} row(s) to {:?}", records.len(), &path);
    written.push(path);
    Ok(())
}

/// Writes one CSV table per kind of geometry and returns the paths written.
fn write_tables(rendered: &RenderedScene, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    let circle_labels = labels("circle", rendered.circles.len());
    let circle_points: Vec<_> = rendered
        .circles
        .iter()
        .zip(&circle_labels)
        .flat_map(|(c, label)| point_records(label, &c.points))
        .collect();
    let circle_fits: Vec<_> = rendered
        .circles
        .iter()
        .zip(&circle_labels)
        .map(|(c, label)| circle_fit_record(label, c.fit.as_ref()))
        .collect();
    export_table(dir, "circle_points.csv", &circle_points, &mut written)?;
    export_table(dir, "circle_fits.csv", &circle_fits, &mut written)?;

    let sphere_labels = labels("sphere", rendered.spheres.len());
    let sphere_vertices: Vec<_> = rendered
        .spheres
        .iter()
        .zip(&sphere_labels)
        .flat_map(|(s, label)| point_records(label, &s.mesh.points()))
        .collect();
    let sphere_triangles: Vec<_> = rendered
        .spheres
        .iter()
        .zip(&sphere_labels)
        .flat_map(|(s, label)| triangle_records(label, &s.mesh.indices))
        .collect();
    let sphere_uvs: Vec<_> = rendered
        .spheres
        .iter()
        .zip(&sphere_labels)
        .flat_map(|(s, label)| uv_records(label, &s.mesh.uvs))
        .collect();
    export_table(dir, "sphere_vertices.csv", &sphere_vertices, &mut written)?;
    export_table(dir, "sphere_triangles.csv", &sphere_triangles, &mut written)?;
    export_table(dir, "sphere_uvs.csv", &sphere_uvs, &mut written)?;

    let plane_labels = labels("plane", rendered.planes.len());
    let plane_vertices: Vec<_> = rendered
        .planes
        .iter()
        .zip(&plane_labels)
        .flat_map(|(p, label)| point_records(label, &p.vertices))
        .collect();
    let plane_triangles: Vec<_> = rendered
        .planes
        .iter()
        .zip(&plane_labels)
        .flat_map(|(p, label)| triangle_records(label, &p.indices))
        .collect();
    let plane_uvs: Vec<_> = rendered
        .planes
        .iter()
        .zip(&plane_labels)
        .flat_map(|(p, label)| uv_records(label, &p.uvs))
        .collect();
    export_table(dir, "plane_vertices.csv", &plane_vertices, &mut written)?;
    export_table(dir, "plane_triangles.csv", &plane_triangles, &mut written)?;
    export_table(dir, "plane_uvs.csv", &plane_uvs, &mut written)?;

    if let Some(molecule) = &rendered.molecule {
        export_table(dir, "atoms.csv", &atom_records(&molecule.atoms), &mut written)?;
        export_table(dir, "bonds.csv", &bond_records(&molecule.bonds), &mut written)?;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobiusview::core::shapes::SphereShape;
    use mobiusview::engine::error::EngineError;
    use mobiusview::core::transform::ScalingPolicy;
    use nalgebra::Point3;
    use std::fs;
    use tempfile::tempdir;

    const SCENE: &str = r#"
        [[circles]]
        center = [0.0, 0.0]
        radius = 1.0
        segments = 16

        [[planes]]
        size = 2.0
        resolution = 2

        [molecule]
        atoms = [
            { symbol = "C", position = [0.0, 0.0, 0.0] },
            { symbol = "O", position = [1.2, 0.0, 0.0] },
        ]
        bonds = [{ start = 0, end = 1, order = 2 }]
    "#;

    fn base_config() -> TransformConfig {
        TransformConfigBuilder::new()
            .center(Point3::new(3.0, 0.0, 0.0))
            .zoom(1.0)
            .policy(ScalingPolicy::Linear)
            .build()
            .unwrap()
    }

    #[test]
    fn center_on_atom_nudges_the_atom_position() {
        let scene = Scene::parse_str(SCENE).unwrap();
        let config = center_on_atom(&scene, 1, &base_config()).unwrap();
        assert_eq!(config.center, nudge_center(&Point3::new(1.2, 0.0, 0.0)));
        assert_eq!(config.zoom, 1.0);
        assert_eq!(config.policy, ScalingPolicy::Linear);
    }

    #[test]
    fn center_on_missing_atom_is_an_argument_error() {
        let scene = Scene::parse_str(SCENE).unwrap();
        let result = center_on_atom(&scene, 9, &base_config());
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn segment_override_applies_to_every_sampled_shape() {
        let mut scene = Scene::parse_str(SCENE).unwrap();
        scene.spheres.push(SphereShape::new(Point3::origin(), 1.0, 12));
        override_segments(&mut scene, 5);
        assert_eq!(scene.circles[0].segments, 5);
        assert_eq!(scene.spheres[0].segments, 5);
        assert_eq!(scene.planes[0].resolution, 5);
    }

    #[test]
    fn oversized_segment_override_fails_scene_validation() {
        let mut scene = Scene::parse_str(SCENE).unwrap();
        override_segments(&mut scene, 70_000);
        let result = render::run(&scene, &base_config(), &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::Scene(_))));
    }

    #[test]
    fn every_table_is_written() {
        let scene = Scene::parse_str(SCENE).unwrap();
        let rendered = render::run(&scene, &base_config(), &ProgressReporter::new()).unwrap();
        let dir = tempdir().unwrap();

        let written = write_tables(&rendered, dir.path()).unwrap();
        assert_eq!(written.len(), 10);

        let points = fs::read_to_string(dir.path().join("circle_points.csv")).unwrap();
        assert_eq!(points.lines().count(), 1 + 17);
        let bonds = fs::read_to_string(dir.path().join("bonds.csv")).unwrap();
        assert_eq!(bonds.lines().count(), 1 + 2);
        let plane_uvs = fs::read_to_string(dir.path().join("plane_uvs.csv")).unwrap();
        assert_eq!(plane_uvs.lines().count(), 1 + 9);
        assert_eq!(plane_uvs.lines().nth(1), Some("plane-0,0,0.0,1.0"));
        let sphere_uvs = fs::read_to_string(dir.path().join("sphere_uvs.csv")).unwrap();
        assert!(sphere_uvs.is_empty());
    }
}
