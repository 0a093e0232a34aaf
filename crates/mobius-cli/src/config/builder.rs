use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, OutputConfig};
use crate::cli::TransformParams;
use crate::error::{CliError, Result};
use crate::utils::parser;
use mobiusview::core::transform::ScalingPolicy;
use mobiusview::engine::config::TransformConfigBuilder;
use nalgebra::Point3;

/// Resolves the final configuration. Precedence, highest first: explicit CLI
/// flags, `-S key=value` overrides, the config file, built-in defaults.
pub fn build_config(args: &TransformParams) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    let transform_file = file_config.transform.take().unwrap_or_default();
    let output_file = file_config.output.take().unwrap_or_default();

    let center = match &args.center {
        Some(text) => {
            parser::parse_point3(text).map_err(|e| CliError::Argument(e.to_string()))?
        }
        None => transform_file
            .center
            .map(Point3::from)
            .unwrap_or(defaults.center),
    };
    let zoom = args.zoom.or(transform_file.zoom).unwrap_or(defaults.zoom);
    let policy = args
        .policy
        .or(transform_file.policy)
        .unwrap_or(defaults.policy);

    let segments = args.segments.or(output_file.segments);
    if segments == Some(0) {
        return Err(CliError::Config(
            "`output.segments` must be positive.".to_string(),
        ));
    }

    let transform = TransformConfigBuilder::new()
        .center(center)
        .zoom(zoom)
        .policy(policy)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        transform,
        output: OutputConfig {
            segments,
            circle_segments: segments.unwrap_or(defaults.circle_segments),
            precision: output_file.precision.unwrap_or(defaults.precision),
        },
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "transform.zoom" => {
                config
                    .transform
                    .get_or_insert_with(Default::default)
                    .zoom = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })?);
            }
            "transform.center" => {
                let center = parser::parse_point3(value_str)
                    .map_err(|e| CliError::Config(format!("Invalid value for {}: {}", key, e)))?;
                config
                    .transform
                    .get_or_insert_with(Default::default)
                    .center = Some([center.x, center.y, center.z]);
            }
            "transform.policy" => {
                config
                    .transform
                    .get_or_insert_with(Default::default)
                    .policy = Some(value_str.parse::<ScalingPolicy>().map_err(|e| {
                    CliError::Config(format!("Invalid value for {}: {}", key, e))
                })?);
            }
            "output.segments" => {
                config.output.get_or_insert_with(Default::default).segments =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
            }
            "output.precision" => {
                config.output.get_or_insert_with(Default::default).precision =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    const FILE_CONFIG: &str = r#"
        [transform]
        center = [1.0, 2.0, 3.0]
        zoom = 0.5
        policy = "linear"

        [output]
        segments = 32
        precision = 4
        "#;

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let app = build_config(&TransformParams::default()).expect("build ok");
        let defaults = DefaultsConfig::default();

        assert_eq!(app.transform.center, defaults.center);
        assert_eq!(app.transform.zoom, defaults.zoom);
        assert_eq!(app.transform.policy, ScalingPolicy::Exponential);
        assert_eq!(app.output.segments, None);
        assert_eq!(app.output.circle_segments, defaults.circle_segments);
        assert_eq!(app.output.precision, defaults.precision);
    }

    #[test]
    fn file_values_are_used() {
        let dir = tempdir().unwrap();
        let args = TransformParams {
            config: Some(write_config(&dir, FILE_CONFIG)),
            ..Default::default()
        };

        let app = build_config(&args).expect("build ok");
        assert_eq!(app.transform.center, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(app.transform.zoom, 0.5);
        assert_eq!(app.transform.policy, ScalingPolicy::Linear);
        assert_eq!(app.output.segments, Some(32));
        assert_eq!(app.output.circle_segments, 32);
        assert_eq!(app.output.precision, 4);
    }

    #[test]
    fn set_values_override_file_values() {
        let dir = tempdir().unwrap();
        let args = TransformParams {
            config: Some(write_config(&dir, FILE_CONFIG)),
            set_values: vec![
                "transform.zoom=-2".to_string(),
                "transform.center=0,0,1".to_string(),
                "transform.policy=distance-weighted".to_string(),
                "output.precision=2".to_string(),
            ],
            ..Default::default()
        };

        let app = build_config(&args).expect("build ok");
        assert_eq!(app.transform.zoom, -2.0);
        assert_eq!(app.transform.center, Point3::new(0.0, 0.0, 1.0));
        assert_eq!(app.transform.policy, ScalingPolicy::DistanceWeighted);
        assert_eq!(app.output.precision, 2);
        assert_eq!(app.output.segments, Some(32));
    }

    #[test]
    fn cli_flags_override_set_values_and_file() {
        let dir = tempdir().unwrap();
        let args = TransformParams {
            config: Some(write_config(&dir, FILE_CONFIG)),
            zoom: Some(1.25),
            center: Some("5,5,5".to_string()),
            policy: Some(ScalingPolicy::Exponential),
            segments: Some(200),
            set_values: vec!["transform.zoom=-2".to_string()],
        };

        let app = build_config(&args).expect("build ok");
        assert_eq!(app.transform.zoom, 1.25);
        assert_eq!(app.transform.center, Point3::new(5.0, 5.0, 5.0));
        assert_eq!(app.transform.policy, ScalingPolicy::Exponential);
        assert_eq!(app.output.segments, Some(200));
    }

    #[test]
    fn malformed_set_value_is_rejected() {
        let args = TransformParams {
            set_values: vec!["transform.zoom".to_string()],
            ..Default::default()
        };
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn unsupported_set_key_is_rejected() {
        let args = TransformParams {
            set_values: vec!["transform.scale=2".to_string()],
            ..Default::default()
        };
        let result = build_config(&args);
        match result {
            Err(CliError::Config(msg)) => assert!(msg.contains("transform.scale")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn non_finite_zoom_is_rejected_by_the_core_builder() {
        let args = TransformParams {
            zoom: Some(f64::NAN),
            ..Default::default()
        };
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn zero_segments_are_rejected() {
        let args = TransformParams {
            segments: Some(0),
            ..Default::default()
        };
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn bad_center_flag_is_an_argument_error() {
        let args = TransformParams {
            center: Some("1,2".to_string()),
            ..Default::default()
        };
        assert!(matches!(build_config(&args), Err(CliError::Argument(_))));
    }
}
