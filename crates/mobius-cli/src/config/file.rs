use crate::error::{CliError, Result};
use mobiusview::core::transform::ScalingPolicy;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileTransformConfig {
    pub center: Option<[f64; 3]>,
    pub zoom: Option<f64>,
    pub policy: Option<ScalingPolicy>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileOutputConfig {
    pub segments: Option<u32>,
    pub precision: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub transform: Option<FileTransformConfig>,
    pub output: Option<FileOutputConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_both_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [transform]
            center = [1.0, 0.0, -2.0]
            zoom = 0.75
            policy = "distance-weighted"

            [output]
            segments = 128
            precision = 3
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        let transform = config.transform.unwrap();
        assert_eq!(transform.center, Some([1.0, 0.0, -2.0]));
        assert_eq!(transform.zoom, Some(0.75));
        assert_eq!(transform.policy, Some(ScalingPolicy::DistanceWeighted));
        assert_eq!(config.output.unwrap().segments, Some(128));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[transform]\nscale = 2.0\n").unwrap();
        assert!(matches!(
            FileConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
