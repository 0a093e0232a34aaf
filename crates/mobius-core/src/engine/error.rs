use super::config::ConfigError;
use crate::core::io::scene::SceneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid transform configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),
}
