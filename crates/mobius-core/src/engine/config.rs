use crate::core::transform::{MobiusTransform, ScalingPolicy};
use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Parameter '{0}' must be finite")]
    NonFinite(&'static str),
}

/// The parameters of one frame: where the transform is anchored, how far it
/// zooms, and which factor policy turns the zoom into a scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformConfig {
    pub center: Point3<f64>,
    pub zoom: f64,
    pub policy: ScalingPolicy,
}

impl TransformConfig {
    pub fn transform(&self) -> MobiusTransform {
        MobiusTransform::new(self.center, self.zoom, self.policy)
    }
}

#[derive(Default)]
pub struct TransformConfigBuilder {
    center: Option<Point3<f64>>,
    zoom: Option<f64>,
    policy: Option<ScalingPolicy>,
}

impl TransformConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(mut self, center: Point3<f64>) -> Self {
        self.center = Some(center);
        self
    }
    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }
    pub fn policy(mut self, policy: ScalingPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn build(self) -> Result<TransformConfig, ConfigError> {
        let center = self
            .center
            .ok_or(ConfigError::MissingParameter("center"))?;
        if !center.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::NonFinite("center"));
        }
        let zoom = self.zoom.ok_or(ConfigError::MissingParameter("zoom"))?;
        if !zoom.is_finite() {
            return Err(ConfigError::NonFinite("zoom"));
        }
        Ok(TransformConfig {
            center,
            zoom,
            policy: self.policy.unwrap_or_default(),
        })
    }
}
