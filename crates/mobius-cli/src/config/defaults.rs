use mobiusview::core::transform::ScalingPolicy;
use nalgebra::Point3;

pub struct DefaultsConfig {
    pub center: Point3<f64>,
    pub zoom: f64,
    pub policy: ScalingPolicy,
    pub circle_segments: u32,
    pub precision: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            zoom: 0.0,
            policy: ScalingPolicy::default(),
            circle_segments: 64,
            precision: 6,
        }
    }
}
