use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Factor applied by the distance-weighted policy when the inverted point sits
/// exactly on the center, where `e^0 = 1` would otherwise cancel the zoom.
pub const DISTANCE_WEIGHTED_CENTER_FACTOR: f64 = 0.8;

/// Selects how the zoom parameter `L` becomes the scale factor applied between
/// the two inversions of a Möbius scaling transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalingPolicy {
    /// `factor = L`.
    Linear,
    /// `factor = 2^L`. Identity at `L = 0` with symmetric growth and decay.
    #[default]
    Exponential,
    /// `factor = 1 + (L - 1) * e^(-|w - P|)`, with `0.8 * L` at zero distance.
    DistanceWeighted,
}

impl ScalingPolicy {
    pub const ALL: [ScalingPolicy; 3] = [
        ScalingPolicy::Linear,
        ScalingPolicy::Exponential,
        ScalingPolicy::DistanceWeighted,
    ];

    /// Computes the scale factor for the once-inverted point `inverted`.
    ///
    /// `center` is only consulted by [`ScalingPolicy::DistanceWeighted`].
    #[inline]
    pub fn factor(&self, zoom: f64, inverted: &Point3<f64>, center: &Point3<f64>) -> f64 {
        match self {
            Self::Linear => zoom,
            Self::Exponential => zoom.exp2(),
            Self::DistanceWeighted => {
                let dist = nalgebra::distance(inverted, center);
                if dist == 0.0 {
                    DISTANCE_WEIGHTED_CENTER_FACTOR * zoom
                } else {
                    1.0 + (zoom - 1.0) * (-dist).exp()
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Exponential => "exponential",
            Self::DistanceWeighted => "distance-weighted",
        }
    }
}

/// Scales `z` componentwise about the origin (not about the transform center).
#[inline]
pub fn scale(z: &Point3<f64>, factor: f64) -> Point3<f64> {
    Point3::from(z.coords * factor)
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error(
    "Unknown scaling policy '{0}'. Expected 'linear', 'exponential' or 'distance-weighted'."
)]
pub struct ParseScalingPolicyError(pub String);

impl FromStr for ScalingPolicy {
    type Err = ParseScalingPolicyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" | "lin" => Ok(Self::Linear),
            "exponential" | "exp" => Ok(Self::Exponential),
            "distance-weighted" | "distance_weighted" | "relative" => Ok(Self::DistanceWeighted),
            _ => Err(ParseScalingPolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for ScalingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn linear_factor_is_the_zoom_itself() {
        let p = Point3::origin();
        let w = Point3::new(1.0, 1.0, 1.0);
        assert!(f64_approx_equal(ScalingPolicy::Linear.factor(0.5, &w, &p), 0.5));
        assert!(f64_approx_equal(ScalingPolicy::Linear.factor(-2.0, &w, &p), -2.0));
    }

    #[test]
    fn exponential_factor_is_power_of_two() {
        let p = Point3::origin();
        let w = Point3::new(3.0, 0.0, 0.0);
        assert!(f64_approx_equal(ScalingPolicy::Exponential.factor(0.0, &w, &p), 1.0));
        assert!(f64_approx_equal(ScalingPolicy::Exponential.factor(3.0, &w, &p), 8.0));
        assert!(f64_approx_equal(ScalingPolicy::Exponential.factor(-1.0, &w, &p), 0.5));
    }

    #[test]
    fn distance_weighted_factor_decays_towards_one_with_distance() {
        let p = Point3::origin();
        let near = ScalingPolicy::DistanceWeighted.factor(3.0, &Point3::new(0.1, 0.0, 0.0), &p);
        let far = ScalingPolicy::DistanceWeighted.factor(3.0, &Point3::new(10.0, 0.0, 0.0), &p);
        assert!(f64_approx_equal(near, 1.0 + 2.0 * (-0.1f64).exp()));
        assert!(near > far);
        assert!((far - 1.0).abs() < 1e-3);
    }

    #[test]
    fn distance_weighted_factor_uses_direct_policy_at_zero_distance() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let factor = ScalingPolicy::DistanceWeighted.factor(2.5, &p, &p);
        assert!(f64_approx_equal(factor, 2.0));
    }

    #[test]
    fn scale_is_relative_to_origin() {
        let scaled = scale(&Point3::new(1.0, -2.0, 4.0), 0.5);
        assert_eq!(scaled, Point3::new(0.5, -1.0, 2.0));
    }

    #[test]
    fn policy_parses_from_names_and_aliases() {
        assert_eq!("linear".parse(), Ok(ScalingPolicy::Linear));
        assert_eq!("EXP".parse(), Ok(ScalingPolicy::Exponential));
        assert_eq!(
            "distance-weighted".parse(),
            Ok(ScalingPolicy::DistanceWeighted)
        );
        assert!("cubic".parse::<ScalingPolicy>().is_err());
    }

    #[test]
    fn policy_display_round_trips_through_from_str() {
        for policy in ScalingPolicy::ALL {
            assert_eq!(policy.to_string().parse(), Ok(policy));
        }
    }
}
