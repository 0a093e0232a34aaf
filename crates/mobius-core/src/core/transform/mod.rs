//! The Möbius scaling transform: inversion through a sphere around a
//! movable center, a scale, and a second inversion.
//!
//! - [`inversion`] - sphere inversion with an explicit singular case
//! - [`scaling`] - the zoom-to-factor policies
//! - [`mobius`] - the composed transform and its fallback semantics

pub mod inversion;
pub mod mobius;
pub mod scaling;

pub use mobius::{InversionStage, MobiusTransform, TransformError, mobius_scaling_transform};
pub use scaling::ScalingPolicy;
