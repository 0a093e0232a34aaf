//! # Engine Module
//!
//! Stateful machinery around the pure transform: validated frame parameters,
//! pristine-sample caches, molecule placement and interactive selection.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Frame parameters and their builder
//! - **Baselines** ([`baseline`]) - Pristine samples captured once per shape
//! - **Placement** ([`placement`]) - Display geometry for atoms and bonds
//! - **Selection** ([`selection`]) - Picking a center and zooming into circles
//! - **Progress Monitoring** ([`progress`]) - Progress reporting callbacks
//! - **Error Handling** ([`error`]) - Engine-level error aggregation

pub mod baseline;
pub mod config;
pub mod error;
pub mod placement;
pub mod progress;
pub mod selection;
