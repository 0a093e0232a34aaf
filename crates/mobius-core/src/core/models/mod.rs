//! Molecular data consumed by the placement engine.
//!
//! - [`molecule`] - atoms, bonds and bond orders
//! - [`elements`] - per-element display radii and colors
//! - [`placed`] - transformed atoms and bond strands ready for display

pub mod elements;
pub mod molecule;
pub mod placed;
