//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] shapes and the
//! [`crate::engine`] machinery together.
//!
//! - **Render Workflow** ([`render`]) - Transforms every shape and the molecule
//!   of a scene for one frame, recovering circle fits along the way.

pub mod render;
