//! Reading scene descriptions and writing transformed geometry.
//!
//! Scenes are TOML documents listing the shapes to transform and, optionally,
//! an already-parsed molecule. Results are written as CSV tables, one table per
//! kind of geometry, so that any renderer can pick them up.

pub mod export;
pub mod scene;
