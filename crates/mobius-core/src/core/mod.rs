//! # Core Module
//!
//! The stateless foundation of the library: the transform itself, the shapes
//! it is applied to, molecular data, and file I/O.
//!
//! ## Architecture
//!
//! - **Transform** ([`transform`]) - Sphere inversion, scaling policies and the composed Möbius map
//! - **Shapes** ([`shapes`]) - Circle, sphere and plane samplers plus circumcircle recovery
//! - **Molecular Representation** ([`models`]) - Atoms, bonds and per-element display data
//! - **File I/O** ([`io`]) - TOML scene loading and CSV geometry export
//!
//! Everything here is a pure function of its inputs. Identical inputs give
//! bit-identical outputs, which lets callers cache and compare frames freely.

pub mod io;
pub mod models;
pub mod shapes;
pub mod transform;
