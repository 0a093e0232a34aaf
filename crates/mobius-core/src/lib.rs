//! # MobiusView Core Library
//!
//! Conformal "magnifying glass" geometry: a Möbius scaling transform that
//! enlarges the neighborhood of a chosen center while keeping circles
//! circular, applied to sampled curves, meshes and molecular structures.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** The pure transform (`MobiusTransform`),
//!   the shape samplers and circumcircle recovery, molecule and element data,
//!   and scene/CSV I/O.
//!
//! - **[`engine`]: The Stateful Layer.** Validated frame parameters, pristine
//!   sample caches that keep repeated frames from compounding error, atom and
//!   bond placement, and interactive circle zooming.
//!
//! - **[`workflows`]: The Public API.** Transforms a whole scene in one call
//!   and reports progress along the way.

pub mod core;
pub mod engine;
pub mod workflows;
