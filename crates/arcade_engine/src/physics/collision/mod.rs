//! Outline collision geometry
//!
//! # Architecture
//!
//! This module follows Game Engine Architecture 3rd Edition (GEA 13.3.4):
//! - **Model Space Storage**: Outlines stored in local coordinates
//! - **On-Demand Transformation**: Outlines transformed to world space only during tests
//! - **Area Semantics**: Two shapes collide only if their interiors overlap
//!
//! # Module Organization
//!
//! - [`primitives`] - Boxes, triangles, triangulation
//! - [`shape`] - Model-space [`Outline`] and its [`WorldSpaceShape`]

pub mod primitives;
pub mod shape;

// Re-export commonly used types
pub use primitives::{Aabb, Triangle};
pub use shape::{Outline, WorldSpaceShape};
