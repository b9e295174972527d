//! Entity storage
//!
//! Provides the [`Entity`] trait and the arena-backed [`EntityRegistry`]
//! that supports mutation while a traversal is in progress.

pub mod entity;
pub mod registry;

pub use entity::{Entity, EntityId};
pub use registry::EntityRegistry;
