//! Physics module for collision detection
//!
//! Outline geometry lives in [`collision`]; the pairwise sweep that
//! dispatches overlapping entities lives in [`collision_system`].

pub mod collision;
pub mod collision_system;

pub use collision::{Aabb, Outline, Triangle, WorldSpaceShape};
pub use collision_system::{CollisionPair, CollisionSystem, SweepStats};
