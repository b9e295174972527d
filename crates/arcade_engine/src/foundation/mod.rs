//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and the entity pose
//! - Time sources and tick pacing
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
