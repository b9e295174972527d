//! # Asteroids
//!
//! Simulation core of the classic vector arcade game, built on
//! [`arcade_engine`].
//!
//! The [`Controller`](controller::Controller) owns every participant and
//! runs the level/life state machine. Windows, keyboards, speakers and
//! screens stay outside: the controller reads an
//! [`InputSource`](input::InputSource), plays through a
//! [`SoundSink`](sound::SoundSink) and hands a [`Frame`](render::Frame) to
//! whatever [`Renderer`](render::Renderer) the host provides.

#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod collision;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod participants;
pub mod render;
pub mod sound;

pub use config::GameConfig;
pub use controller::{Controller, Phase};
pub use error::GameError;
