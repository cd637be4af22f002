//! Round simulation engine for Bicopt.
//!
//! Owns the live-entity space (a hecs world), the spawners, round timer and
//! scoring, and drives the host collaborators. Completely headless: the
//! renderer, physics, tracking and audio are reached only through the traits
//! in [`host`].

pub mod cadence;
pub mod components;
pub mod control;
pub mod host;
pub mod launcher;
pub mod placement;
pub mod round_timer;
pub mod score_store;
pub mod session;
pub mod spawner;
pub mod systems;
pub mod world_setup;

pub use bicopt_core as core;
pub use cadence::CadenceToken;
pub use control::{ContactSink, ControlHandle, ControlLoop};
pub use session::GameSession;
