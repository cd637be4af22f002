//! Core types and definitions for the Bicopt round simulation.
//!
//! This crate defines the vocabulary shared between the engine and its host:
//! geometric types, contact events, host commands, the round snapshot,
//! tuning constants and configuration. It has no dependency on any
//! rendering, physics or audio framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
