//! Systems that operate on the live-entity world.
//!
//! Systems are plain functions over `&mut World` (or `&World` for reads).
//! They hold no state of their own; the session owns everything.

pub mod cleanup;
pub mod collision;
pub mod snapshot;
