//! Builds `SessionSnapshot`s for the host.

use hecs::World;

use bicopt_core::enums::TimerState;
use bicopt_core::state::{RoundState, SessionSnapshot};
use bicopt_core::types::SimTime;

use crate::components::{Hostile, Projectile};

/// Running counters kept by the session alongside the round state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundStats {
    pub projectiles_fired: u32,
    pub hits: u32,
}

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    round: RoundState,
    timer: TimerState,
    stats: &RoundStats,
) -> SessionSnapshot {
    let live_hostiles = world.query::<&Hostile>().iter().count() as u32;
    let live_projectiles = world.query::<&Projectile>().iter().count() as u32;

    SessionSnapshot {
        round,
        time: *time,
        timer,
        live_hostiles,
        live_projectiles,
        projectiles_fired: stats.projectiles_fired,
        hits: stats.hits,
    }
}
