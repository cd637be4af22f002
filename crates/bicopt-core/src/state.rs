//! Round state snapshot exposed to the host for UI binding.

use serde::{Deserialize, Serialize};

use crate::enums::{RoundPhase, TimerState};
use crate::types::SimTime;

/// Read-only view of the round. The session is the only writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub seconds_remaining: u32,
    pub score: u32,
    pub phase: RoundPhase,
}

/// Extended snapshot with diagnostics the UI may show.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub round: RoundState,
    pub time: SimTime,
    pub timer: TimerState,
    pub live_hostiles: u32,
    pub live_projectiles: u32,
    pub projectiles_fired: u32,
    pub hits: u32,
}
