//! Events flowing into and out of the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EntityId, Vector3};

/// One participant of a physics contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBody {
    pub id: EntityId,
    pub role: BodyRole,
}

/// Contact reported by the physics host between two bodies whose
/// collision masks intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEvent {
    pub a: ContactBody,
    pub b: ContactBody,
}

/// Events emitted by the session for UI binding and diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// Placement confirmed and the round has begun.
    RoundStarted { anchor: Vector3, yaw: f32 },
    /// A hostile target was spawned.
    HostileSpawned { id: EntityId, kind: HostileKind },
    /// The player fired a projectile.
    ProjectileFired { id: EntityId },
    /// A projectile hit a target.
    TargetHit {
        projectile: EntityId,
        hostile: EntityId,
        kind: HostileKind,
        points: u32,
    },
    /// An entity reached the end of its lifespan.
    Expired { id: EntityId },
    /// Round timer ticked.
    TimeRemaining { seconds: u32 },
    /// Score changed.
    ScoreChanged { score: u32 },
    /// Round over. Emitted exactly once per session.
    RoundComplete { final_score: u32 },
}

impl ContactBody {
    pub fn new(id: EntityId, role: BodyRole) -> Self {
        Self { id, role }
    }
}

impl ContactEvent {
    pub fn new(a: ContactBody, b: ContactBody) -> Self {
        Self { a, b }
    }
}
