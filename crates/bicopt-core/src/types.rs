//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 3D coordinate or direction in scene space (meters).
/// Rig-local axes: x = right, y = up, z = toward the player.
pub type Vector3 = glam::Vec3;

/// Opaque id of a live entity in the round's entity space.
///
/// Ids are generational: once an entity is removed its id never refers to
/// another entity, so a stale id simply fails to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Handle issued by the scene host for the body it created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneHandle(pub u64);

/// Where the player is aiming: camera forward and camera position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aim {
    pub direction: Vector3,
    pub position: Vector3,
}

/// Proof that a periodic tick was scheduled under a given cadence
/// generation. Stale tickets (issued before a stop) never fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickTicket {
    pub generation: u64,
}

/// Logical session time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of host ticks processed.
    pub tick: u64,
    /// Elapsed logical time in seconds.
    pub elapsed_secs: f64,
}

impl Aim {
    pub fn new(direction: Vector3, position: Vector3) -> Self {
        Self {
            direction,
            position,
        }
    }

    /// Aim used when the tracker has no camera frame yet.
    pub fn fallback() -> Self {
        Self {
            direction: crate::constants::FALLBACK_AIM_DIRECTION,
            position: crate::constants::FALLBACK_AIM_POSITION,
        }
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{:x}", self.0)
    }
}

impl SimTime {
    /// Advance by one host tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
