//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Hostile target kind. Determines score value, cadence and lifespan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileKind {
    /// Small, slow, frequent target.
    Minor,
    /// Fast, short-lived, rarer target worth more points.
    Major,
}

/// Role of a body participating in a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "role", content = "kind")]
pub enum BodyRole {
    /// Player-fired round.
    Projectile,
    /// Spawned target.
    Hostile(HostileKind),
}

/// Round lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Placement smoothing active; no entities, no timers.
    #[default]
    Idle,
    /// Spawners and round timer running, score accumulating.
    Active,
    /// Round over. Terminal for the session.
    Ended,
}

/// Round timer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerState {
    #[default]
    Stopped,
    Running,
    Expired,
}

/// Fire-and-forget audio/visual cues requested from the effects host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Player fired a round.
    Shot,
    /// A projectile hit a target.
    Explosion,
    /// Looping music started when the round begins.
    BackgroundMusic,
}

bitflags::bitflags! {
    /// Physics collision categories handed to the scene host at spawn.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionCategory: u32 {
        const PROJECTILE = 1 << 0;
        const TARGET = 1 << 1;
    }
}

impl HostileKind {
    /// Points awarded when a projectile hits this kind.
    pub fn score_value(self) -> u32 {
        match self {
            HostileKind::Minor => crate::constants::MINOR_SCORE,
            HostileKind::Major => crate::constants::MAJOR_SCORE,
        }
    }
}

impl BodyRole {
    /// Category bit this role occupies.
    pub fn category(self) -> CollisionCategory {
        match self {
            BodyRole::Projectile => CollisionCategory::PROJECTILE,
            BodyRole::Hostile(_) => CollisionCategory::TARGET,
        }
    }

    /// Categories this role physically collides with.
    pub fn collision_mask(self) -> CollisionCategory {
        match self {
            BodyRole::Projectile => CollisionCategory::TARGET,
            BodyRole::Hostile(_) => CollisionCategory::empty(),
        }
    }

    /// Categories whose contacts should be reported for this role.
    pub fn contact_test_mask(self) -> CollisionCategory {
        match self {
            BodyRole::Projectile => CollisionCategory::empty(),
            BodyRole::Hostile(_) => CollisionCategory::PROJECTILE,
        }
    }
}

impl Effect {
    /// Asset name the effects host plays for this cue.
    pub fn asset_name(self) -> &'static str {
        match self {
            Effect::Shot => "mossbergShotgun.wav",
            Effect::Explosion => "explosion.mp3",
            Effect::BackgroundMusic => "sarth.aiff",
        }
    }
}
