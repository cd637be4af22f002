//! ECS components for live round entities.

use bicopt_core::enums::{BodyRole, HostileKind};
use bicopt_core::types::SceneHandle;

/// Marker + kind for spawned targets.
#[derive(Debug, Clone, Copy)]
pub struct Hostile {
    pub kind: HostileKind,
}

/// Marker for player-fired rounds.
#[derive(Debug, Clone, Copy)]
pub struct Projectile;

/// Link to the body the scene host created.
#[derive(Debug, Clone, Copy)]
pub struct SceneBody {
    pub handle: SceneHandle,
}

/// Fade-and-remove deadline.
#[derive(Debug, Clone, Copy)]
pub struct Lifespan {
    pub spawned_at: f64,
    pub expires_at: f64,
}

impl Lifespan {
    pub fn new(spawned_at: f64, lifespan_secs: f64) -> Self {
        Self {
            spawned_at,
            expires_at: spawned_at + lifespan_secs,
        }
    }

    pub fn is_expired(&self, now: f64) -> bool {
        now >= self.expires_at
    }
}

/// Role of a live entity, read from its components.
pub fn role_of(world: &hecs::World, entity: hecs::Entity) -> Option<BodyRole> {
    if let Ok(hostile) = world.get::<&Hostile>(entity) {
        return Some(BodyRole::Hostile(hostile.kind));
    }
    if world.get::<&Projectile>(entity).is_ok() {
        return Some(BodyRole::Projectile);
    }
    None
}
