//! Cleanup system: lifespan expiry and end-of-round teardown.

use hecs::{Entity, World};

use bicopt_core::types::{EntityId, SceneHandle};

use crate::components::{Lifespan, SceneBody};
use crate::world_setup;

/// An entity removed because its lifespan ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expired {
    pub id: EntityId,
    pub body: Option<SceneHandle>,
}

/// Despawn every entity whose lifespan ended at or before `now`.
/// Uses a caller-owned buffer to avoid per-tick allocation.
pub fn expire(world: &mut World, now: f64, despawn_buffer: &mut Vec<Entity>) -> Vec<Expired> {
    despawn_buffer.clear();
    for (entity, lifespan) in world.query_mut::<&Lifespan>() {
        if lifespan.is_expired(now) {
            despawn_buffer.push(entity);
        }
    }

    let mut expired = Vec::with_capacity(despawn_buffer.len());
    for entity in despawn_buffer.drain(..) {
        let body = world.get::<&SceneBody>(entity).ok().map(|b| b.handle);
        if world.despawn(entity).is_ok() {
            expired.push(Expired {
                id: world_setup::entity_id(entity),
                body,
            });
        }
    }
    expired
}

/// Despawn everything and return the scene bodies to remove.
pub fn clear_all(world: &mut World) -> Vec<SceneHandle> {
    let bodies = world
        .query_mut::<&SceneBody>()
        .into_iter()
        .map(|(_, body)| body.handle)
        .collect();
    world.clear();
    bodies
}
