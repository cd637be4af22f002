//! Entity spawn factories.
//!
//! Each factory spawns the entity first so its id can be handed to the scene
//! host, then attaches the host's body handle.

use hecs::World;

use bicopt_core::constants::FADE_OUT_SECS;
use bicopt_core::enums::BodyRole;
use bicopt_core::types::EntityId;

use crate::components::*;
use crate::host::{SceneHost, SpawnRequest};
use crate::launcher::ProjectileSpawn;
use crate::spawner::HostileSpawn;

/// Public id for a hecs entity.
pub fn entity_id(entity: hecs::Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

/// Resolve a public id. `None` for ids that were never valid; liveness is
/// checked separately with `World::contains`.
pub fn resolve(id: EntityId) -> Option<hecs::Entity> {
    hecs::Entity::from_bits(id.0)
}

fn request(id: EntityId, role: BodyRole) -> SpawnRequest {
    SpawnRequest {
        id,
        role,
        position: Default::default(),
        impulse: Default::default(),
        impulse_offset: Default::default(),
        lifespan_secs: 0.0,
        fade_out_secs: FADE_OUT_SECS,
        category: role.category(),
        collision_mask: role.collision_mask(),
        contact_test_mask: role.contact_test_mask(),
    }
}

/// Spawn a hostile target and its scene body.
pub fn spawn_hostile(
    world: &mut World,
    scene: &mut dyn SceneHost,
    spawn: &HostileSpawn,
    now: f64,
) -> EntityId {
    let entity = world.spawn((
        Hostile { kind: spawn.kind },
        Lifespan::new(now, spawn.lifespan_secs),
    ));
    let id = entity_id(entity);
    let handle = scene.spawn_entity(SpawnRequest {
        position: spawn.position,
        impulse: spawn.impulse,
        lifespan_secs: spawn.lifespan_secs,
        ..request(id, BodyRole::Hostile(spawn.kind))
    });
    let _ = world.insert_one(entity, SceneBody { handle });
    id
}

/// Spawn a projectile and its scene body.
pub fn spawn_projectile(
    world: &mut World,
    scene: &mut dyn SceneHost,
    spawn: &ProjectileSpawn,
    now: f64,
) -> EntityId {
    let entity = world.spawn((Projectile, Lifespan::new(now, spawn.lifespan_secs)));
    let id = entity_id(entity);
    let handle = scene.spawn_entity(SpawnRequest {
        position: spawn.position,
        impulse: spawn.impulse,
        impulse_offset: spawn.impulse_offset,
        lifespan_secs: spawn.lifespan_secs,
        ..request(id, BodyRole::Projectile)
    });
    let _ = world.insert_one(entity, SceneBody { handle });
    id
}
