//! Contact resolution: scores projectile hits and removes both bodies.

use hecs::World;

use bicopt_core::enums::{BodyRole, HostileKind};
use bicopt_core::events::ContactEvent;
use bicopt_core::types::{EntityId, SceneHandle};

use crate::components::{role_of, SceneBody};
use crate::world_setup;

/// Points added to the round score by one contact.
pub type ScoreDelta = u32;

/// A contact that scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub projectile: EntityId,
    pub hostile: EntityId,
    pub kind: HostileKind,
    pub points: ScoreDelta,
    pub projectile_body: Option<SceneHandle>,
    pub hostile_body: Option<SceneHandle>,
}

/// Score for a contact pair: the higher value if either side is Major.
/// Pairs without one projectile and one hostile score nothing.
pub fn score_for(a: BodyRole, b: BodyRole) -> ScoreDelta {
    match (a, b) {
        (BodyRole::Projectile, BodyRole::Hostile(kind))
        | (BodyRole::Hostile(kind), BodyRole::Projectile) => kind.score_value(),
        _ => 0,
    }
}

/// Resolve one reported contact.
///
/// Both participants are looked up in the live world and classified by
/// their stored roles; the roles the host reported are only checked and
/// logged. Returns `None` (and touches nothing) when either participant is
/// no longer live or the pair is not one projectile and one hostile. Both
/// participants are despawned otherwise, so a second contact naming either
/// of them is a no-op.
pub fn resolve(world: &mut World, event: &ContactEvent) -> Option<Hit> {
    let a = live(world, event.a.id)?;
    let b = live(world, event.b.id)?;
    if a == b {
        return None;
    }
    let role_a = role_of(world, a)?;
    let role_b = role_of(world, b)?;

    for (reported, stored) in [(event.a, role_a), (event.b, role_b)] {
        if reported.role != stored {
            log::warn!(
                "Contact reported {} as {:?}, stored as {:?}",
                reported.id,
                reported.role,
                stored
            );
        }
    }

    let (projectile, hostile, kind) = match (role_a, role_b) {
        (BodyRole::Projectile, BodyRole::Hostile(kind)) => (a, b, kind),
        (BodyRole::Hostile(kind), BodyRole::Projectile) => (b, a, kind),
        _ => return None,
    };

    let projectile_body = body_of(world, projectile);
    let hostile_body = body_of(world, hostile);
    // Both were checked live above.
    let projectile_gone = world.despawn(projectile).is_ok();
    let hostile_gone = world.despawn(hostile).is_ok();
    debug_assert!(projectile_gone && hostile_gone);

    Some(Hit {
        projectile: world_setup::entity_id(projectile),
        hostile: world_setup::entity_id(hostile),
        kind,
        points: score_for(role_a, role_b),
        projectile_body,
        hostile_body,
    })
}

fn live(world: &World, id: EntityId) -> Option<hecs::Entity> {
    world_setup::resolve(id).filter(|entity| world.contains(*entity))
}

fn body_of(world: &World, entity: hecs::Entity) -> Option<SceneHandle> {
    world.get::<&SceneBody>(entity).ok().map(|body| body.handle)
}
