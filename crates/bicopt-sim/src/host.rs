//! Collaborator contracts the session drives.
//!
//! Rendering, physics, tracking, audio and persistence live outside the
//! core. The session reaches them only through these traits; every call is
//! made from the control thread.

use bicopt_core::enums::{BodyRole, CollisionCategory, Effect};
use bicopt_core::error::StoreError;
use bicopt_core::types::{Aim, EntityId, SceneHandle, Vector3};

use crate::control::ContactSink;

/// Camera and surface tracking.
pub trait SurfaceTracker: Send {
    /// Surface hit under the screen center this frame, if any.
    fn current_placement_candidate(&self) -> Option<Vector3>;
    /// Camera forward and position, if a camera frame is available.
    fn current_aim(&self) -> Option<Aim>;
    /// Camera yaw (radians) used to orient the rig at placement.
    fn camera_yaw(&self) -> Option<f32>;
}

/// Everything the scene host needs to create a physics body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    /// Core id the host must report back in contact events.
    pub id: EntityId,
    pub role: BodyRole,
    pub position: Vector3,
    pub impulse: Vector3,
    /// Body-local point the impulse is applied at.
    pub impulse_offset: Vector3,
    /// Seconds before the host should fade the body out.
    pub lifespan_secs: f64,
    /// Length of the fade the host plays before the body disappears.
    pub fade_out_secs: f64,
    pub category: CollisionCategory,
    pub collision_mask: CollisionCategory,
    pub contact_test_mask: CollisionCategory,
}

/// Scene graph and physics world.
pub trait SceneHost: Send {
    fn spawn_entity(&mut self, request: SpawnRequest) -> SceneHandle;
    /// Remove a body. Must tolerate handles already faded out.
    fn remove_entity(&mut self, handle: SceneHandle);
    /// Play the hit visual on a body about to be removed.
    fn explode(&mut self, handle: SceneHandle);
    /// Move the placement reticle while idle.
    fn move_reticle(&mut self, _position: Vector3) {}
    /// Place the rig and drop the reticle.
    fn place_rig(&mut self, _anchor: Vector3, _yaw: f32) {}
    /// Hand the host a sink for asynchronous contact delivery.
    fn subscribe_contacts(&mut self, _sink: ContactSink) {}
}

/// HUD bindings.
pub trait PresentationHost: Send {
    fn set_remaining_time(&mut self, seconds: u32);
    fn set_score(&mut self, score: u32);
    fn show_round_ui(&mut self, visible: bool);
}

/// Final score persistence. Failures are logged by the session.
pub trait ScoreStore: Send {
    fn save_score(&mut self, score: u32) -> Result<(), StoreError>;
}

/// Audio and one-shot effects.
pub trait EffectsHost: Send {
    fn play_effect(&mut self, effect: Effect);
}

/// The full set of collaborators a session drives.
pub struct Collaborators {
    pub tracker: Box<dyn SurfaceTracker>,
    pub scene: Box<dyn SceneHost>,
    pub presentation: Box<dyn PresentationHost>,
    pub score_store: Box<dyn ScoreStore>,
    pub effects: Box<dyn EffectsHost>,
}
