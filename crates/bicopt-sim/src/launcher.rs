//! Projectile launcher: turns the player's aim into a projectile spawn.

use bicopt_core::config::ProjectileProfile;
use bicopt_core::constants::PROJECTILE_IMPULSE_OFFSET;
use bicopt_core::types::Vector3;

/// A projectile ready to hand to the scene host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSpawn {
    pub position: Vector3,
    pub impulse: Vector3,
    /// Point (body-local) the impulse is applied at.
    pub impulse_offset: Vector3,
    pub lifespan_secs: f64,
}

#[derive(Debug, Clone)]
pub struct Launcher {
    profile: ProjectileProfile,
    fired: u32,
}

impl Launcher {
    pub fn new(profile: ProjectileProfile) -> Self {
        Self { profile, fired: 0 }
    }

    pub fn fired(&self) -> u32 {
        self.fired
    }

    /// Create a projectile at `position` pushed along `direction`.
    pub fn fire(&mut self, direction: Vector3, position: Vector3) -> ProjectileSpawn {
        self.fired += 1;
        ProjectileSpawn {
            position,
            impulse: direction * self.profile.impulse_scale,
            impulse_offset: PROJECTILE_IMPULSE_OFFSET,
            lifespan_secs: self.profile.lifespan_secs,
        }
    }
}
