//! Hostile spawner: one fixed cadence per target kind.

use rand::{Rng, RngCore};

use bicopt_core::config::SpawnProfile;
use bicopt_core::enums::HostileKind;
use bicopt_core::types::{TickTicket, Vector3};

use crate::cadence::{Cadence, CadenceToken};

/// Attributes rolled for one new hostile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostileSpawn {
    pub kind: HostileKind,
    pub position: Vector3,
    /// Launch impulse along the target's local forward axis.
    pub impulse: Vector3,
    pub lifespan_secs: f64,
}

/// Spawns hostiles of one kind on a fixed cadence.
#[derive(Debug)]
pub struct Spawner {
    profile: SpawnProfile,
    cadence: Cadence,
    spawned: u32,
}

impl Spawner {
    pub fn new(profile: SpawnProfile) -> Self {
        let cadence = Cadence::new(profile.cadence_secs);
        Self {
            profile,
            cadence,
            spawned: 0,
        }
    }

    /// Replace the tuning. Stops the spawner; call `start` again to resume.
    pub fn configure(&mut self, profile: SpawnProfile) {
        self.cadence.stop();
        self.cadence.set_period(profile.cadence_secs);
        self.profile = profile;
    }

    pub fn kind(&self) -> HostileKind {
        self.profile.kind
    }

    pub fn profile(&self) -> &SpawnProfile {
        &self.profile
    }

    pub fn is_running(&self) -> bool {
        self.cadence.is_running()
    }

    /// Total hostiles produced since creation.
    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    pub fn start(&mut self) -> CadenceToken {
        self.cadence.start()
    }

    /// Idempotent; no spawn happens after this returns.
    pub fn stop(&mut self) {
        self.cadence.stop();
    }

    /// Ticket for a platform timer scheduling the next tick right now.
    pub fn ticket(&self) -> Option<TickTicket> {
        self.cadence.ticket()
    }

    pub fn token(&self) -> CadenceToken {
        self.cadence.token()
    }

    /// Advance the cadence and return the ticks that became due.
    pub fn advance(&mut self, dt: f64) -> Vec<TickTicket> {
        self.cadence.advance(dt)
    }

    /// Run one tick. Stale tickets (stopped or restarted since issue) yield
    /// `None`.
    pub fn fire<R: RngCore + ?Sized>(
        &mut self,
        ticket: TickTicket,
        rng: &mut R,
    ) -> Option<HostileSpawn> {
        if !self.cadence.is_current(ticket) {
            return None;
        }
        self.spawned += 1;
        Some(roll(&self.profile, rng))
    }

    /// Advance by `dt` and hand every due spawn to `spawn_fn`.
    /// Returns the number of spawns produced.
    pub fn run<R, F>(&mut self, dt: f64, rng: &mut R, mut spawn_fn: F) -> u32
    where
        R: RngCore + ?Sized,
        F: FnMut(HostileSpawn),
    {
        let mut produced = 0;
        for ticket in self.advance(dt) {
            if let Some(spawn) = self.fire(ticket, rng) {
                spawn_fn(spawn);
                produced += 1;
            }
        }
        produced
    }
}

/// Roll position and impulse within the profile bounds (closed intervals).
pub fn roll<R: RngCore + ?Sized>(profile: &SpawnProfile, rng: &mut R) -> HostileSpawn {
    let (x_min, x_max) = profile.x_range;
    let (y_min, y_max) = profile.y_range;
    let (impulse_min, impulse_max) = profile.impulse_range;

    let position = Vector3::new(
        rng.gen_range(x_min..=x_max),
        rng.gen_range(y_min..=y_max),
        profile.z,
    );
    let magnitude = rng.gen_range(impulse_min..=impulse_max);

    HostileSpawn {
        kind: profile.kind,
        position,
        impulse: Vector3::Z * magnitude,
        lifespan_secs: profile.lifespan_secs,
    }
}
