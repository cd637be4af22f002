//! Game session: the round orchestrator.
//!
//! `GameSession` owns the round state, the live-entity world, both spawners,
//! the launcher and the round timer, and drives the host collaborators.
//! Every mutation goes through `&mut self`, so a session is serialized by
//! construction; hosts with several input threads funnel them through
//! [`crate::control::ControlLoop`].

use hecs::{Entity, World};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use bicopt_core::commands::HostCommand;
use bicopt_core::config::RoundConfig;
use bicopt_core::enums::{Effect, HostileKind, RoundPhase};
use bicopt_core::error::ConfigError;
use bicopt_core::events::{ContactEvent, SessionEvent};
use bicopt_core::state::{RoundState, SessionSnapshot};
use bicopt_core::types::{Aim, EntityId, SimTime, TickTicket, Vector3};

use crate::cadence::CadenceToken;
use crate::control::ContactSink;
use crate::host::Collaborators;
use crate::launcher::Launcher;
use crate::placement::PlacementSmoother;
use crate::round_timer::{RoundTimer, TimerSignal};
use crate::spawner::Spawner;
use crate::systems;
use crate::systems::collision::ScoreDelta;
use crate::systems::snapshot::RoundStats;
use crate::world_setup;

/// One round, from placement to final score. Not reusable: a new round
/// needs a new session.
pub struct GameSession {
    config: RoundConfig,
    host: Collaborators,
    rng: Box<dyn RngCore + Send>,
    world: World,
    time: SimTime,
    round: RoundState,
    smoother: PlacementSmoother,
    anchor: Vector3,
    minor: Spawner,
    major: Spawner,
    launcher: Launcher,
    timer: RoundTimer,
    stats: RoundStats,
    events: Vec<SessionEvent>,
    despawn_buffer: Vec<Entity>,
}

impl GameSession {
    /// Create a session. Seeds a ChaCha RNG from `config.seed`, or from
    /// entropy when no seed is set.
    pub fn new(config: RoundConfig, host: Collaborators) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, host, rng)
    }

    /// Create a session with an injected random source.
    pub fn with_rng(
        config: RoundConfig,
        host: Collaborators,
        rng: impl RngCore + Send + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            smoother: PlacementSmoother::new(config.placement_window),
            minor: Spawner::new(config.minor.clone()),
            major: Spawner::new(config.major.clone()),
            launcher: Launcher::new(config.projectile.clone()),
            timer: RoundTimer::new(),
            round: RoundState {
                seconds_remaining: config.duration_secs,
                score: 0,
                phase: RoundPhase::Idle,
            },
            config,
            host,
            rng: Box::new(rng),
            world: World::new(),
            time: SimTime::default(),
            anchor: Vector3::ZERO,
            stats: RoundStats::default(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
        })
    }

    // ---- Host-facing API ----

    /// Apply one queued host command.
    pub fn apply(&mut self, command: HostCommand) {
        match command {
            HostCommand::ConfirmPlacement => self.on_placement_confirmed(),
            HostCommand::Fire => {
                self.on_fire_requested();
            }
            HostCommand::Contact { event } => {
                self.on_contact_event(event);
            }
            HostCommand::SpawnerTick { kind, ticket } => {
                self.on_spawner_tick(kind, ticket);
            }
            HostCommand::Tick { dt } => self.tick(dt),
        }
    }

    /// Lock in the smoothed placement and start the round. Only honored
    /// while Idle and while the tracker has a camera frame.
    pub fn on_placement_confirmed(&mut self) {
        if self.round.phase != RoundPhase::Idle {
            log::trace!("Placement confirm ignored in {:?}", self.round.phase);
            return;
        }
        let Some(yaw) = self.host.tracker.camera_yaw() else {
            log::debug!("Placement confirm ignored: no camera frame");
            return;
        };

        let anchor = self.smoother.mean().unwrap_or(self.anchor);
        self.anchor = anchor;
        self.host.scene.place_rig(anchor, yaw);
        self.host.presentation.show_round_ui(true);
        self.host.effects.play_effect(Effect::BackgroundMusic);

        self.minor.start();
        self.major.start();
        self.timer.reset(self.config.duration_secs);
        self.timer.start(self.config.duration_secs);

        self.round = RoundState {
            seconds_remaining: self.config.duration_secs,
            score: 0,
            phase: RoundPhase::Active,
        };
        self.host
            .presentation
            .set_remaining_time(self.round.seconds_remaining);
        self.host.presentation.set_score(0);
        self.events.push(SessionEvent::RoundStarted { anchor, yaw });
        log::info!(
            "Round started at {anchor} (yaw {yaw:.2}), {}s on the clock",
            self.config.duration_secs
        );
    }

    /// Fire a projectile along the current aim. No-op outside Active.
    pub fn on_fire_requested(&mut self) -> Option<EntityId> {
        if self.round.phase != RoundPhase::Active {
            log::trace!("Fire ignored in {:?}", self.round.phase);
            return None;
        }
        let aim = self.host.tracker.current_aim().unwrap_or_else(Aim::fallback);
        let spawn = self.launcher.fire(aim.direction, aim.position);
        let id = world_setup::spawn_projectile(
            &mut self.world,
            self.host.scene.as_mut(),
            &spawn,
            self.time.elapsed_secs,
        );
        self.host.effects.play_effect(Effect::Shot);
        self.stats.projectiles_fired += 1;
        self.events.push(SessionEvent::ProjectileFired { id });
        log::debug!("Projectile {id} fired from {}", aim.position);
        Some(id)
    }

    /// Resolve a physics contact and return the points it scored.
    /// Contacts outside Active score nothing.
    pub fn on_contact_event(&mut self, event: ContactEvent) -> ScoreDelta {
        if self.round.phase != RoundPhase::Active {
            log::trace!("Contact ignored in {:?}", self.round.phase);
            return 0;
        }
        let Some(hit) = systems::collision::resolve(&mut self.world, &event) else {
            log::debug!("Contact {} <-> {} ignored", event.a.id, event.b.id);
            return 0;
        };

        if let Some(body) = hit.hostile_body {
            self.host.scene.explode(body);
        }
        for body in [hit.projectile_body, hit.hostile_body].into_iter().flatten() {
            self.host.scene.remove_entity(body);
        }
        self.host.effects.play_effect(Effect::Explosion);

        self.round.score = self.round.score.saturating_add(hit.points);
        self.stats.hits += 1;
        self.host.presentation.set_score(self.round.score);
        self.events.push(SessionEvent::TargetHit {
            projectile: hit.projectile,
            hostile: hit.hostile,
            kind: hit.kind,
            points: hit.points,
        });
        self.events.push(SessionEvent::ScoreChanged {
            score: self.round.score,
        });
        log::debug!(
            "{:?} {} hit for {} (score {})",
            hit.kind,
            hit.hostile,
            hit.points,
            self.round.score
        );
        hit.points
    }

    /// Run one spawner tick delivered by a host-owned platform timer.
    /// Stale tickets and ticks outside Active spawn nothing.
    pub fn on_spawner_tick(&mut self, kind: HostileKind, ticket: TickTicket) -> Option<EntityId> {
        if self.round.phase != RoundPhase::Active {
            log::trace!("{kind:?} spawner tick ignored in {:?}", self.round.phase);
            return None;
        }
        let spawner = match kind {
            HostileKind::Minor => &mut self.minor,
            HostileKind::Major => &mut self.major,
        };
        let spawn = spawner.fire(ticket, &mut *self.rng)?;
        let id = world_setup::spawn_hostile(
            &mut self.world,
            self.host.scene.as_mut(),
            &spawn,
            self.time.elapsed_secs,
        );
        self.events.push(SessionEvent::HostileSpawned { id, kind });
        log::debug!("{kind:?} {id} spawned at {}", spawn.position);
        Some(id)
    }

    /// Advance logical time by `dt` seconds. Non-finite and non-positive
    /// steps are dropped.
    pub fn tick(&mut self, dt: f64) {
        if !dt.is_finite() {
            log::warn!("Tick ignored: non-finite dt {dt}");
            return;
        }
        if dt <= 0.0 {
            log::trace!("Tick ignored: dt {dt}");
            return;
        }
        self.time.advance(dt);
        match self.round.phase {
            RoundPhase::Idle => self.update_placement(),
            RoundPhase::Active => self.run_active(dt),
            RoundPhase::Ended => {}
        }
    }

    /// Read-only view for UI binding.
    pub fn current_round_state(&self) -> RoundState {
        self.round
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.round,
            self.timer.state(),
            &self.stats,
        )
    }

    /// Events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Forward a contact sink to the scene host.
    pub fn subscribe_contacts(&mut self, sink: ContactSink) {
        self.host.scene.subscribe_contacts(sink);
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Current smoothed placement (or the locked rig anchor once Active).
    pub fn anchor(&self) -> Vector3 {
        self.anchor
    }

    /// Ticket a host-owned timer captures when scheduling the next tick of
    /// one spawner. `None` while that spawner is stopped.
    pub fn spawner_ticket(&self, kind: HostileKind) -> Option<TickTicket> {
        match kind {
            HostileKind::Minor => self.minor.ticket(),
            HostileKind::Major => self.major.ticket(),
        }
    }

    /// Cancellation view of one spawner for a host timer thread. Reports
    /// cancelled once that spawner stops or restarts.
    pub fn spawner_token(&self, kind: HostileKind) -> CadenceToken {
        match kind {
            HostileKind::Minor => self.minor.token(),
            HostileKind::Major => self.major.token(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    // ---- Internals ----

    fn update_placement(&mut self) {
        let candidate = self.host.tracker.current_placement_candidate();
        self.anchor = self.smoother.sample(candidate, self.anchor);
        if !self.smoother.is_empty() {
            self.host.scene.move_reticle(self.anchor);
        }
    }

    fn run_active(&mut self, dt: f64) {
        // 1. Lifespan expiry
        let expired = systems::cleanup::expire(
            &mut self.world,
            self.time.elapsed_secs,
            &mut self.despawn_buffer,
        );
        for entry in expired {
            if let Some(body) = entry.body {
                self.host.scene.remove_entity(body);
            }
            self.events.push(SessionEvent::Expired { id: entry.id });
        }

        // 2. Round timer. Expiry ends the round before any spawn this tick.
        for signal in self.timer.advance(dt) {
            match signal {
                TimerSignal::Updated(seconds) => {
                    self.round.seconds_remaining = seconds;
                    self.host.presentation.set_remaining_time(seconds);
                    self.events.push(SessionEvent::TimeRemaining { seconds });
                }
                TimerSignal::Expired => {
                    self.end_round();
                    return;
                }
            }
        }

        // 3. Spawners
        for kind in [HostileKind::Minor, HostileKind::Major] {
            let due = match kind {
                HostileKind::Minor => self.minor.advance(dt),
                HostileKind::Major => self.major.advance(dt),
            };
            for ticket in due {
                self.on_spawner_tick(kind, ticket);
            }
        }
    }

    fn end_round(&mut self) {
        if self.round.phase == RoundPhase::Ended {
            return;
        }
        self.minor.stop();
        self.major.stop();
        self.timer.stop();

        for body in systems::cleanup::clear_all(&mut self.world) {
            self.host.scene.remove_entity(body);
        }

        self.round.phase = RoundPhase::Ended;
        self.round.seconds_remaining = 0;
        self.host.presentation.show_round_ui(false);

        let final_score = self.round.score;
        if let Err(e) = self.host.score_store.save_score(final_score) {
            log::warn!("Failed to save final score {final_score}: {e}");
        }
        self.events.push(SessionEvent::RoundComplete { final_score });
        log::info!(
            "Round complete: score {final_score}, {} hits from {} shots",
            self.stats.hits,
            self.stats.projectiles_fired
        );
    }
}
