//! Reference round tuning. `RoundConfig::default()` is built from these.

use crate::types::Vector3;

// --- Round ---

/// Round length in seconds.
pub const ROUND_DURATION_SECS: u32 = 30;

/// Round timer tick period (seconds).
pub const ROUND_TIMER_PERIOD_SECS: f64 = 1.0;

// --- Scoring ---

pub const MINOR_SCORE: u32 = 1;
pub const MAJOR_SCORE: u32 = 5;

// --- Placement ---

/// Number of recent placement samples averaged into the anchor.
pub const PLACEMENT_WINDOW: usize = 10;

// --- Spawning ---

/// Seconds between minor target spawns.
pub const MINOR_CADENCE_SECS: f64 = 1.0;

/// Seconds between major target spawns.
pub const MAJOR_CADENCE_SECS: f64 = 3.0;

/// Horizontal spawn bounds (rig-local meters).
pub const SPAWN_X_RANGE: (f32, f32) = (-3.0, 3.0);

/// Vertical spawn bounds (rig-local meters).
pub const SPAWN_Y_RANGE: (f32, f32) = (-2.0, 2.0);

/// Spawn depth in front of the rig.
pub const SPAWN_Z: f32 = -8.0;

/// Forward impulse range for minor targets.
pub const MINOR_IMPULSE_RANGE: (f32, f32) = (10.0, 40.0);

/// Forward impulse range for major targets.
pub const MAJOR_IMPULSE_RANGE: (f32, f32) = (40.0, 60.0);

/// Minor target lifespan before fade-out (seconds).
pub const MINOR_LIFESPAN_SECS: f64 = 2.0;

/// Major target lifespan before fade-out (seconds).
pub const MAJOR_LIFESPAN_SECS: f64 = 1.0;

// --- Projectiles ---

/// Aim direction is scaled by this to form the launch impulse.
pub const PROJECTILE_IMPULSE_SCALE: f32 = 4.0;

/// Projectile lifespan before fade-out (seconds).
pub const PROJECTILE_LIFESPAN_SECS: f64 = 6.0;

/// Off-center point the launch impulse is applied at (adds spin).
pub const PROJECTILE_IMPULSE_OFFSET: Vector3 = Vector3::new(0.1, 0.0, 0.0);

/// Fade-out duration hosts should use when an entity expires.
pub const FADE_OUT_SECS: f64 = 0.3;

// --- Aim ---

/// Camera forward used when no tracking frame is available.
pub const FALLBACK_AIM_DIRECTION: Vector3 = Vector3::new(0.0, 0.0, -1.0);

/// Camera position used when no tracking frame is available.
pub const FALLBACK_AIM_POSITION: Vector3 = Vector3::new(0.0, 0.0, -0.2);
