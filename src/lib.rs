//! Fruit Slash - a real-time arcade slicing game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, slice detection, scoring)
//! - `driver`: Fixed-cadence loop driver feeding frames to a presenter
//! - `input`: Pointer capability seam (mouse/touch/hand-tracking backends)
//! - `audio`: Fire-and-forget audible cue seam
//!
//! The crate never draws, plays sound, or talks to a tracking library
//! itself; those concerns live behind the collaborator traits in `input`,
//! `audio`, and `driver`.

pub mod audio;
pub mod driver;
pub mod input;
pub mod settings;
pub mod sim;

pub use driver::{RoundDriver, RoundSummary};
pub use settings::RoundSettings;
pub use sim::Mode;

/// Game tuning constants
pub mod consts {
    /// Nominal tick rate; one simulation tick per rendered frame.
    pub const TICK_HZ: u32 = 60;
    /// Downward acceleration on objects and particles, units/tick².
    pub const GRAVITY: f32 = 0.15;

    /// Most-recent pointer samples kept for slice detection and rendering.
    pub const TRAIL_MAX_POINTS: usize = 10;
    /// Lerp factor pulling the smoothed trail toward the raw pointer sample.
    pub const TRAIL_SMOOTHING: f32 = 0.4;
    /// Minimum separation of the two newest trail samples for a cut to count.
    pub const MIN_SLICE_SPEED: f32 = 3.0;

    /// Consecutive slices inside this window extend the combo multiplier.
    pub const COMBO_WINDOW_MS: f64 = 400.0;
    /// Wall-clock delay between a bomb strike and the end of the round.
    pub const EXPLOSION_DELAY_MS: f64 = 1000.0;

    /// Frames between spawns at round start.
    pub const SPAWN_INTERVAL_START: u64 = 60;
    /// The Classic ramp never tightens the interval below this.
    pub const SPAWN_INTERVAL_MIN: u64 = 20;
    /// Frames per one-step tightening of the Classic spawn interval.
    pub const SPAWN_RAMP_FRAMES: u64 = 300;
    /// Chance that a spawn tick launches a second object.
    pub const DOUBLE_SPAWN_CHANCE: f64 = 0.3;
    /// Chance that a Classic spawn is a bomb instead of a fruit.
    pub const BOMB_CHANCE: f64 = 0.15;
    /// Horizontal margin kept clear at both play-field edges when spawning.
    pub const SPAWN_MARGIN: f32 = 50.0;
    /// Objects this far below the play-field are culled.
    pub const BOTTOM_CULL_MARGIN: f32 = 100.0;

    /// Classic mode starting lives.
    pub const CLASSIC_LIVES: u32 = 3;
    /// Zen lives sentinel - never decremented, effectively unlimited.
    pub const UNLIMITED_LIVES: u32 = 999;
    /// Zen countdown, in seconds.
    pub const ZEN_TIME_LIMIT_SECS: i32 = 90;
    /// Frames between countdown decrements (~1 s at the nominal tick rate).
    pub const TIMER_TICK_FRAMES: u64 = 60;

    /// Particle life lost per tick.
    pub const PARTICLE_LIFE_DECAY: f32 = 0.02;
    /// Splatter opacity lost per tick.
    pub const SPLATTER_OPACITY_DECAY: f32 = 0.005;
    /// Splatter starting opacity.
    pub const SPLATTER_START_OPACITY: f32 = 0.8;
    /// Most recent splatter marks kept; the oldest is evicted on overflow.
    pub const MAX_SPLATTERS: usize = 10;
}
