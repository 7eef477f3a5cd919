//! Deterministic simulation module
//!
//! All gameplay logic lives here. No rendering, audio, or platform code:
//! a tick consumes at most one pointer sample, mutates the round state it
//! is given, and raises events. Iteration order is stable (spawn order),
//! and all randomness flows through the round's seeded generator.

pub mod collision;
pub mod effects;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::segment_hits_circle;
pub use spawn::spawn_interval;
pub use state::{
    FlyingObject, FruitKind, GameEvent, Mode, Particle, Rgb, RoundPhase, RoundState, Splatter,
    TrailPoint,
};
pub use tick::{TickInput, tick};
