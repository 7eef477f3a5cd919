//! Spawn policy: what enters the play-field, and when.

use glam::Vec2;
use rand::Rng;

use super::state::{FlyingObject, FruitKind, GameEvent, Mode, RoundState};
use crate::consts::*;

/// Frames between spawns at the given elapsed-frame count.
///
/// Classic tightens the interval by one frame every `SPAWN_RAMP_FRAMES`,
/// down to a floor; Zen keeps the starting cadence for the whole round.
pub fn spawn_interval(mode: Mode, frame: u64) -> u64 {
    match mode {
        Mode::Zen => SPAWN_INTERVAL_START,
        Mode::Classic => SPAWN_INTERVAL_START
            .saturating_sub(frame / SPAWN_RAMP_FRAMES)
            .max(SPAWN_INTERVAL_MIN),
    }
}

/// Run the spawn decision for this tick: 0, 1, or 2 new objects.
pub(crate) fn run_spawn(state: &mut RoundState) {
    let interval = spawn_interval(state.mode, state.frame_count);
    if !state.frame_count.is_multiple_of(interval) {
        return;
    }
    launch(state);
    if state.rng.random_bool(DOUBLE_SPAWN_CHANCE) {
        launch(state);
    }
}

/// Launch one object from just below the bottom edge on a center-biased arc.
fn launch(state: &mut RoundState) {
    let kind = roll_kind(state);
    if kind.is_bomb() {
        // Fuse cue for the sound collaborator.
        state.push_event(GameEvent::BombSpawned);
        log::debug!("bomb spawned at frame {}", state.frame_count);
    }

    let x = state
        .rng
        .random_range(SPAWN_MARGIN..state.width - SPAWN_MARGIN);
    let y = state.height + SPAWN_MARGIN;
    // Aim loosely at the center so arcs cross the middle of the field.
    let vx = (state.center_x() - x) * state.rng.random_range(0.01..0.02);
    let vy = state.rng.random_range(-15.0..-12.0);
    let rotation_speed = state.rng.random_range(-0.1..0.1);

    let id = state.next_entity_id();
    state.fruits.push(FlyingObject {
        id,
        kind,
        pos: Vec2::new(x, y),
        vel: Vec2::new(vx, vy),
        radius: kind.radius(),
        rotation: 0.0,
        rotation_speed,
        sliced: false,
        points: kind.points(),
    });
}

/// Bomb gate first, then a uniform roll over the five fruits.
fn roll_kind(state: &mut RoundState) -> FruitKind {
    let bomb_chance = state.mode.bomb_chance();
    if bomb_chance > 0.0 && state.rng.random_bool(bomb_chance) {
        return FruitKind::Bomb;
    }
    FruitKind::FRUITS[state.rng.random_range(0..FruitKind::FRUITS.len())]
}
