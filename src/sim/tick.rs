//! Per-tick simulation step
//!
//! Ordering inside a tick is load-bearing: trail update, then particle
//! decay, then the explosion gate, then spawning, object integration and
//! slice resolution, bounds cleanup, splatter decay, and the Zen countdown.
//! While the round is `Exploding`, only the trail and particles keep
//! animating; spawning, slicing, and cleanup are frozen.

use glam::Vec2;

use super::collision::segment_hits_circle;
use super::spawn;
use super::state::{GameEvent, RoundPhase, RoundState, TrailPoint};
use crate::consts::*;

/// Input for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer position in play-field coordinates, if one exists this tick.
    /// Absence is a valid steady state: the trail tapers instead.
    pub pointer: Option<Vec2>,
}

/// Advance the round by one tick.
///
/// `now_ms` is the wall clock driving the combo window and the explosion
/// deadline; everything else is frame-counted, so simulation speed follows
/// the frame rate by design.
pub fn tick(state: &mut RoundState, input: &TickInput, now_ms: f64) {
    if state.phase == RoundPhase::GameOver {
        return;
    }

    state.frame_count += 1;

    update_trail(state, input.pointer);

    // Debris keeps animating even while the explosion freeze is on.
    state.step_particles();

    if state.phase == RoundPhase::Exploding {
        if state
            .explosion_deadline_ms
            .is_some_and(|deadline| now_ms >= deadline)
        {
            state.finish_round();
        }
        return;
    }

    spawn::run_spawn(state);

    integrate_and_slice(state, now_ms);

    cull_dropped(state);

    state.step_splatters();

    tick_countdown(state);
}

/// Smooth the raw pointer toward the previous trail sample and append it,
/// or let the trail taper by one point when no pointer exists this tick.
fn update_trail(state: &mut RoundState, raw: Option<Vec2>) {
    match raw {
        Some(raw) => {
            // Lerp damps jitter from tracked input sources; the first
            // sample after a gap is taken as-is.
            let smoothed = match state.smoothed_pointer {
                Some(prev) => prev.lerp(raw, TRAIL_SMOOTHING),
                None => raw,
            };
            state.smoothed_pointer = Some(smoothed);
            state.trail.push_back(TrailPoint { pos: smoothed });
            if state.trail.len() > TRAIL_MAX_POINTS {
                state.trail.pop_front();
            }
        }
        None => {
            state.trail.pop_front();
            state.smoothed_pointer = None;
        }
    }
}

/// The two newest trail samples, newest first.
fn latest_trail_segment(state: &RoundState) -> Option<(Vec2, Vec2)> {
    let n = state.trail.len();
    if n < 2 {
        return None;
    }
    Some((state.trail[n - 1].pos, state.trail[n - 2].pos))
}

/// Integrate every object one tick and resolve slices against the newest
/// trail segment.
fn integrate_and_slice(state: &mut RoundState, now_ms: f64) {
    // Only a fast-moving trail cuts; a hovering pointer does not.
    let cutting =
        latest_trail_segment(state).filter(|(p1, p2)| p1.distance(*p2) > MIN_SLICE_SPEED);

    let mut struck_bombs: Vec<usize> = Vec::new();

    for i in 0..state.fruits.len() {
        {
            let obj = &mut state.fruits[i];
            obj.pos += obj.vel;
            obj.vel.y += GRAVITY;
            obj.rotation += obj.rotation_speed;
        }

        let (pos, radius, kind, points, sliced) = {
            let obj = &state.fruits[i];
            (obj.pos, obj.radius, obj.kind, obj.points, obj.sliced)
        };
        if sliced {
            continue;
        }
        let Some((p1, p2)) = cutting else { continue };
        if !segment_hits_circle(p1, p2, pos, radius) {
            continue;
        }

        if kind.is_bomb() {
            // Slice handling stops for this object; later objects in the
            // same pass still integrate and may be cut.
            struck_bombs.push(i);
            continue;
        }

        {
            let obj = &mut state.fruits[i];
            obj.sliced = true;
            // Halve the horizontal drift so the halves separate visually
            // without changing the fall.
            obj.vel.x *= 0.5;
        }
        state.register_slice(points, now_ms);
        state.slice_effects(pos, kind);
    }

    // A struck bomb is consumed by the explosion, not by bounds cleanup.
    for &i in struck_bombs.iter().rev() {
        let bomb = state.fruits.remove(i);
        enter_explosion(state, bomb.pos, now_ms);
    }
}

/// Bomb strike: freeze gameplay and schedule the end of the round against
/// the wall clock, so the delay holds under frame-rate swings.
fn enter_explosion(state: &mut RoundState, pos: Vec2, now_ms: f64) {
    if state.phase != RoundPhase::Playing {
        return;
    }
    state.phase = RoundPhase::Exploding;
    state.explosion_deadline_ms = Some(now_ms + EXPLOSION_DELAY_MS);
    state.explosion_effects(pos);
    state.push_event(GameEvent::BombStruck);
    log::info!("bomb struck at frame {}", state.frame_count);
}

/// Remove objects that fell out of the play-field. In Classic, an unsliced
/// fruit that gets away costs a life.
fn cull_dropped(state: &mut RoundState) {
    let floor = state.height + BOTTOM_CULL_MARGIN;
    let costs_lives = state.mode.drops_cost_lives() && state.phase == RoundPhase::Playing;
    let mut dropped = 0u32;
    state.fruits.retain(|f| {
        if f.pos.y > floor {
            if costs_lives && !f.sliced && !f.kind.is_bomb() {
                dropped += 1;
            }
            false
        } else {
            true
        }
    });
    for _ in 0..dropped {
        if state.phase != RoundPhase::Playing {
            break;
        }
        state.lose_life();
    }
}

/// Zen countdown: one second off every `TIMER_TICK_FRAMES`; zero ends the
/// round.
fn tick_countdown(state: &mut RoundState) {
    if state.phase != RoundPhase::Playing {
        return;
    }
    if !state.frame_count.is_multiple_of(TIMER_TICK_FRAMES) {
        return;
    }
    if let Some(t) = state.timer_secs.as_mut() {
        *t -= 1;
        if *t <= 0 {
            state.finish_round();
        }
    }
}
