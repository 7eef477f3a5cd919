//! Loop driver: fixed-cadence scheduling and collaborator hand-off.
//!
//! One simulation tick per frame at the nominal rate, so simulation speed
//! follows the frame rate by design; only the explosion delay is anchored
//! to the wall clock. The driver exclusively owns the round state - no
//! other component mutates it outside a tick - and a `shutdown` driver
//! never ticks or posts events again, so pending deadlines die with it.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::audio::{AudioSink, SoundCue};
use crate::consts::TICK_HZ;
use crate::input::PointerSource;
use crate::settings::RoundSettings;
use crate::sim::{
    FlyingObject, GameEvent, Particle, RoundPhase, RoundState, Splatter, TickInput, TrailPoint,
    tick,
};

/// Per-tick view handed to the rendering collaborator. The core has no
/// knowledge of how any of this is drawn.
#[derive(Debug, Serialize)]
pub struct FrameSnapshot<'a> {
    pub fruits: &'a [FlyingObject],
    pub particles: &'a [Particle],
    pub splatters: &'a [Splatter],
    pub trail: &'a VecDeque<TrailPoint>,
    pub score: u64,
    pub combo: u32,
    pub lives: u32,
    pub timer_secs: Option<i32>,
    pub phase: RoundPhase,
}

/// Rendering collaborator seam. Infallible: a broken surface drops frames,
/// it does not stall the tick.
pub trait Presenter {
    fn present(&mut self, frame: &FrameSnapshot<'_>);
}

/// Discards frames; for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _frame: &FrameSnapshot<'_>) {}
}

/// Final round result handed to the surrounding application, once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub score: u64,
    pub best_combo: u32,
}

/// Owns one round and its collaborators and drives the tick loop.
pub struct RoundDriver<P, A, R> {
    state: RoundState,
    pointer: P,
    audio: A,
    presenter: R,
    /// Cleared by `shutdown`.
    alive: bool,
    summary_sent: bool,
}

impl<P: PointerSource, A: AudioSink, R: Presenter> RoundDriver<P, A, R> {
    pub fn new(settings: &RoundSettings, pointer: P, audio: A, presenter: R) -> Self {
        let seed = settings.resolve_seed();
        log::info!(
            "starting {} round ({}x{}, seed {})",
            settings.mode.as_str(),
            settings.width,
            settings.height,
            seed
        );
        Self {
            state: RoundState::new(settings.mode, settings.width, settings.height, seed),
            pointer,
            audio,
            presenter,
            alive: true,
            summary_sent: false,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Run one tick at the given wall-clock time.
    ///
    /// Polls the pointer, advances the simulation, forwards this tick's
    /// cues to the audio sink, and hands the snapshot to the presenter.
    /// Returns the round summary on the tick the round becomes terminal,
    /// `None` otherwise and forever after.
    pub fn step(&mut self, now_ms: f64) -> Option<RoundSummary> {
        if !self.alive {
            return None;
        }

        let input = TickInput {
            pointer: self.pointer.sample(),
        };
        tick(&mut self.state, &input, now_ms);

        let mut ended = false;
        for event in self.state.drain_events() {
            if matches!(event, GameEvent::RoundEnded { .. }) {
                ended = true;
            }
            self.audio.play(SoundCue::for_event(&event));
        }

        let frame = FrameSnapshot {
            fruits: &self.state.fruits,
            particles: &self.state.particles,
            splatters: &self.state.splatters,
            trail: &self.state.trail,
            score: self.state.score,
            combo: self.state.combo,
            lives: self.state.lives,
            timer_secs: self.state.timer_secs,
            phase: self.state.phase,
        };
        self.presenter.present(&frame);

        if ended && !self.summary_sent {
            self.summary_sent = true;
            return Some(RoundSummary {
                score: self.state.score,
                best_combo: self.state.best_combo,
            });
        }
        None
    }

    /// Drive real-time frames at the nominal cadence until the round ends
    /// or `shutdown` is called from a presenter/audio callback.
    pub fn run(&mut self) -> Option<RoundSummary> {
        let frame_time = Duration::from_secs_f64(1.0 / TICK_HZ as f64);
        let start = Instant::now();
        let mut next_frame = start;
        while self.alive {
            let now = Instant::now();
            if now < next_frame {
                std::thread::sleep(next_frame - now);
            }
            next_frame += frame_time;
            let now_ms = start.elapsed().as_secs_f64() * 1000.0;
            if let Some(summary) = self.step(now_ms) {
                return Some(summary);
            }
            if self.state.phase == RoundPhase::GameOver {
                return None;
            }
        }
        None
    }

    /// Stop the driver ahead of teardown. Idempotent. A stopped driver
    /// never ticks again, so a pending explosion deadline can no longer
    /// fire into a disposed round.
    pub fn shutdown(&mut self) {
        self.alive = false;
    }
}
