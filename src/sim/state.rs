//! Round state and core simulation types
//!
//! Everything a tick mutates lives here. The collections are owned by
//! `RoundState` and only touched from inside a tick; the driver reads them
//! between ticks to build presentation snapshots.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Packed 8-bit RGB color handed to the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(0xef, 0x44, 0x44);
    pub const AMBER: Rgb = Rgb(0xfb, 0xbf, 0x24);
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
}

/// Launched object categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FruitKind {
    Apple,
    Banana,
    Orange,
    Watermelon,
    Strawberry,
    /// Slicing this one ends the round.
    Bomb,
}

impl FruitKind {
    /// The five sliceable kinds, for uniform sampling.
    pub const FRUITS: [FruitKind; 5] = [
        FruitKind::Apple,
        FruitKind::Banana,
        FruitKind::Orange,
        FruitKind::Watermelon,
        FruitKind::Strawberry,
    ];

    #[inline]
    pub fn is_bomb(self) -> bool {
        matches!(self, FruitKind::Bomb)
    }

    /// Collision radius, fixed per kind.
    pub fn radius(self) -> f32 {
        match self {
            FruitKind::Apple | FruitKind::Orange => 30.0,
            FruitKind::Banana | FruitKind::Bomb => 35.0,
            FruitKind::Watermelon => 45.0,
            FruitKind::Strawberry => 20.0,
        }
    }

    /// Base score for a slice, before the combo multiplier.
    pub fn points(self) -> u32 {
        match self {
            FruitKind::Apple | FruitKind::Orange => 10,
            FruitKind::Banana => 15,
            FruitKind::Watermelon => 25,
            FruitKind::Strawberry => 30,
            FruitKind::Bomb => 0,
        }
    }

    /// Outer skin color.
    pub fn skin_color(self) -> Rgb {
        match self {
            FruitKind::Apple => Rgb(0xef, 0x44, 0x44),
            FruitKind::Banana => Rgb(0xfa, 0xcc, 0x15),
            FruitKind::Orange => Rgb(0xf9, 0x73, 0x16),
            FruitKind::Watermelon => Rgb(0x22, 0xc5, 0x5e),
            FruitKind::Strawberry => Rgb(0xec, 0x48, 0x99),
            FruitKind::Bomb => Rgb(0x1f, 0x29, 0x37),
        }
    }

    /// Flesh color shown on cut faces, burst particles, and splatter.
    pub fn flesh_color(self) -> Rgb {
        match self {
            FruitKind::Apple => Rgb(0xfe, 0xf3, 0xc7),
            FruitKind::Banana => Rgb(0xfe, 0xf9, 0xc3),
            FruitKind::Orange => Rgb(0xff, 0xed, 0xd5),
            FruitKind::Watermelon => Rgb(0xfc, 0xa5, 0xa5),
            FruitKind::Strawberry => Rgb(0xfc, 0xe7, 0xf3),
            FruitKind::Bomb => Rgb(0xef, 0x44, 0x44),
        }
    }
}

/// One launched item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlyingObject {
    pub id: u32,
    pub kind: FruitKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Current spin angle (radians) and per-tick spin rate.
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Set once on a successful cut; never reverts.
    pub sliced: bool,
    /// Base score, fixed at spawn from the kind.
    pub points: u32,
}

/// One sample of the pointer trail. Age is implicit in queue position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
}

/// A short-lived debris fragment
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
    /// 1.0 down to 0.0; removed at zero.
    pub life: f32,
    pub size: f32,
}

/// A fading decal left where a fruit was cut
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Splatter {
    pub pos: Vec2,
    pub color: Rgb,
    pub rotation: f32,
    pub scale: f32,
    /// 0.8 down to 0.0; removed at zero.
    pub opacity: f32,
}

/// Round ruleset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// 3 lives, bombs enabled, spawn rate escalates.
    Classic,
    /// No bombs, no life loss, 90-second countdown.
    Zen,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Classic => "classic",
            Mode::Zen => "zen",
        }
    }

    /// Parse a user-facing mode name. An unrecognized name is a
    /// configuration error and must be rejected before a round starts.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Mode::Classic),
            "zen" => Some(Mode::Zen),
            _ => None,
        }
    }

    pub fn starting_lives(self) -> u32 {
        match self {
            Mode::Classic => CLASSIC_LIVES,
            Mode::Zen => UNLIMITED_LIVES,
        }
    }

    /// Countdown seconds, if this mode runs on a timer.
    pub fn countdown_secs(self) -> Option<i32> {
        match self {
            Mode::Classic => None,
            Mode::Zen => Some(ZEN_TIME_LIMIT_SECS),
        }
    }

    /// Probability that a spawn is a bomb. Zero in Zen is a mode contract:
    /// no bomb can ever enter the play-field there.
    pub fn bomb_chance(self) -> f64 {
        match self {
            Mode::Classic => BOMB_CHANCE,
            Mode::Zen => 0.0,
        }
    }

    /// Whether an unsliced fruit falling off the bottom costs a life.
    pub fn drops_cost_lives(self) -> bool {
        matches!(self, Mode::Classic)
    }
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Active gameplay
    Playing,
    /// Bomb struck; gameplay frozen until the scheduled end of round
    Exploding,
    /// Round ended - absorbing
    GameOver,
}

/// Events raised during a tick, drained by the loop driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// A bomb entered the play-field (fuse cue for the sound collaborator).
    BombSpawned,
    /// A fruit was cut.
    Sliced { points: u32, combo: u32 },
    /// The slice landed inside the combo window.
    ComboExtended { combo: u32 },
    /// A bomb was cut; the round ends shortly.
    BombStruck,
    /// An unsliced fruit fell off the bottom (Classic only).
    LifeLost { remaining: u32 },
    /// Terminal transition; emitted exactly once per round.
    RoundEnded { score: u64, best_combo: u32 },
}

/// The authoritative session state for one round.
///
/// Owned by the tick driver; every subsystem mutates it only from inside a
/// tick. No ambient singletons.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub mode: Mode,
    /// Play-field size in simulation units.
    pub width: f32,
    pub height: f32,
    /// Seed reproducing this round's spawn schedule.
    pub seed: u64,
    pub(crate) rng: Pcg32,

    pub phase: RoundPhase,
    pub score: u64,
    pub lives: u32,
    /// Countdown in seconds; `None` in Classic.
    pub timer_secs: Option<i32>,
    pub frame_count: u64,
    pub combo: u32,
    pub best_combo: u32,
    pub(crate) last_slice_ms: f64,
    /// Wall-clock time at which `Exploding` resolves to `GameOver`.
    pub(crate) explosion_deadline_ms: Option<f64>,

    pub fruits: Vec<FlyingObject>,
    pub particles: Vec<Particle>,
    pub splatters: Vec<Splatter>,
    /// Bounded FIFO of the most recent pointer samples, oldest first.
    pub trail: VecDeque<TrailPoint>,
    pub(crate) smoothed_pointer: Option<Vec2>,

    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl RoundState {
    pub fn new(mode: Mode, width: f32, height: f32, seed: u64) -> Self {
        Self {
            mode,
            width,
            height,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: RoundPhase::Playing,
            score: 0,
            lives: mode.starting_lives(),
            timer_secs: mode.countdown_secs(),
            frame_count: 0,
            combo: 0,
            best_combo: 0,
            last_slice_ms: f64::NEG_INFINITY,
            explosion_deadline_ms: None,
            fruits: Vec::new(),
            particles: Vec::new(),
            splatters: Vec::new(),
            trail: VecDeque::with_capacity(TRAIL_MAX_POINTS),
            smoothed_pointer: None,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Horizontal center the spawner aims toward.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events raised since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Terminal transition. Absorbing: the first call wins, later calls
    /// are no-ops, and `RoundEnded` is raised exactly once.
    pub(crate) fn finish_round(&mut self) {
        if self.phase == RoundPhase::GameOver {
            return;
        }
        self.phase = RoundPhase::GameOver;
        self.explosion_deadline_ms = None;
        log::info!(
            "round over: score={} best_combo={}",
            self.score,
            self.best_combo
        );
        self.push_event(GameEvent::RoundEnded {
            score: self.score,
            best_combo: self.best_combo,
        });
    }

    /// Life loss for a dropped fruit. Hitting zero ends the round on the
    /// same tick, never leaving lives negative.
    pub(crate) fn lose_life(&mut self) {
        if self.phase != RoundPhase::Playing {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        self.push_event(GameEvent::LifeLost {
            remaining: self.lives,
        });
        if self.lives == 0 {
            self.finish_round();
        }
    }
}
