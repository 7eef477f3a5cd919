//! Derived visual-effect entities: particle bursts and splatter marks.
//!
//! These are side data for the rendering collaborator. They never feed back
//! into gameplay; their decay runs independently of slicing and spawning.

use glam::Vec2;
use rand::Rng;

use super::state::{FruitKind, Particle, Rgb, RoundState, Splatter};
use crate::consts::*;

/// Particles per burst in the flesh color of a cut fruit.
const SLICE_FLESH_PARTICLES: usize = 15;
/// Particles per burst in the skin color.
const SLICE_SKIN_PARTICLES: usize = 5;

impl RoundState {
    /// Scatter `count` debris particles from `pos`.
    pub(crate) fn burst(&mut self, pos: Vec2, color: Rgb, count: usize, speed_mult: f32) {
        for _ in 0..count {
            let vel = Vec2::new(
                self.rng.random_range(-5.0..5.0) * speed_mult,
                self.rng.random_range(-5.0..5.0) * speed_mult,
            );
            let size = self.rng.random_range(2.0..6.0);
            self.particles.push(Particle {
                pos,
                vel,
                color,
                life: 1.0,
                size,
            });
        }
    }

    /// Two-tone burst plus a splatter mark where a fruit was cut.
    pub(crate) fn slice_effects(&mut self, pos: Vec2, kind: FruitKind) {
        self.burst(pos, kind.flesh_color(), SLICE_FLESH_PARTICLES, 1.0);
        self.burst(pos, kind.skin_color(), SLICE_SKIN_PARTICLES, 1.0);
        self.add_splatter(pos, kind.flesh_color());
    }

    /// Three-wave mixed burst for the bomb explosion.
    pub(crate) fn explosion_effects(&mut self, pos: Vec2) {
        self.burst(pos, Rgb::RED, 30, 3.0);
        self.burst(pos, Rgb::AMBER, 20, 2.0);
        self.burst(pos, Rgb::WHITE, 10, 4.0);
    }

    /// Leave a decal at the slice position. The collection keeps only the
    /// newest `MAX_SPLATTERS`; decay removal is independent of this cap.
    pub(crate) fn add_splatter(&mut self, pos: Vec2, color: Rgb) {
        let rotation = self.rng.random_range(0.0..std::f32::consts::TAU);
        let scale = self.rng.random_range(0.8..1.5);
        self.splatters.push(Splatter {
            pos,
            color,
            rotation,
            scale,
            opacity: SPLATTER_START_OPACITY,
        });
        if self.splatters.len() > MAX_SPLATTERS {
            self.splatters.remove(0);
        }
    }

    /// Advance debris one tick: drift, fall, fade; drop the dead.
    pub(crate) fn step_particles(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.vel.y += GRAVITY;
            p.life -= PARTICLE_LIFE_DECAY;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    /// Fade splatter marks one tick; drop fully faded ones.
    pub(crate) fn step_splatters(&mut self) {
        for s in &mut self.splatters {
            s.opacity -= SPLATTER_OPACITY_DECAY;
        }
        self.splatters.retain(|s| s.opacity > 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Mode;

    fn state() -> RoundState {
        RoundState::new(Mode::Classic, 800.0, 600.0, 5)
    }

    #[test]
    fn test_burst_shape() {
        let mut s = state();
        s.burst(Vec2::new(100.0, 100.0), Rgb::WHITE, 25, 2.0);
        assert_eq!(s.particles.len(), 25);
        for p in &s.particles {
            assert_eq!(p.pos, Vec2::new(100.0, 100.0));
            assert_eq!(p.life, 1.0);
            assert!(p.vel.x.abs() <= 10.0 && p.vel.y.abs() <= 10.0);
            assert!(p.size >= 2.0 && p.size < 6.0);
        }
    }

    #[test]
    fn test_slice_effects_counts() {
        let mut s = state();
        s.slice_effects(Vec2::new(50.0, 50.0), FruitKind::Apple);
        assert_eq!(
            s.particles.len(),
            SLICE_FLESH_PARTICLES + SLICE_SKIN_PARTICLES
        );
        assert_eq!(s.splatters.len(), 1);
        let flesh = FruitKind::Apple.flesh_color();
        assert_eq!(s.splatters[0].color, flesh);
        assert_eq!(s.splatters[0].opacity, SPLATTER_START_OPACITY);
        assert_eq!(
            s.particles.iter().filter(|p| p.color == flesh).count(),
            SLICE_FLESH_PARTICLES
        );
    }

    #[test]
    fn test_explosion_effects_counts() {
        let mut s = state();
        s.explosion_effects(Vec2::ZERO);
        assert_eq!(s.particles.len(), 60);
        assert_eq!(s.particles.iter().filter(|p| p.color == Rgb::RED).count(), 30);
        assert_eq!(
            s.particles.iter().filter(|p| p.color == Rgb::AMBER).count(),
            20
        );
    }

    #[test]
    fn test_splatter_cap_evicts_oldest() {
        let mut s = state();
        for i in 0..15 {
            s.add_splatter(Vec2::new(i as f32, 0.0), Rgb::RED);
            assert!(s.splatters.len() <= MAX_SPLATTERS);
        }
        assert_eq!(s.splatters.len(), MAX_SPLATTERS);
        // Oldest five were evicted.
        assert_eq!(s.splatters[0].pos.x, 5.0);
    }

    #[test]
    fn test_particle_decay_and_removal() {
        let mut s = state();
        s.burst(Vec2::ZERO, Rgb::WHITE, 1, 1.0);
        // Life 1.0 at 0.02/tick: alive through tick 49, gone right after
        // (within accumulated float rounding).
        for _ in 0..49 {
            s.step_particles();
        }
        assert_eq!(s.particles.len(), 1);
        for _ in 0..3 {
            s.step_particles();
        }
        assert!(s.particles.is_empty());
    }

    #[test]
    fn test_particles_fall_under_gravity() {
        let mut s = state();
        s.particles.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            color: Rgb::WHITE,
            life: 1.0,
            size: 3.0,
        });
        s.step_particles();
        s.step_particles();
        assert!(s.particles[0].vel.y > 0.0);
        assert!(s.particles[0].pos.y > 0.0);
    }

    #[test]
    fn test_splatter_fade_and_removal() {
        let mut s = state();
        s.add_splatter(Vec2::ZERO, Rgb::RED);
        // 0.8 at 0.005/tick: alive through tick 159, gone right after
        // (within accumulated float rounding).
        for _ in 0..159 {
            s.step_splatters();
        }
        assert_eq!(s.splatters.len(), 1);
        for _ in 0..3 {
            s.step_splatters();
        }
        assert!(s.splatters.is_empty());
    }
}
