//! Pointer capability seam
//!
//! The simulation polls exactly one sample per tick and treats absence as
//! a valid steady state (the trail tapers). Backends - mouse, touch, or a
//! hand-tracking pipeline - deliver positions already mapped into
//! play-field coordinates with any mirroring applied, and must degrade to
//! `None` on failure rather than erroring into the tick loop.

use glam::Vec2;

/// A source of pointer positions, polled once per tick.
pub trait PointerSource {
    /// Latest pointer position, if the backend currently has one.
    fn sample(&mut self) -> Option<Vec2>;
}

/// No pointer, ever. The trail drains and nothing gets cut.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdlePointer;

impl PointerSource for IdlePointer {
    fn sample(&mut self) -> Option<Vec2> {
        None
    }
}

/// Plays back a fixed path one sample per tick, then goes quiet.
///
/// Used by the demo binary and scenario tests in place of a live backend.
#[derive(Debug, Clone)]
pub struct ScriptedPointer {
    path: Vec<Option<Vec2>>,
    cursor: usize,
}

impl ScriptedPointer {
    pub fn new(path: Vec<Option<Vec2>>) -> Self {
        Self { path, cursor: 0 }
    }

    /// A continuous sweep across the field, `frames` samples long: the
    /// pointer oscillates horizontally through the middle of the field
    /// fast enough to cut whatever it crosses.
    pub fn sweep(width: f32, height: f32, frames: usize) -> Self {
        let path = (0..frames)
            .map(|i| {
                let t = i as f32;
                let x = width * (0.5 + 0.45 * (t * 0.15).sin());
                let y = height * (0.55 + 0.2 * (t * 0.075).cos());
                Some(Vec2::new(x, y))
            })
            .collect();
        Self::new(path)
    }
}

impl PointerSource for ScriptedPointer {
    fn sample(&mut self) -> Option<Vec2> {
        let sample = self.path.get(self.cursor).copied().flatten();
        self.cursor += 1;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_pointer_is_always_absent() {
        let mut pointer = IdlePointer;
        for _ in 0..5 {
            assert_eq!(pointer.sample(), None);
        }
    }

    #[test]
    fn test_scripted_pointer_plays_back_then_stops() {
        let mut pointer = ScriptedPointer::new(vec![
            Some(Vec2::new(1.0, 2.0)),
            None,
            Some(Vec2::new(3.0, 4.0)),
        ]);
        assert_eq!(pointer.sample(), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(pointer.sample(), None);
        assert_eq!(pointer.sample(), Some(Vec2::new(3.0, 4.0)));
        // Past the end of the script: quiet forever.
        assert_eq!(pointer.sample(), None);
        assert_eq!(pointer.sample(), None);
    }

    #[test]
    fn test_sweep_stays_in_field_and_moves_fast() {
        let (w, h) = (800.0, 600.0);
        let mut pointer = ScriptedPointer::sweep(w, h, 200);
        let mut prev: Option<Vec2> = None;
        let mut max_step = 0.0f32;
        for _ in 0..200 {
            let p = pointer.sample().unwrap();
            assert!(p.x >= 0.0 && p.x <= w);
            assert!(p.y >= 0.0 && p.y <= h);
            if let Some(prev) = prev {
                max_step = max_step.max(prev.distance(p));
            }
            prev = Some(p);
        }
        // Fast enough that the smoothed trail can exceed the cut threshold.
        assert!(max_step > 20.0);
    }
}
