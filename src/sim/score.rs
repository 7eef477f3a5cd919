//! Combo and score accounting.
//!
//! `register_slice` is the sole mutator of score and combo. It runs exactly
//! once per successful fruit slice, never batched, so the multiplier always
//! reflects the combo count at the moment of that slice.

use super::state::{GameEvent, RoundState};
use crate::consts::COMBO_WINDOW_MS;

impl RoundState {
    /// Record one successful fruit slice at `now_ms`.
    ///
    /// A slice inside the combo window extends the multiplier; anything
    /// later restarts it at 1. Points are scaled by the combo count at the
    /// time of the slice, so rapid chains compound.
    pub fn register_slice(&mut self, points: u32, now_ms: f64) {
        if now_ms - self.last_slice_ms < COMBO_WINDOW_MS {
            self.combo += 1;
            self.push_event(GameEvent::ComboExtended { combo: self.combo });
        } else {
            self.combo = 1;
        }
        self.last_slice_ms = now_ms;
        self.best_combo = self.best_combo.max(self.combo);
        self.score += points as u64 * self.combo as u64;
        self.push_event(GameEvent::Sliced {
            points,
            combo: self.combo,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Mode;

    fn state() -> RoundState {
        RoundState::new(Mode::Classic, 800.0, 600.0, 1)
    }

    #[test]
    fn test_first_slice_starts_at_combo_one() {
        let mut s = state();
        s.register_slice(10, 5_000.0);
        assert_eq!(s.combo, 1);
        assert_eq!(s.best_combo, 1);
        assert_eq!(s.score, 10);
    }

    #[test]
    fn test_rapid_slices_compound() {
        // Two slices 200 ms apart on fruits worth 10 and 15.
        let mut s = state();
        s.register_slice(10, 1_000.0);
        s.register_slice(15, 1_200.0);
        assert_eq!(s.score, 10 * 1 + 15 * 2);
        assert_eq!(s.combo, 2);
        assert_eq!(s.best_combo, 2);
    }

    #[test]
    fn test_gap_at_window_edge_resets() {
        let mut s = state();
        s.register_slice(10, 1_000.0);
        // Exactly the window is outside it.
        s.register_slice(10, 1_400.0);
        assert_eq!(s.combo, 1);
        // Just inside extends.
        s.register_slice(10, 1_799.0);
        assert_eq!(s.combo, 2);
    }

    #[test]
    fn test_best_combo_never_decreases() {
        let mut s = state();
        for i in 0..4 {
            s.register_slice(10, 1_000.0 + i as f64 * 100.0);
        }
        assert_eq!(s.best_combo, 4);
        // Window expires, combo restarts, best stays.
        s.register_slice(10, 10_000.0);
        assert_eq!(s.combo, 1);
        assert_eq!(s.best_combo, 4);
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut s = state();
        let mut last = 0;
        for i in 0..20 {
            s.register_slice(5, i as f64 * 350.0);
            assert!(s.score > last);
            last = s.score;
        }
    }

    #[test]
    fn test_combo_events() {
        let mut s = state();
        s.register_slice(10, 0.0);
        s.register_slice(10, 100.0);
        let events = s.drain_events();
        assert!(events.contains(&GameEvent::Sliced { points: 10, combo: 1 }));
        assert!(events.contains(&GameEvent::ComboExtended { combo: 2 }));
        assert!(events.contains(&GameEvent::Sliced { points: 10, combo: 2 }));
    }
}
