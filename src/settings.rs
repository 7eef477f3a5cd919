//! Round configuration
//!
//! Resolved and validated before a round starts; the tick loop never sees
//! an invalid configuration. Mode parsing lives on `sim::Mode` - an
//! unrecognized name is rejected here at the boundary, not handled
//! mid-tick.

use serde::{Deserialize, Serialize};

use crate::sim::Mode;

/// Configuration for one round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSettings {
    pub mode: Mode,
    /// Play-field size in simulation units.
    pub width: f32,
    pub height: f32,
    /// Fixed seed for a reproducible spawn schedule; `None` picks one from
    /// the system clock.
    pub seed: Option<u64>,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            mode: Mode::Classic,
            width: 1280.0,
            height: 720.0,
            seed: None,
        }
    }
}

impl RoundSettings {
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Resolve the seed, falling back to the wall clock.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        })
    }
}
