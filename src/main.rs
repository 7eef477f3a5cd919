//! Fruit Slash entry point
//!
//! Headless demo: runs one round with a scripted pointer sweep and prints
//! the round summary as JSON. Usage:
//!
//! ```text
//! fruit-slash [classic|zen] [max-frames]
//! ```

use fruit_slash::audio::LogAudio;
use fruit_slash::consts::TICK_HZ;
use fruit_slash::driver::{NullPresenter, RoundDriver, RoundSummary};
use fruit_slash::input::ScriptedPointer;
use fruit_slash::settings::RoundSettings;
use fruit_slash::sim::Mode;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mode = match args.next() {
        None => Mode::Classic,
        Some(raw) => match Mode::from_str(&raw) {
            Some(mode) => mode,
            None => {
                eprintln!("unknown mode '{raw}' (expected 'classic' or 'zen')");
                std::process::exit(2);
            }
        },
    };
    let max_frames: u64 = match args.next() {
        None => 7_200,
        Some(raw) => match raw.parse() {
            Ok(frames) => frames,
            Err(_) => {
                eprintln!("invalid frame count '{raw}'");
                std::process::exit(2);
            }
        },
    };

    let settings = RoundSettings::with_mode(mode);
    let pointer = ScriptedPointer::sweep(settings.width, settings.height, max_frames as usize);
    let mut driver = RoundDriver::new(&settings, pointer, LogAudio, NullPresenter);

    // Headless frames at the nominal cadence, without real-time sleeps.
    let frame_ms = 1000.0 / TICK_HZ as f64;
    let mut summary = None;
    for frame in 0..max_frames {
        if let Some(s) = driver.step(frame as f64 * frame_ms) {
            summary = Some(s);
            break;
        }
    }

    // Frame limit reached before the round ended: report where it stands.
    let summary = summary.unwrap_or_else(|| {
        log::warn!("round still running after {max_frames} frames");
        RoundSummary {
            score: driver.state().score,
            best_combo: driver.state().best_combo,
        }
    });
    driver.shutdown();

    println!(
        "{}",
        serde_json::to_string_pretty(&summary).expect("summary serializes")
    );
}
