//! Generates replay JSON files for the headless host.
//!
//! Usage:
//!   cargo run -p duel-core --example gen-replay -- [idle|duel|shielded|draw] > replay.json

use duel_core::*;

const FRAME_MS: u32 = 16;

/// Start the round and wait out the countdown, drop and intro.
fn drop_in(frames: &mut Vec<FrameInput>) {
    frames.push(FrameInput::with_events(FRAME_MS, vec![InputEvent::Start]));
    // 4 s countdown, 60 drop frames, 2 s intro, with margin.
    for _ in 0..(4000 + 60 * FRAME_MS + 2000) / FRAME_MS + 2 {
        frames.push(FrameInput::idle(FRAME_MS));
    }
}

/// Tap a fire key and let the shot travel across the arena.
fn volley(frames: &mut Vec<FrameInput>, keys: &[Key], extra: &[InputEvent]) {
    let mut events: Vec<InputEvent> = keys.iter().map(|&k| InputEvent::KeyDown(k)).collect();
    events.extend(keys.iter().map(|&k| InputEvent::KeyUp(k)));
    events.extend(extra.iter().cloned());
    frames.push(FrameInput::with_events(FRAME_MS, events));
    for _ in 0..60 {
        frames.push(FrameInput::idle(FRAME_MS));
    }
}

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "idle".to_string());

    let config = default_config();
    let mut frames = Vec::new();

    match mode.as_str() {
        "idle" => {
            // Nobody touches anything after the drop-in; round stays live.
            drop_in(&mut frames);
            frames.extend((0..600).map(|_| FrameInput::idle(FRAME_MS)));
        }
        "duel" => {
            // Player 1 fires until player 2 goes down.
            drop_in(&mut frames);
            for _ in 0..10 {
                volley(&mut frames, &[Key::Space], &[]);
            }
        }
        "shielded" => {
            // Player 2 holds the shield the whole time; it soaks ten hits first.
            drop_in(&mut frames);
            frames.push(FrameInput::with_events(FRAME_MS, vec![InputEvent::KeyDown(Key::M)]));
            for _ in 0..20 {
                volley(&mut frames, &[Key::Space], &[]);
            }
        }
        "draw" => {
            // Mirror fire: both land the tenth hit on the same frame.
            drop_in(&mut frames);
            for _ in 0..10 {
                volley(&mut frames, &[Key::Space, Key::Enter], &[]);
            }
        }
        _ => {
            eprintln!("Unknown mode: {}. Use 'idle', 'duel', 'shielded' or 'draw'", mode);
            std::process::exit(1);
        }
    };

    let replay = Replay { config, frames };

    // Verify by running the sim
    let (_, outcome) = match run_replay(&replay, None) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("invalid config: {e}");
            std::process::exit(1);
        }
    };

    eprintln!("=== Sim result ({} mode) ===", mode);
    eprintln!("Frames: {}", outcome.frames_run);
    eprintln!("Phase: {}", outcome.phase);
    eprintln!(
        "Result: {}",
        outcome.winner_text().unwrap_or_else(|| "in progress".to_string())
    );
    eprintln!("Scores: P1={}, P2={}", outcome.score[0], outcome.score[1]);
    eprintln!(
        "Health: P1={}, P2={}  Shield: P1={}, P2={}",
        outcome.health[0], outcome.health[1], outcome.shield[0], outcome.shield[1]
    );

    println!("{}", serde_json::to_string(&replay).unwrap());
}
