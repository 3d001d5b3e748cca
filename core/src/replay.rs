use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};
use crate::init::create_initial_state;
use crate::input::FrameInput;
use crate::step::step_mut;
use crate::types::*;

/// A recorded session: the config it ran under and every frame's input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    pub config: GameConfig,
    pub frames: Vec<FrameInput>,
}

/// Summary of where a replay left the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayOutcome {
    pub frames_run: u64,
    pub phase: String,
    /// Result of the round in progress, if it has ended.
    pub result: Option<RoundResult>,
    pub score: [u32; 2],
    pub health: [i32; 2],
    pub shield: [i32; 2],
    pub rounds_finished: u32,
}

impl ReplayOutcome {
    pub fn winner_text(&self) -> Option<String> {
        self.result.map(|r| r.winner_text())
    }
}

/// Drive a fresh state through at most `max_frames` of the replay.
pub fn run_replay(
    replay: &Replay,
    max_frames: Option<usize>,
) -> Result<(GameState, ReplayOutcome), ConfigError> {
    replay.config.validate()?;

    let limit = max_frames.unwrap_or(usize::MAX);
    let mut state = create_initial_state(&replay.config);
    let mut rounds_finished = 0;
    for input in replay.frames.iter().take(limit) {
        step_mut(&mut state, input, &replay.config);
        rounds_finished += state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::RoundOver(_)))
            .count() as u32;
    }

    let outcome = ReplayOutcome {
        frames_run: state.frame,
        phase: state.phase.name().to_string(),
        result: state.result(),
        score: state.score,
        health: [state.players[0].health, state.players[1].health],
        shield: [state.players[0].shield, state.players[1].shield],
        rounds_finished,
    };
    Ok((state, outcome))
}
