use tracing::{debug, info};

use crate::config::GameConfig;
use crate::input::FrameInput;
use crate::physics::*;
use crate::projectiles::*;
use crate::round::{apply_input_event, check_round_over};
use crate::types::*;

/// Advance the game by exactly one frame.
///
/// Sub-step order:
///  1. Clear last frame's events, advance the frame counter
///  2. Apply queued input events in arrival order (keys, names, commands)
///  3. Advance the phase, unless step 2 just entered it:
///     - Countdown: accumulate elapsed time, show a number per interval
///     - Dropping: move both players down one drop step
///     - Intro: hold the name messages until the intro expires
///     - Running (not paused): movement + shields, projectiles, round-over check
///     - NotStarted / RoundOver: nothing
pub fn step_mut(state: &mut GameState, input: &FrameInput, config: &GameConfig) {
    state.events.clear();
    state.frame += 1;

    for event in &input.events {
        apply_input_event(state, event, config);
    }
    if entered_phase(state) {
        return;
    }

    match state.phase {
        Phase::NotStarted | Phase::RoundOver(_) => {}
        Phase::Countdown {
            next,
            shown,
            carry_ms,
        } => {
            let carry_ms = carry_ms.saturating_add(input.elapsed_ms);
            advance_countdown(state, next, shown, carry_ms, config)
        }
        Phase::Dropping => advance_drop(state, config),
        Phase::Intro { remaining_ms } => {
            let remaining_ms = remaining_ms.saturating_sub(input.elapsed_ms);
            if remaining_ms == 0 {
                for p in state.players.iter_mut() {
                    p.message = None;
                }
                state.phase = Phase::Running;
                state.events.push(GameEvent::RoundStarted);
                info!(frame = state.frame, "round running");
            } else {
                state.phase = Phase::Intro { remaining_ms };
            }
        }
        Phase::Running => {
            if !state.paused {
                run_frame(state, config);
            }
        }
    }
}

/// Pure wrapper over `step_mut`.
pub fn step(prev: &GameState, input: &FrameInput, config: &GameConfig) -> GameState {
    let mut next = prev.clone();
    step_mut(&mut next, input, config);
    next
}

/// True when this frame's input started or reset the round, even if the game
/// ends up back in the phase it began the frame in.
fn entered_phase(state: &GameState) -> bool {
    state
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::CountdownStarted | GameEvent::Restarted))
}

fn advance_countdown(
    state: &mut GameState,
    mut next: i32,
    mut shown: Option<i32>,
    mut carry_ms: u32,
    config: &GameConfig,
) {
    while carry_ms >= config.countdown_interval_ms {
        carry_ms -= config.countdown_interval_ms;
        shown = Some(next);
        next -= 1;
        if next < 0 {
            state.phase = Phase::Dropping;
            debug!(frame = state.frame, "drop started");
            return;
        }
    }
    state.phase = Phase::Countdown {
        next,
        shown,
        carry_ms,
    };
}

fn advance_drop(state: &mut GameState, config: &GameConfig) {
    let mut landed = true;
    for p in state.players.iter_mut() {
        landed &= drop_step(p, config);
    }
    if landed {
        for slot in PlayerSlot::ALL {
            let label = badge_label(&state.roster.names[slot.index()], slot);
            state.player_mut(slot).message = Some(label);
        }
        state.phase = Phase::Intro {
            remaining_ms: config.intro_ms,
        };
    }
}

fn run_frame(state: &mut GameState, config: &GameConfig) {
    // 1. Movement + shield flags
    let keys = state.keys;
    for p in state.players.iter_mut() {
        let moved = apply_player_input(p, &keys, config);
        *p = moved;
    }

    // 2. Projectiles: advance, exit, hit
    let hits = update_projectiles(&mut state.projectiles, &mut state.players, config);
    for hit in hits {
        let target = state.player(hit.target);
        debug!(
            shooter = hit.owner.number(),
            target = hit.target.number(),
            absorbed = hit.absorbed,
            health = target.health,
            shield = target.shield,
            "player hit"
        );
        state.events.push(GameEvent::Hit {
            target: hit.target,
            absorbed: hit.absorbed,
        });
    }

    // 3. Termination
    check_round_over(state);
}
