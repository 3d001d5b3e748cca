use tracing::{debug, info};

use crate::config::GameConfig;
use crate::init::reset_round;
use crate::input::{Action, InputEvent};
use crate::projectiles::spawn_projectile;
use crate::types::*;

/// Apply one queued input event. Events are applied in arrival order before
/// the frame advances, so edge-triggered firing behaves as if each event were
/// handled the moment it arrived.
pub fn apply_input_event(state: &mut GameState, event: &InputEvent, config: &GameConfig) {
    match event {
        InputEvent::KeyDown(key) => match key.action() {
            Action::Pause => toggle_pause(state),
            Action::Fire(slot) => {
                try_fire(state, slot, config);
                state.keys.press(*key);
            }
            _ => state.keys.press(*key),
        },
        InputEvent::KeyUp(key) => {
            state.keys.release(*key);
            if let Action::Fire(slot) = key.action() {
                state.player_mut(slot).can_shoot = true;
            }
        }
        InputEvent::NameInput { slot, text } => {
            state.roster.inputs[slot.index()] = text.clone();
        }
        InputEvent::Start => {
            start_round(state, config);
        }
        InputEvent::Restart => restart(state, config),
        InputEvent::TogglePause => toggle_pause(state),
    }
}

/// Fire if the round is live and the fire key was released since the last shot.
pub fn try_fire(state: &mut GameState, slot: PlayerSlot, config: &GameConfig) -> bool {
    if !state.phase.is_running() || state.paused || !state.player(slot).can_shoot {
        return false;
    }
    let proj = spawn_projectile(state.player(slot), config);
    state.projectiles.push(proj);
    state.player_mut(slot).can_shoot = false;
    state.events.push(GameEvent::Shot { owner: slot });
    debug!(owner = slot.number(), x = proj.x, y = proj.y, "shot fired");
    true
}

/// Commit the typed names and begin the drop-in countdown. Only valid from the
/// start screen; returns false otherwise.
pub fn start_round(state: &mut GameState, config: &GameConfig) -> bool {
    if state.phase != Phase::NotStarted {
        debug!(phase = state.phase.name(), "start ignored");
        return false;
    }
    for slot in PlayerSlot::ALL {
        state.roster.names[slot.index()] =
            normalize_name(&state.roster.inputs[slot.index()], slot);
    }
    state.phase = Phase::Countdown {
        next: config.countdown_from,
        shown: None,
        carry_ms: 0,
    };
    state.events.push(GameEvent::CountdownStarted);
    info!(
        p1 = %state.roster.names[0],
        p2 = %state.roster.names[1],
        "countdown started"
    );
    true
}

/// Pause toggles in every phase, including before the round starts.
pub fn toggle_pause(state: &mut GameState) {
    state.paused = !state.paused;
    state.events.push(GameEvent::PauseToggled {
        paused: state.paused,
    });
    debug!(paused = state.paused, "pause toggled");
}

/// Back to the start screen with fresh players and default names.
pub fn restart(state: &mut GameState, config: &GameConfig) {
    reset_round(state, config);
    state.events.push(GameEvent::Restarted);
    info!(score_p1 = state.score[0], score_p2 = state.score[1], "round restarted");
}

/// End the round if anyone is at zero health. Both at zero is a draw and
/// scores nobody; otherwise the survivor scores exactly one.
pub fn check_round_over(state: &mut GameState) -> Option<RoundResult> {
    let down = [state.players[0].is_down(), state.players[1].is_down()];
    let result = match down {
        [false, false] => return None,
        [true, true] => RoundResult::Draw,
        [true, false] => RoundResult::Winner(PlayerSlot::Two),
        [false, true] => RoundResult::Winner(PlayerSlot::One),
    };
    if let RoundResult::Winner(slot) = result {
        state.score[slot.index()] += 1;
    }
    state.phase = Phase::RoundOver(result);
    state.events.push(GameEvent::RoundOver(result));
    info!(
        result = %result.winner_text(),
        score_p1 = state.score[0],
        score_p2 = state.score[1],
        "round over"
    );
    Some(result)
}
