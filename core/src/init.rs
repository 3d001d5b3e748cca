use crate::config::GameConfig;
use crate::constants::*;
use crate::input::HeldKeys;
use crate::types::*;

/// Default arcade config: 800x600 canvas, players dropping in at x=100 and x=600.
pub fn default_config() -> GameConfig {
    GameConfig {
        canvas_width: CANVAS_WIDTH,
        canvas_height: CANVAS_HEIGHT,
        player_width: PLAYER_WIDTH,
        player_height: PLAYER_HEIGHT,
        player_speed: PLAYER_SPEED,
        spawn_x: SPAWN_X,
        spawn_y: SPAWN_Y,
        projectile_width: PROJECTILE_WIDTH,
        projectile_height: PROJECTILE_HEIGHT,
        projectile_speed: PROJECTILE_SPEED,
        hit_damage: HIT_DAMAGE,
        max_health: MAX_HEALTH,
        max_shield: MAX_SHIELD,
        countdown_from: COUNTDOWN_FROM,
        countdown_interval_ms: COUNTDOWN_INTERVAL_MS,
        drop_target_y: DROP_TARGET_Y,
        drop_speed: DROP_SPEED,
        intro_ms: INTRO_MS,
    }
}

/// A player at its spawn point with full health and shield.
pub fn spawn_player(slot: PlayerSlot, config: &GameConfig) -> PlayerState {
    PlayerState {
        slot,
        x: config.spawn_x[slot.index()],
        y: config.spawn_y,
        width: config.player_width,
        height: config.player_height,
        health: config.max_health,
        shield: config.max_shield,
        shield_active: false,
        can_shoot: true,
        message: None,
    }
}

/// Fresh state as loaded: nothing started, zero score, default names.
pub fn create_initial_state(config: &GameConfig) -> GameState {
    GameState {
        frame: 0,
        phase: Phase::NotStarted,
        paused: false,
        keys: HeldKeys::default(),
        players: [
            spawn_player(PlayerSlot::One, config),
            spawn_player(PlayerSlot::Two, config),
        ],
        projectiles: Vec::new(),
        score: [0, 0],
        roster: Roster::default(),
        events: Vec::new(),
    }
}

/// Discard round state and return to the start screen. Score, held keys and
/// the frame counter carry over.
pub fn reset_round(state: &mut GameState, config: &GameConfig) {
    for slot in PlayerSlot::ALL {
        let can_shoot = state.player(slot).can_shoot;
        *state.player_mut(slot) = PlayerState {
            can_shoot,
            ..spawn_player(slot, config)
        };
    }
    state.projectiles.clear();
    state.roster = Roster::default();
    state.paused = false;
    state.phase = Phase::NotStarted;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_correct() {
        let config = default_config();
        let state = create_initial_state(&config);
        assert_eq!(state.frame, 0);
        assert_eq!(state.phase, Phase::NotStarted);
        assert!(!state.paused);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, [0, 0]);

        let p1 = state.player(PlayerSlot::One);
        assert_eq!((p1.x, p1.y), (100, 0));
        assert_eq!((p1.width, p1.height), (40, 40));
        assert_eq!(p1.health, MAX_HEALTH);
        assert_eq!(p1.shield, MAX_SHIELD);
        assert!(p1.can_shoot);

        let p2 = state.player(PlayerSlot::Two);
        assert_eq!((p2.x, p2.y), (600, 0));
        assert_eq!(state.roster.names, ["Player 1", "Player 2"]);
    }

    #[test]
    fn reset_keeps_score() {
        let config = default_config();
        let mut state = create_initial_state(&config);
        state.score = [2, 5];
        state.players[0].health = 0;
        state.players[1].shield = 40;
        state.players[1].x = 12;
        state.roster.names[0] = "Ada".to_string();
        state.phase = Phase::RoundOver(RoundResult::Winner(PlayerSlot::Two));
        state.paused = true;

        reset_round(&mut state, &config);

        assert_eq!(state.score, [2, 5]);
        assert_eq!(state.players[0].health, MAX_HEALTH);
        assert_eq!(state.players[1].shield, MAX_SHIELD);
        assert_eq!(state.players[1].x, 600);
        assert_eq!(state.roster.names[0], "Player 1");
        assert_eq!(state.phase, Phase::NotStarted);
        assert!(!state.paused);
    }
}
