//! Read-only view of a `GameState` for the presentation layer.
//!
//! Everything a renderer or DOM layer needs is precomputed here so the
//! presentation side never reaches into simulation types.

use serde::Serialize;

use crate::config::GameConfig;
use crate::constants::*;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub number: u8,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: &'static str,
    pub health: i32,
    pub shield: i32,
    pub health_percent: i32,
    pub shield_percent: i32,
    pub shield_active: bool,
    /// Text painted above the avatar, if any.
    pub message: Option<String>,
    /// Live DOM label built from the current name input.
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectileView {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub frame: u64,
    pub phase: &'static str,
    pub countdown: Option<i32>,
    pub paused: bool,
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub players: [PlayerView; 2],
    pub projectiles: Vec<ProjectileView>,
    pub score: [u32; 2],
    pub score_lines: [String; 2],
    pub winner_text: Option<String>,
    pub controls_help: [&'static str; 2],
    pub start_screen: bool,
    pub game_over_screen: bool,
    /// Pause, restart and full-screen buttons are shown once play begins.
    pub controls_visible: bool,
    pub events: Vec<GameEvent>,
}

fn percent(value: i32, max: i32) -> i32 {
    if max <= 0 {
        0
    } else {
        (i64::from(value) * 100 / i64::from(max)) as i32
    }
}

fn player_view(state: &GameState, slot: PlayerSlot, config: &GameConfig) -> PlayerView {
    let p = state.player(slot);
    let live_name = normalize_name(&state.roster.inputs[slot.index()], slot);
    PlayerView {
        number: slot.number(),
        x: p.x,
        y: p.y,
        width: p.width,
        height: p.height,
        color: PLAYER_COLORS[slot.index()],
        health: p.health,
        shield: p.shield,
        health_percent: percent(p.health, config.max_health),
        shield_percent: percent(p.shield, config.max_shield),
        shield_active: p.shield_active,
        message: p.message.clone(),
        label: badge_label(&live_name, slot),
    }
}

pub fn snapshot(state: &GameState, config: &GameConfig) -> Snapshot {
    let countdown = match state.phase {
        Phase::Countdown { shown, .. } => shown,
        _ => None,
    };
    let projectiles = state
        .projectiles
        .iter()
        .map(|proj| ProjectileView {
            x: proj.x,
            y: proj.y,
            width: proj.width,
            height: proj.height,
            color: PROJECTILE_COLORS[proj.owner.index()],
        })
        .collect();

    Snapshot {
        frame: state.frame,
        phase: state.phase.name(),
        countdown,
        paused: state.paused,
        canvas_width: config.canvas_width,
        canvas_height: config.canvas_height,
        players: [
            player_view(state, PlayerSlot::One, config),
            player_view(state, PlayerSlot::Two, config),
        ],
        projectiles,
        score: state.score,
        score_lines: [
            format!("Player 1: {}", state.score[0]),
            format!("Player 2: {}", state.score[1]),
        ],
        winner_text: state.result().map(|r| r.winner_text()),
        controls_help: CONTROLS_HELP,
        start_screen: state.phase == Phase::NotStarted,
        game_over_screen: state.result().is_some(),
        controls_visible: matches!(state.phase, Phase::Running | Phase::RoundOver(_)),
        events: state.events.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{create_initial_state, default_config};

    #[test]
    fn snapshot_of_fresh_state() {
        let config = default_config();
        let state = create_initial_state(&config);
        let snap = snapshot(&state, &config);
        assert_eq!(snap.phase, "notStarted");
        assert!(snap.start_screen);
        assert!(!snap.controls_visible);
        assert_eq!(snap.players[0].label, "🟦 Player 1");
        assert_eq!(snap.players[1].color, "red");
        assert_eq!(snap.players[1].health_percent, 100);
        assert_eq!(snap.score_lines[1], "Player 2: 0");
        assert_eq!(snap.winner_text, None);
    }

    #[test]
    fn labels_follow_live_input() {
        let config = default_config();
        let mut state = create_initial_state(&config);
        state.roster.inputs[1] = " Grace ".to_string();
        let snap = snapshot(&state, &config);
        assert_eq!(snap.players[1].label, "🟥 Grace");
        // Committed names change only at round start.
        assert_eq!(state.roster.names[1], "Player 2");
    }

    #[test]
    fn round_over_view() {
        let config = default_config();
        let mut state = create_initial_state(&config);
        state.phase = Phase::RoundOver(RoundResult::Winner(PlayerSlot::One));
        state.score = [1, 0];
        state.projectiles.push(Projectile {
            owner: PlayerSlot::Two,
            x: 10,
            y: 20,
            width: 10,
            height: 4,
            vx: -10,
            vy: 0,
        });
        let snap = snapshot(&state, &config);
        assert_eq!(snap.winner_text.as_deref(), Some("Player 1 wins!"));
        assert!(snap.game_over_screen);
        assert!(snap.controls_visible);
        assert_eq!(snap.projectiles[0].color, "orange");
        assert_eq!(snap.score_lines[0], "Player 1: 1");
    }

    #[test]
    fn serializes_camel_case() {
        let config = default_config();
        let state = create_initial_state(&config);
        let json = serde_json::to_value(snapshot(&state, &config)).unwrap();
        assert_eq!(json["players"][0]["shieldPercent"], 100);
        assert_eq!(json["canvasWidth"], 800);
        assert!(json["countdown"].is_null());
    }

    #[test]
    fn percent_of_large_pools() {
        assert_eq!(percent(i32::MAX / 2, i32::MAX), 49);
        assert_eq!(percent(50, 200), 25);
        assert_eq!(percent(5, 0), 0);
    }
}
