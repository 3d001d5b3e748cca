use crate::config::GameConfig;
use crate::input::{movement_keys, shield_key, Direction, HeldKeys};
use crate::types::*;

/// Move one step per held direction key, never leaving the canvas.
/// Speed is per frame; there is no time-delta integration.
pub fn apply_player_input(p: &PlayerState, keys: &HeldKeys, config: &GameConfig) -> PlayerState {
    let max_x = config.canvas_width - p.width;
    let max_y = config.canvas_height - p.height;
    let speed = config.player_speed;

    let mut x = p.x;
    let mut y = p.y;
    for (key, dir) in movement_keys(p.slot) {
        if !keys.is_held(key) {
            continue;
        }
        match dir {
            Direction::Left if x > 0 => x = x.saturating_sub(speed).max(0),
            Direction::Right if x < max_x => x = x.saturating_add(speed).min(max_x),
            Direction::Up if y > 0 => y = y.saturating_sub(speed).max(0),
            Direction::Down if y < max_y => y = y.saturating_add(speed).min(max_y),
            _ => {}
        }
    }

    PlayerState {
        x,
        y,
        shield_active: keys.is_held(shield_key(p.slot)),
        ..p.clone()
    }
}

/// Advance the drop-in animation by one frame, stopping exactly on the drop
/// target. Returns true once the player is there.
pub fn drop_step(p: &mut PlayerState, config: &GameConfig) -> bool {
    if p.y < config.drop_target_y {
        p.y = p.y.saturating_add(config.drop_speed).min(config.drop_target_y);
    }
    p.y >= config.drop_target_y
}
