use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest canvas edge accepted, in pixels.
pub const MAX_CANVAS_EDGE: i32 = 16_384;
/// Largest health or shield pool accepted.
pub const MAX_POOL: i32 = 1_000_000;

/// Every gameplay tunable. `init::default_config` reproduces the arcade values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub player_width: i32,
    pub player_height: i32,
    pub player_speed: i32,
    pub spawn_x: [i32; 2],
    pub spawn_y: i32,
    pub projectile_width: i32,
    pub projectile_height: i32,
    pub projectile_speed: i32,
    pub hit_damage: i32,
    pub max_health: i32,
    pub max_shield: i32,
    pub countdown_from: i32,
    pub countdown_interval_ms: u32,
    pub drop_target_y: i32,
    pub drop_speed: i32,
    pub intro_ms: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("canvas {width}x{height} cannot hold a {player_width}x{player_height} player")]
    CanvasTooSmall {
        width: i32,
        height: i32,
        player_width: i32,
        player_height: i32,
    },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: i64 },
    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        field: &'static str,
        value: i32,
        max: i32,
    },
    #[error("player {slot} spawns at x={x}, outside 0..={max}")]
    SpawnOutOfBounds { slot: u8, x: i32, max: i32 },
    #[error("drop target y={y} is outside {min}..={max}")]
    DropTargetOutOfBounds { y: i32, min: i32, max: i32 },
    #[error("countdown must start at zero or above, got {0}")]
    NegativeCountdown(i32),
}

fn positive(field: &'static str, value: i64) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn at_most(field: &'static str, value: i32, max: i32) -> Result<(), ConfigError> {
    if value <= max {
        Ok(())
    } else {
        Err(ConfigError::TooLarge { field, value, max })
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("player_width", self.player_width.into())?;
        positive("player_height", self.player_height.into())?;
        if self.canvas_width < self.player_width || self.canvas_height < self.player_height {
            return Err(ConfigError::CanvasTooSmall {
                width: self.canvas_width,
                height: self.canvas_height,
                player_width: self.player_width,
                player_height: self.player_height,
            });
        }
        positive("player_speed", self.player_speed.into())?;
        positive("projectile_width", self.projectile_width.into())?;
        positive("projectile_height", self.projectile_height.into())?;
        positive("projectile_speed", self.projectile_speed.into())?;
        positive("hit_damage", self.hit_damage.into())?;
        positive("max_health", self.max_health.into())?;
        positive("max_shield", self.max_shield.into())?;
        positive("countdown_interval_ms", self.countdown_interval_ms.into())?;
        positive("drop_speed", self.drop_speed.into())?;

        at_most("canvas_width", self.canvas_width, MAX_CANVAS_EDGE)?;
        at_most("canvas_height", self.canvas_height, MAX_CANVAS_EDGE)?;
        let longest_edge = self.canvas_width.max(self.canvas_height);
        at_most("player_speed", self.player_speed, longest_edge)?;
        at_most("projectile_width", self.projectile_width, self.canvas_width)?;
        at_most("projectile_height", self.projectile_height, self.canvas_height)?;
        at_most("projectile_speed", self.projectile_speed, self.canvas_width)?;
        at_most("drop_speed", self.drop_speed, self.canvas_height)?;
        at_most("max_health", self.max_health, MAX_POOL)?;
        at_most("max_shield", self.max_shield, MAX_POOL)?;
        at_most("hit_damage", self.hit_damage, MAX_POOL)?;

        let max_x = self.canvas_width - self.player_width;
        for (i, &x) in self.spawn_x.iter().enumerate() {
            if !(0..=max_x).contains(&x) {
                return Err(ConfigError::SpawnOutOfBounds {
                    slot: i as u8 + 1,
                    x,
                    max: max_x,
                });
            }
        }

        let max_y = self.canvas_height - self.player_height;
        if !(self.spawn_y..=max_y).contains(&self.drop_target_y) || self.spawn_y < 0 {
            return Err(ConfigError::DropTargetOutOfBounds {
                y: self.drop_target_y,
                min: self.spawn_y.max(0),
                max: max_y,
            });
        }
        if self.countdown_from < 0 {
            return Err(ConfigError::NegativeCountdown(self.countdown_from));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::default_config;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(default_config().validate(), Ok(()));
    }

    #[test]
    fn rejects_canvas_smaller_than_player() {
        let config = GameConfig {
            canvas_width: 30,
            ..default_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CanvasTooSmall { width: 30, .. })
        ));
    }

    #[test]
    fn rejects_spawn_off_canvas() {
        let config = GameConfig {
            spawn_x: [100, 790],
            ..default_config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpawnOutOfBounds {
                slot: 2,
                x: 790,
                max: 760
            })
        );
    }

    #[test]
    fn rejects_zero_damage() {
        let config = GameConfig {
            hit_damage: 0,
            ..default_config()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "hit_damage must be positive, got 0");
    }

    #[test]
    fn rejects_speed_beyond_canvas() {
        let config = GameConfig {
            player_speed: i32::MAX,
            ..default_config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooLarge {
                field: "player_speed",
                value: i32::MAX,
                max: 800
            })
        );
    }

    #[test]
    fn rejects_oversized_pools_and_canvas() {
        let config = GameConfig {
            max_health: 50_000_000,
            ..default_config()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "max_health must be at most 1000000, got 50000000");

        let config = GameConfig {
            canvas_width: i32::MAX,
            ..default_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooLarge {
                field: "canvas_width",
                ..
            })
        ));
    }
}
