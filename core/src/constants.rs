// All distances are integer pixels, all speeds are per frame unless noted.

// Canvas
pub const CANVAS_WIDTH: i32 = 800;
pub const CANVAS_HEIGHT: i32 = 600;

// Player hitbox
pub const PLAYER_WIDTH: i32 = 40;
pub const PLAYER_HEIGHT: i32 = 40;

// Movement
pub const PLAYER_SPEED: i32 = 5;

// Spawn (x per slot, everyone enters at the top edge)
pub const SPAWN_X: [i32; 2] = [100, 600];
pub const SPAWN_Y: i32 = 0;

// Projectile
pub const PROJECTILE_WIDTH: i32 = 10;
pub const PROJECTILE_HEIGHT: i32 = 4;
pub const PROJECTILE_SPEED: i32 = 10;

// Health / combat
pub const MAX_HEALTH: i32 = 100;
pub const MAX_SHIELD: i32 = 100;
pub const HIT_DAMAGE: i32 = 10;

// Drop-in sequence
pub const COUNTDOWN_FROM: i32 = 3;
pub const COUNTDOWN_INTERVAL_MS: u32 = 1000;
pub const DROP_TARGET_Y: i32 = 300;
pub const DROP_SPEED: i32 = 5;
pub const INTRO_MS: u32 = 2000;

// Names
pub const DEFAULT_NAMES: [&str; 2] = ["Player 1", "Player 2"];
pub const NAME_BADGES: [&str; 2] = ["🟦", "🟥"];

// Colours handed to the render pass
pub const PLAYER_COLORS: [&str; 2] = ["blue", "red"];
pub const PROJECTILE_COLORS: [&str; 2] = ["cyan", "orange"];
pub const SHIELD_COLOR: &str = "cyan";

pub const CONTROLS_HELP: [&str; 2] = [
    "P1: WASD move | SPACE shoot | Q shield",
    "P2: Arrow keys move | ENTER shoot | M shield",
];
