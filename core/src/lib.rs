pub mod config;
pub mod constants;
pub mod init;
pub mod input;
pub mod physics;
pub mod projectiles;
pub mod replay;
pub mod round;
pub mod snapshot;
pub mod step;
pub mod types;

pub use config::{ConfigError, GameConfig};
pub use constants::*;
pub use init::*;
pub use input::{FrameInput, HeldKeys, InputEvent, InputQueue, Key, KeyDisposition};
pub use physics::{apply_player_input, drop_step};
pub use projectiles::{
    apply_hit, is_out_of_bounds, move_projectile, spawn_projectile, update_projectiles,
};
pub use replay::{run_replay, Replay, ReplayOutcome};
pub use round::{check_round_over, restart, start_round, toggle_pause};
pub use snapshot::{snapshot, Snapshot};
pub use step::{step, step_mut};
pub use types::*;
