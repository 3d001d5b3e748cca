use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::input::HeldKeys;

// ── Identity ────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    pub fn opponent(self) -> PlayerSlot {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// Horizontal firing direction: player 1 fires right, player 2 left.
    pub fn facing(self) -> i32 {
        match self {
            PlayerSlot::One => 1,
            PlayerSlot::Two => -1,
        }
    }

    /// 1-based number used in player-facing text.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

// ── Geometry ────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Strict AABB overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

// ── Player ──────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub slot: PlayerSlot,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub health: i32,
    pub shield: i32,
    pub shield_active: bool,
    pub can_shoot: bool,
    pub message: Option<String>,
}

impl PlayerState {
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn is_down(&self) -> bool {
        self.health <= 0
    }
}

// ── Projectile ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: PlayerSlot,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub vx: i32,
    pub vy: i32,
}

impl Projectile {
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

// ── Round flow ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Draw,
    Winner(PlayerSlot),
}

impl RoundResult {
    pub fn winner_text(&self) -> String {
        match self {
            RoundResult::Draw => "It's a draw!".to_string(),
            RoundResult::Winner(slot) => format!("Player {} wins!", slot.number()),
        }
    }
}

/// Where the round is. `Countdown`, `Dropping` and `Intro` together make up
/// the non-interactive drop-in sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Countdown {
        /// Number shown at the next cadence boundary.
        next: i32,
        /// Number currently on screen, if any has been shown yet.
        shown: Option<i32>,
        /// Milliseconds accumulated toward the next boundary.
        carry_ms: u32,
    },
    Dropping,
    Intro {
        remaining_ms: u32,
    },
    Running,
    RoundOver(RoundResult),
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::NotStarted => "notStarted",
            Phase::Countdown { .. } => "countdown",
            Phase::Dropping => "dropping",
            Phase::Intro { .. } => "intro",
            Phase::Running => "running",
            Phase::RoundOver(_) => "roundOver",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }
}

// ── Names ───────────────────────────────────────────────────

/// Raw name-input text and the names committed at round start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub inputs: [String; 2],
    pub names: [String; 2],
}

impl Default for Roster {
    fn default() -> Self {
        Roster {
            inputs: [String::new(), String::new()],
            names: [DEFAULT_NAMES[0].to_string(), DEFAULT_NAMES[1].to_string()],
        }
    }
}

/// Trim a name input; empty falls back to the slot's default name.
pub fn normalize_name(raw: &str, slot: PlayerSlot) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_NAMES[slot.index()].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Badge-prefixed name as shown on labels and above the avatar.
pub fn badge_label(name: &str, slot: PlayerSlot) -> String {
    format!("{} {}", NAME_BADGES[slot.index()], name)
}

// ── Events ──────────────────────────────────────────────────

/// Things that happened during a frame, for sounds and DOM refreshes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CountdownStarted,
    /// The drop-in sequence finished and play is live.
    RoundStarted,
    Shot { owner: PlayerSlot },
    Hit { target: PlayerSlot, absorbed: bool },
    PauseToggled { paused: bool },
    RoundOver(RoundResult),
    Restarted,
}

// ── Game State ──────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub frame: u64,
    pub phase: Phase,
    pub paused: bool,
    pub keys: HeldKeys,
    pub players: [PlayerState; 2],
    pub projectiles: Vec<Projectile>,
    /// Rounds won per slot. Survives restarts.
    pub score: [u32; 2],
    pub roster: Roster,
    /// Events raised by the most recent frame only.
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn player(&self, slot: PlayerSlot) -> &PlayerState {
        &self.players[slot.index()]
    }

    pub fn player_mut(&mut self, slot: PlayerSlot) -> &mut PlayerState {
        &mut self.players[slot.index()]
    }

    pub fn result(&self) -> Option<RoundResult> {
        match self.phase {
            Phase::RoundOver(result) => Some(result),
            _ => None,
        }
    }
}
