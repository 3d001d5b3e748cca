use serde::{Deserialize, Serialize};

use crate::types::PlayerSlot;

/// The only key whose browser default is suppressed. It is otherwise ignored.
pub const SUPPRESSED_KEY: &str = "CapsLock";

// ── Keys ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Key {
    W = 0,
    A = 1,
    S = 2,
    D = 3,
    ArrowUp = 4,
    ArrowLeft = 5,
    ArrowDown = 6,
    ArrowRight = 7,
    Space = 8,
    Q = 9,
    Enter = 10,
    M = 11,
    P = 12,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(PlayerSlot, Direction),
    Fire(PlayerSlot),
    Shield(PlayerSlot),
    Pause,
}

impl Key {
    /// Map a `KeyboardEvent.key` value. Matching is case sensitive, so a
    /// shifted or caps-locked letter is not recognised.
    pub fn from_dom(key: &str) -> Option<Key> {
        let k = match key {
            "w" => Key::W,
            "a" => Key::A,
            "s" => Key::S,
            "d" => Key::D,
            "ArrowUp" => Key::ArrowUp,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowDown" => Key::ArrowDown,
            "ArrowRight" => Key::ArrowRight,
            " " => Key::Space,
            "q" => Key::Q,
            "Enter" => Key::Enter,
            "m" => Key::M,
            "p" => Key::P,
            _ => return None,
        };
        Some(k)
    }

    pub fn action(self) -> Action {
        use Direction::*;
        use PlayerSlot::*;
        match self {
            Key::W => Action::Move(One, Up),
            Key::A => Action::Move(One, Left),
            Key::S => Action::Move(One, Down),
            Key::D => Action::Move(One, Right),
            Key::ArrowUp => Action::Move(Two, Up),
            Key::ArrowLeft => Action::Move(Two, Left),
            Key::ArrowDown => Action::Move(Two, Down),
            Key::ArrowRight => Action::Move(Two, Right),
            Key::Space => Action::Fire(One),
            Key::Q => Action::Shield(One),
            Key::Enter => Action::Fire(Two),
            Key::M => Action::Shield(Two),
            Key::P => Action::Pause,
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

/// Movement keys per slot in `Direction` order: up, left, down, right.
pub fn movement_keys(slot: PlayerSlot) -> [(Key, Direction); 4] {
    match slot {
        PlayerSlot::One => [
            (Key::W, Direction::Up),
            (Key::A, Direction::Left),
            (Key::S, Direction::Down),
            (Key::D, Direction::Right),
        ],
        PlayerSlot::Two => [
            (Key::ArrowUp, Direction::Up),
            (Key::ArrowLeft, Direction::Left),
            (Key::ArrowDown, Direction::Down),
            (Key::ArrowRight, Direction::Right),
        ],
    }
}

pub fn shield_key(slot: PlayerSlot) -> Key {
    match slot {
        PlayerSlot::One => Key::Q,
        PlayerSlot::Two => Key::M,
    }
}

// ── Held key bitmask ────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys(u16);

impl HeldKeys {
    pub fn is_held(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn press(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.0 &= !key.bit();
    }
}

// ── Per-frame input ─────────────────────────────────────────

/// Everything that arrived from outside the simulation between two frames.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    NameInput { slot: PlayerSlot, text: String },
    Start,
    Restart,
    /// Pause button; same effect as the pause key.
    TogglePause,
}

/// Input snapshot consumed by exactly one `step`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Wall-clock time since the previous frame. Only timed phases use it.
    #[serde(default)]
    pub elapsed_ms: u32,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    pub fn idle(elapsed_ms: u32) -> Self {
        FrameInput {
            elapsed_ms,
            events: Vec::new(),
        }
    }

    pub fn with_events(elapsed_ms: u32, events: Vec<InputEvent>) -> Self {
        FrameInput { elapsed_ms, events }
    }
}

/// Outcome of offering a raw DOM key to the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDisposition {
    Queued,
    /// Not queued, and the caller should call `preventDefault`.
    Suppressed,
    Ignored,
}

/// Collects events from DOM callbacks until the next frame samples them.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, dom_key: &str) -> KeyDisposition {
        self.offer_key(dom_key, InputEvent::KeyDown)
    }

    pub fn key_up(&mut self, dom_key: &str) -> KeyDisposition {
        self.offer_key(dom_key, InputEvent::KeyUp)
    }

    fn offer_key(&mut self, dom_key: &str, wrap: fn(Key) -> InputEvent) -> KeyDisposition {
        if dom_key == SUPPRESSED_KEY {
            return KeyDisposition::Suppressed;
        }
        match Key::from_dom(dom_key) {
            Some(key) => {
                self.pending.push(wrap(key));
                KeyDisposition::Queued
            }
            None => KeyDisposition::Ignored,
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Drain everything queued so far into one frame's input.
    pub fn sample(&mut self, elapsed_ms: u32) -> FrameInput {
        FrameInput {
            elapsed_ms,
            events: std::mem::take(&mut self.pending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_keys_are_case_sensitive() {
        assert_eq!(Key::from_dom("w"), Some(Key::W));
        assert_eq!(Key::from_dom("W"), None);
        assert_eq!(Key::from_dom(" "), Some(Key::Space));
        assert_eq!(Key::from_dom("Enter"), Some(Key::Enter));
        assert_eq!(Key::from_dom("Escape"), None);
    }

    #[test]
    fn only_caps_lock_is_suppressed() {
        let mut q = InputQueue::new();
        assert_eq!(q.key_down("CapsLock"), KeyDisposition::Suppressed);
        assert_eq!(q.key_up("CapsLock"), KeyDisposition::Suppressed);
        assert_eq!(q.key_down("x"), KeyDisposition::Ignored);
        assert_eq!(q.key_down(" "), KeyDisposition::Queued);
        assert_eq!(q.sample(16).events, vec![InputEvent::KeyDown(Key::Space)]);
    }

    #[test]
    fn sample_drains_in_arrival_order() {
        let mut q = InputQueue::new();
        q.key_down("Enter");
        q.key_up("Enter");
        q.push(InputEvent::Start);
        let frame = q.sample(16);
        assert_eq!(frame.elapsed_ms, 16);
        assert_eq!(
            frame.events,
            vec![
                InputEvent::KeyDown(Key::Enter),
                InputEvent::KeyUp(Key::Enter),
                InputEvent::Start,
            ]
        );
        assert!(q.sample(16).events.is_empty());
    }

    #[test]
    fn held_keys_track_press_and_release() {
        let mut held = HeldKeys::default();
        held.press(Key::A);
        held.press(Key::M);
        assert!(held.is_held(Key::A));
        assert!(held.is_held(Key::M));
        assert!(!held.is_held(Key::D));
        held.release(Key::A);
        assert!(!held.is_held(Key::A));
        assert!(held.is_held(Key::M));
    }

    #[test]
    fn key_actions_split_by_player() {
        assert_eq!(Key::Space.action(), Action::Fire(PlayerSlot::One));
        assert_eq!(Key::Enter.action(), Action::Fire(PlayerSlot::Two));
        assert_eq!(Key::M.action(), Action::Shield(PlayerSlot::Two));
        assert_eq!(
            Key::ArrowLeft.action(),
            Action::Move(PlayerSlot::Two, Direction::Left)
        );
        assert_eq!(Key::P.action(), Action::Pause);
    }
}
