use duel_core::{
    create_initial_state, default_config, snapshot, step_mut, FrameInput, GameConfig, GameState,
    InputEvent, InputQueue, KeyDisposition, PlayerSlot, Replay,
};
use wasm_bindgen::prelude::*;
use web_sys::{console, CanvasRenderingContext2d};

mod render;

/// Install panic hook so WASM panics show in browser console instead of silently freezing.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn log(msg: &str) {
    console::log_1(&JsValue::from_str(msg));
}

fn slot_from_number(player: u8) -> Option<PlayerSlot> {
    match player {
        1 => Some(PlayerSlot::One),
        2 => Some(PlayerSlot::Two),
        _ => None,
    }
}

fn parse_config(config_json: &str) -> Result<GameConfig, String> {
    let config: GameConfig = serde_json::from_str(config_json).map_err(|e| e.to_string())?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Parse and validate a config, falling back to the arcade defaults.
fn config_from_json(config_json: &str) -> GameConfig {
    match parse_config(config_json) {
        Ok(config) => config,
        Err(e) => {
            console::warn_1(&JsValue::from_str(&format!(
                "duel: bad config ({e}), using defaults"
            )));
            default_config()
        }
    }
}

/// Browser handle for one game. DOM callbacks queue input; the page's
/// `requestAnimationFrame` loop calls `frame` once per refresh and then `draw`.
#[wasm_bindgen]
pub struct DuelGame {
    state: GameState,
    config: GameConfig,
    queue: InputQueue,
    recording: Option<Vec<FrameInput>>,
}

#[wasm_bindgen]
impl DuelGame {
    /// Create a game from a config JSON document. Malformed or invalid
    /// configs fall back to the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> DuelGame {
        Self::with_config(config_from_json(config_json))
    }

    /// Create with the default 800x600 arcade config.
    pub fn new_arcade() -> DuelGame {
        Self::with_config(default_config())
    }

    fn with_config(config: GameConfig) -> DuelGame {
        let state = create_initial_state(&config);
        log(&format!(
            "duel: ready ({}x{})",
            config.canvas_width, config.canvas_height
        ));
        DuelGame {
            state,
            config,
            queue: InputQueue::new(),
            recording: None,
        }
    }

    /// Queue a key-down. Returns true when the caller must `preventDefault`.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.queue.key_down(key) == KeyDisposition::Suppressed
    }

    /// Queue a key-up. Returns true when the caller must `preventDefault`.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.queue.key_up(key) == KeyDisposition::Suppressed
    }

    /// Name input changed. `player` is 1 or 2; anything else is ignored.
    pub fn set_name(&mut self, player: u8, text: &str) {
        if let Some(slot) = slot_from_number(player) {
            self.queue.push(InputEvent::NameInput {
                slot,
                text: text.to_string(),
            });
        }
    }

    pub fn start(&mut self) {
        self.queue.push(InputEvent::Start);
    }

    pub fn restart(&mut self) {
        self.queue.push(InputEvent::Restart);
    }

    pub fn toggle_pause(&mut self) {
        self.queue.push(InputEvent::TogglePause);
    }

    /// Advance one frame and return the frame's events (for sounds and DOM
    /// refreshes) as a JS array.
    pub fn frame(&mut self, elapsed_ms: f64) -> Result<JsValue, JsValue> {
        let elapsed_ms = elapsed_ms.clamp(0.0, u32::MAX as f64) as u32;
        let input = self.queue.sample(elapsed_ms);
        step_mut(&mut self.state, &input, &self.config);
        if let Some(frames) = self.recording.as_mut() {
            frames.push(input);
        }
        serde_wasm_bindgen::to_value(&self.state.events).map_err(JsValue::from)
    }

    /// Full presentation snapshot as a JS object.
    pub fn export_snapshot(&self) -> Result<JsValue, JsValue> {
        let snap = snapshot(&self.state, &self.config);
        serde_wasm_bindgen::to_value(&snap).map_err(JsValue::from)
    }

    /// Paint the current state onto a 2D canvas context.
    pub fn draw(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        render::draw(ctx, &snapshot(&self.state, &self.config))
    }

    /// Begin capturing every frame's input from the current state onward.
    /// Only meaningful from a freshly created game.
    pub fn start_recording(&mut self) {
        if self.state.frame != 0 {
            console::warn_1(&JsValue::from_str(
                "duel: recording mid-game, replay will start from a fresh state",
            ));
        }
        self.recording = Some(Vec::new());
    }

    /// Stop recording and return the replay as JSON.
    pub fn take_replay(&mut self) -> Result<String, JsValue> {
        let frames = self
            .recording
            .take()
            .ok_or_else(|| JsValue::from_str("not recording"))?;
        let replay = Replay {
            config: self.config.clone(),
            frames,
        };
        serde_json::to_string(&replay).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // Quick accessors
    pub fn frame_count(&self) -> f64 { self.state.frame as f64 }
    pub fn paused(&self) -> bool { self.state.paused }
    pub fn phase(&self) -> String { self.state.phase.name().to_string() }
    pub fn score(&self, player: u8) -> u32 {
        slot_from_number(player).map_or(0, |slot| self.state.score[slot.index()])
    }
}
