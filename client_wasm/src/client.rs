//! wasm-bindgen entry points
//!
//! JavaScript owns the requestAnimationFrame loop and the key listeners and
//! calls into here; the client itself lives in a thread-local slot.

use crate::hud::HudOverlay;
use crate::input::KeyState;
use crate::logger;
use crate::renderer::Renderer;
use crate::simulation::LocalGame;
use drift_core::Config;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Main client state
pub struct Client {
    game: LocalGame,
    keys: KeyState,
    renderer: Renderer,
    hud: HudOverlay,
}

impl Client {
    pub async fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let config = Config::new();
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let game = LocalGame::new(config.clone(), seed)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        let renderer = Renderer::new(canvas, &config)
            .await
            .map_err(|e| JsValue::from_str(&e))?;

        log::info!(
            "Drift client ready: arena {}x{}, smoke seed {}",
            config.arena_width,
            config.arena_height,
            seed
        );

        Ok(Self {
            game,
            keys: KeyState::new(),
            renderer,
            hud: HudOverlay::new(&document),
        })
    }

    /// Step, then draw. Returns false once the drive has been stopped.
    pub fn frame(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        let input = self.keys.snapshot();
        let Some(output) = self.game.frame(now_ms, &input) else {
            return Ok(false);
        };

        self.hud.update(&output.hud);
        self.renderer
            .draw(&output, &self.game.sim.config)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(true)
    }
}

thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> Result<T, JsValue>) -> Result<T, JsValue> {
    CLIENT.with(|slot| match slot.borrow_mut().as_mut() {
        Some(client) => f(client),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement, verbose: bool) -> js_sys::Promise {
    logger::init(verbose);
    wasm_bindgen_futures::future_to_promise(async move {
        let client = Client::new(canvas).await?;
        CLIENT.with(|slot| *slot.borrow_mut() = Some(client));
        Ok(JsValue::UNDEFINED)
    })
}

/// Returns true when the key drives the car, so JS can preventDefault
#[wasm_bindgen]
pub fn key_down(key: &str) -> Result<bool, JsValue> {
    with_client(|client| Ok(client.keys.handle_key_down(key)))
}

#[wasm_bindgen]
pub fn key_up(key: &str) -> Result<bool, JsValue> {
    with_client(|client| Ok(client.keys.handle_key_up(key)))
}

/// Forget held keys, e.g. on window blur
#[wasm_bindgen]
pub fn release_keys() -> Result<(), JsValue> {
    with_client(|client| {
        client.keys.release_all();
        Ok(())
    })
}

/// Run one frame at `now_ms` (performance.now())
#[wasm_bindgen]
pub fn render_frame(now_ms: f64) -> Result<bool, JsValue> {
    with_client(|client| client.frame(now_ms))
}

#[wasm_bindgen]
pub fn resize(width: u32, height: u32) -> Result<(), JsValue> {
    with_client(|client| {
        client.renderer.resize(width, height);
        Ok(())
    })
}

/// Stop the drive; the next `render_frame` returns false
#[wasm_bindgen]
pub fn shutdown() -> Result<(), JsValue> {
    with_client(|client| {
        client.game.stop();
        Ok(())
    })
}

/// Postcard-encoded inputs of the session so far
#[wasm_bindgen]
pub fn export_input_log() -> Result<Vec<u8>, JsValue> {
    with_client(|client| {
        client
            .game
            .export_recording()
            .map_err(|e| JsValue::from_str(&e))
    })
}
