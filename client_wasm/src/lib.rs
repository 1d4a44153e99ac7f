//! Canvas client for single-player Pong
//!
//! The host page owns the animation loop: it calls `init_game` once, forwards
//! `mousemove` to `pointer_move`, and calls `frame` from
//! `requestAnimationFrame`. Everything else is plain Rust that runs (and is
//! tested) on any target.

pub mod input;
pub mod logger;
pub mod renderer;
pub mod simulation;

pub use simulation::LocalGame;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use crate::renderer::canvas::CanvasSurface;
    use crate::{logger, LocalGame};

    struct WebGame {
        game: LocalGame,
        canvas: HtmlCanvasElement,
        surface: CanvasSurface,
    }

    thread_local! {
        static GAME: RefCell<Option<WebGame>> = const { RefCell::new(None) };
    }

    fn with_game<T>(f: impl FnOnce(&mut WebGame) -> Result<T, JsValue>) -> Result<T, JsValue> {
        GAME.with(|cell| match cell.borrow_mut().as_mut() {
            Some(web) => f(web),
            None => Err(JsValue::from_str("Game not initialized")),
        })
    }

    /// Build the game sized to `canvas` and start logging to the console
    #[wasm_bindgen]
    pub fn init_game(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        logger::init(log::LevelFilter::Info);

        let surface = CanvasSurface::from_canvas(&canvas).map_err(|e| JsValue::from_str(&e))?;
        let seed = js_sys::Date::now() as u64;
        let game = LocalGame::new(canvas.width() as f32, canvas.height() as f32, seed);

        log::info!(
            "Pong ready on {}x{} canvas, seed {}",
            canvas.width(),
            canvas.height(),
            seed
        );

        GAME.with(|cell| {
            *cell.borrow_mut() = Some(WebGame {
                game,
                canvas,
                surface,
            });
        });
        Ok(())
    }

    /// Feed a `mousemove` clientY; converted against the canvas' current position
    #[wasm_bindgen]
    pub fn pointer_move(client_y: f64) -> Result<(), JsValue> {
        with_game(|web| {
            let top = web.canvas.get_bounding_client_rect().top();
            web.game.pointer_moved(client_y as f32, top as f32);
            Ok(())
        })
    }

    /// Step the simulation once and repaint
    #[wasm_bindgen]
    pub fn frame() -> Result<(), JsValue> {
        with_game(|web| {
            web.game
                .frame(&mut web.surface)
                .map_err(|e| JsValue::from_str(&format!("Frame failed: {}", e)))
        })
    }
}
