pub mod draw;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

pub use draw::draw_frame;

/// A 2D drawing target in arena coordinates (origin top-left, y down)
pub trait Surface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) -> Result<(), String>;
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), String>;
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str) -> Result<(), String>;
    fn fill_text(&mut self, text: &str, pos: Vec2, color: &str) -> Result<(), String>;
}

/// Colors for each part of the scene, as CSS color strings
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: &'static str,
    pub net: &'static str,
    pub player: &'static str,
    pub ai: &'static str,
    pub ball: &'static str,
    pub score: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#282c34",
            net: "#444",
            player: "#61dafb",
            ai: "#ff4081",
            ball: "#fff",
            score: "#888",
        }
    }
}
