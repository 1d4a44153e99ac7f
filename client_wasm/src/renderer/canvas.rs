//! `Surface` backed by an HTML canvas 2D context

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {:?}", e))?
            .ok_or_else(|| "Canvas has no 2d context".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|e| format!("Unexpected context type: {:?}", e))?;

        ctx.set_font("32px monospace");
        ctx.set_text_align("center");

        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) -> Result<(), String> {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), String> {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .map_err(|e| format!("Failed to draw arc: {:?}", e))?;
        self.ctx.close_path();
        self.ctx.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str) -> Result<(), String> {
        self.ctx.set_stroke_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, color: &str) -> Result<(), String> {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_text(text, pos.x as f64, pos.y as f64)
            .map_err(|e| format!("Failed to draw text: {:?}", e))
    }
}
