use game_core::{Config, GameRng, PongSimulator};

use crate::input::PointerInput;
use crate::renderer::{draw_frame, Palette, Surface};

/// A single-player game against the AI, sized to its drawing surface
pub struct LocalGame {
    pub sim: PongSimulator<GameRng>,
    pub input: PointerInput,
    pub palette: Palette,
}

impl LocalGame {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let config = Config::new().with_arena(width, height);
        Self {
            sim: PongSimulator::new(config, GameRng::new(seed)),
            input: PointerInput::new(),
            palette: Palette::default(),
        }
    }

    pub fn pointer_moved(&mut self, client_y: f32, surface_top: f32) {
        self.input.pointer_moved(client_y, surface_top);
    }

    /// Advance one frame with the latest pointer target, then draw it
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), String> {
        self.sim.step(self.input.target());
        draw_frame(surface, &self.sim, &self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    /// Counts draw calls without keeping them
    #[derive(Default)]
    struct Counter {
        calls: usize,
    }

    impl Surface for Counter {
        fn fill_rect(&mut self, _: Vec2, _: Vec2, _: &str) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }

        fn fill_circle(&mut self, _: Vec2, _: f32, _: &str) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }

        fn stroke_line(&mut self, _: Vec2, _: Vec2, _: &str) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }

        fn fill_text(&mut self, _: &str, _: Vec2, _: &str) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }
    }

    #[test]
    fn test_game_is_sized_to_surface() {
        let game = LocalGame::new(640.0, 480.0, 1);
        assert_eq!(game.sim.arena().width, 640.0);
        assert_eq!(game.sim.arena().height, 480.0);
        assert_eq!(game.sim.ai().unwrap().x, 640.0 - 15.0 - 20.0);
    }

    #[test]
    fn test_frame_steps_then_draws() {
        let mut game = LocalGame::new(800.0, 500.0, 1);
        let mut surface = Counter::default();

        game.frame(&mut surface).unwrap();

        assert_eq!(game.sim.frame(), 1);
        // Background, 20 net dashes, 2 paddles, ball, 2 scores
        assert_eq!(surface.calls, 26);
    }

    #[test]
    fn test_pointer_drives_player_paddle() {
        let mut game = LocalGame::new(800.0, 500.0, 1);
        let mut surface = Counter::default();

        // Surface starts 50 down the page
        game.pointer_moved(200.0, 50.0);
        game.frame(&mut surface).unwrap();
        assert_eq!(game.sim.player().unwrap().y, 100.0);

        // Pointer still: paddle stays on the last target
        game.frame(&mut surface).unwrap();
        assert_eq!(game.sim.player().unwrap().y, 100.0);
    }

    #[test]
    fn test_player_paddle_waits_for_pointer() {
        let mut game = LocalGame::new(800.0, 500.0, 1);
        let mut surface = Counter::default();

        game.frame(&mut surface).unwrap();

        assert_eq!(game.sim.player().unwrap().y, 200.0);
    }
}
