use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increment: f32,
    pub max_bounce_angle: f32,
    pub ai_deadband: f32,
    pub ai_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            ai_deadband: Params::AI_DEADBAND,
            ai_step: Params::AI_STEP,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same tuning on a differently sized surface
    pub fn with_arena(mut self, width: f32, height: f32) -> Self {
        self.arena_width = width;
        self.arena_height = height;
        self
    }

    /// Get X position (left edge) for the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Ai => self.arena_width - self.paddle_width - self.paddle_margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 20.0, "Player paddle X position");
        assert_eq!(config.paddle_x(Side::Ai), 765.0, "AI paddle X position");
    }

    #[test]
    fn test_config_with_arena_keeps_tuning() {
        let config = Config::new().with_arena(640.0, 480.0);
        assert_eq!(config.arena_width, 640.0);
        assert_eq!(config.arena_height, 480.0);
        assert_eq!(config.paddle_height, Params::PADDLE_HEIGHT);
        assert_eq!(config.paddle_x(Side::Ai), 640.0 - 15.0 - 20.0);
    }
}
