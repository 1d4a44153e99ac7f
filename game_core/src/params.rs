/// Game tuning parameters for Pong
///
/// All distances are in surface units (canvas pixels) and all speeds are in
/// units per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // Gap between a paddle and its edge

    // Ball
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_SPEED_INITIAL: f32 = 5.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.3; // Added on every paddle hit
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    // AI
    pub const AI_DEADBAND: f32 = 15.0;
    pub const AI_STEP: f32 = 5.0;
}
