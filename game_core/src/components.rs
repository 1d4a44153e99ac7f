use glam::Vec2;

use crate::{Aabb, ServeRng};

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Player, // Left, pointer controlled
    Ai,     // Right, tracks the ball
}

impl Side {
    /// Horizontal direction a ball travels after leaving this side's paddle
    pub fn outward(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Ai => -1.0,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

/// Paddle component - `x`/`y` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_min_size(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
        )
    }
}

/// Ball component - the pong ball
///
/// `speed` is only consulted when the ball is served or bounces off a paddle,
/// so the length of `vel` drifts from it between those events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
        }
    }

    /// Bounding box used for paddle hits
    pub fn bounds(&self) -> Aabb {
        Aabb::around_circle(self.pos, self.radius)
    }

    /// Reset ball to `center` at `speed`, heading left or right within
    /// `max_angle` of the horizontal
    pub fn serve<R: ServeRng + ?Sized>(
        &mut self,
        center: Vec2,
        speed: f32,
        max_angle: f32,
        rng: &mut R,
    ) {
        self.pos = center;
        self.speed = speed;

        let angle = rng.serve_angle(max_angle);
        let dir = if rng.serve_right() { 1.0 } else { -1.0 };
        self.vel = Vec2::new(dir * speed * angle.cos(), speed * angle.sin());
    }

    /// Send the ball back from `paddle`, angled by where it struck, then
    /// speed it up by `increment`
    pub fn bounce_off(&mut self, paddle: &Paddle, max_angle: f32, increment: f32) {
        // -1 at the top edge, 1 at the bottom edge
        let collide_point = (self.pos.y - paddle.center_y()) / (paddle.height / 2.0);
        let angle = collide_point * max_angle;

        self.vel = Vec2::new(
            paddle.side.outward() * self.speed * angle.cos(),
            self.speed * angle.sin(),
        );
        self.speed += increment;
    }
}

/// Marks the paddle that follows the pointer target
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerControlled;

/// Marks a paddle that chases the ball
#[derive(Debug, Clone, Copy)]
pub struct AiTracker {
    pub deadband: f32,
    pub step: f32,
}

impl AiTracker {
    pub fn new(deadband: f32, step: f32) -> Self {
        Self { deadband, step }
    }
}
