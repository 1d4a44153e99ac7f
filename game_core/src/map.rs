use glam::Vec2;

use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// Bounding box of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The playable rectangle, with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.arena_width, config.arena_height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp the top edge of something `extent` tall so it stays inside
    pub fn clamp_top(&self, y: f32, extent: f32) -> f32 {
        y.max(0.0).min(self.height - extent)
    }

    /// Top edge that vertically centers something `extent` tall
    pub fn centered_top(&self, extent: f32) -> f32 {
        self.height / 2.0 - extent / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap_is_strict() {
        let a = Aabb::from_min_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let touching = Aabb::from_min_size(Vec2::new(10.0, 0.0), Vec2::new(5.0, 5.0));
        let inside = Aabb::from_min_size(Vec2::new(9.0, 9.0), Vec2::new(5.0, 5.0));
        assert!(!a.overlaps(&touching), "Shared edge is not an overlap");
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_aabb_around_circle() {
        let b = Aabb::around_circle(Vec2::new(50.0, 40.0), 12.0);
        assert_eq!(b.min, Vec2::new(38.0, 28.0));
        assert_eq!(b.max, Vec2::new(62.0, 52.0));
    }

    #[test]
    fn test_arena_clamp_top() {
        let arena = Arena::new(800.0, 500.0);
        assert_eq!(arena.clamp_top(-20.0, 100.0), 0.0);
        assert_eq!(arena.clamp_top(450.0, 100.0), 400.0);
        assert_eq!(arena.clamp_top(123.0, 100.0), 123.0);
    }

    #[test]
    fn test_arena_center() {
        let arena = Arena::new(800.0, 500.0);
        assert_eq!(arena.center(), Vec2::new(400.0, 250.0));
        assert_eq!(arena.centered_top(100.0), 200.0);
    }
}
