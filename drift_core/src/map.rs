use glam::Vec2;

use crate::config::Config;

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

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Shrink by `margin` on every side
    pub fn shrink(&self, margin: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(margin),
            max: self.max - Vec2::splat(margin),
        }
    }

    /// Clamp each axis independently into the box
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }
}

/// The rectangular world the car drives in
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Region the car's centre may occupy
    pub drivable: Aabb,
}

impl Arena {
    pub fn new(width: f32, height: f32, half_extent: f32) -> Self {
        let bounds = Aabb::new(Vec2::ZERO, Vec2::new(width, height));
        Self {
            width,
            height,
            drivable: bounds.shrink(half_extent),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.arena_width,
            config.arena_height,
            config.half_extent(),
        )
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// Keep a car centre inside the walls
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        self.drivable.clamp_point(pos)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_shrink() {
        let aabb = Aabb::new(Vec2::ZERO, Vec2::new(100.0, 50.0)).shrink(10.0);
        assert_eq!(aabb.min, Vec2::new(10.0, 10.0));
        assert_eq!(aabb.max, Vec2::new(90.0, 40.0));
        assert_eq!(aabb.center(), Vec2::new(50.0, 25.0));
        assert_eq!(aabb.clamp_point(Vec2::new(9.9, 20.0)), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_arena_clamp_each_axis() {
        let arena = Arena::default();
        assert_eq!(
            arena.clamp(Vec2::new(-50.0, 1000.0)),
            Vec2::new(10.0, 530.0)
        );
        assert_eq!(arena.clamp(Vec2::new(2000.0, 0.0)), Vec2::new(950.0, 10.0));
        let inside = Vec2::new(100.0, 200.0);
        assert_eq!(arena.clamp(inside), inside);
    }

    #[test]
    fn test_arena_center() {
        assert_eq!(Arena::default().center(), Vec2::new(480.0, 270.0));
    }
}
