use glam::Vec2;

use crate::map::Arena;

/// Advance the position and keep it inside the arena.
///
/// Only the position is clamped: a car pushed into a wall keeps its
/// velocity and stays pinned there until it steers away.
pub fn integrate_position(position: Vec2, velocity: Vec2, dt: f32, arena: &Arena) -> Vec2 {
    arena.clamp(position + velocity * dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_moves_with_velocity() {
        let arena = Arena::default();
        let pos = integrate_position(Vec2::new(100.0, 100.0), Vec2::new(60.0, -30.0), 0.5, &arena);
        assert_eq!(pos, Vec2::new(130.0, 85.0));
    }

    #[test]
    fn test_position_clamps_each_axis() {
        let arena = Arena::default();
        let pos = integrate_position(Vec2::new(945.0, 15.0), Vec2::new(600.0, -600.0), 0.1, &arena);
        assert_eq!(pos, Vec2::new(950.0, 10.0));

        let pos = integrate_position(Vec2::new(15.0, 500.0), Vec2::new(-600.0, 600.0), 0.1, &arena);
        assert_eq!(pos, Vec2::new(10.0, 530.0));
    }

    #[test]
    fn test_zero_dt_keeps_position() {
        let arena = Arena::default();
        let start = Vec2::new(300.0, 200.0);
        assert_eq!(integrate_position(start, Vec2::new(500.0, 500.0), 0.0, &arena), start);
    }
}
