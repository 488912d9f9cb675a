use glam::Vec2;

use crate::params::Params;

/// The car: the only state the integrator owns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    pub position: Vec2,
    pub velocity: Vec2, // units per second
    pub heading: f32,   // radians, never wrapped
}

impl VehicleState {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            heading: 0.0,
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Normalized player intent for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub steer: i8,     // -1 = left, 0 = straight, 1 = right
    pub throttle: f32, // -0.8, 0.0 or 1.0 (forward and brake sum)
    pub drift_button: bool,
}

impl InputSnapshot {
    pub fn new(steer: i8, throttle: f32, drift_button: bool) -> Self {
        Self {
            steer: steer.clamp(-1, 1),
            throttle: throttle.clamp(-Params::REVERSE_THROTTLE, 1.0),
            drift_button,
        }
    }

    /// Build a snapshot from held controls
    pub fn from_controls(
        forward: bool,
        backward: bool,
        left: bool,
        right: bool,
        drift_button: bool,
    ) -> Self {
        let steer = i8::from(right) - i8::from(left);
        let throttle = if forward { 1.0 } else { 0.0 }
            - if backward {
                Params::REVERSE_THROTTLE
            } else {
                0.0
            };
        Self {
            steer,
            throttle,
            drift_button,
        }
    }
}

/// Smoke puff left behind while drifting
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }
}

/// Remaining life in seconds
#[derive(Debug, Clone, Copy)]
pub struct Lifetime {
    pub t_left: f32,
}

impl Lifetime {
    pub fn new(t_left: f32) -> Self {
        Self { t_left }
    }

    pub fn is_expired(&self) -> bool {
        self.t_left <= 0.0
    }

    /// Opacity in 0..=200, fading with remaining life
    pub fn alpha(&self) -> u8 {
        let ratio = (self.t_left / Params::SMOKE_MAX_LIFE).clamp(0.0, 1.0);
        (200.0 * ratio) as u8
    }
}
