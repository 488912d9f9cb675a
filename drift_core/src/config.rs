use thiserror::Error;

use crate::params::Params;

/// Reasons a [`Config`] cannot drive the simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("vehicle footprint {size} does not fit a {width}x{height} arena")]
    VehicleTooLarge { size: f32, width: f32, height: f32 },
    #[error("drift steer rate {drift} is below the normal steer rate {normal}")]
    DriftSteerTooLow { drift: f32, normal: f32 },
}

/// Simulation configuration, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub vehicle_size: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub normal_steer_rate: f32,
    pub drift_steer_rate: f32,
    pub drift_threshold: f32,
    pub normal_long_friction: f32,
    pub normal_lat_friction: f32,
    pub drift_long_friction: f32,
    pub drift_lat_friction: f32,
    pub air_drag_coeff: f32,
    pub rolling_resist: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            vehicle_size: Params::VEHICLE_SIZE,
            max_speed: Params::MAX_SPEED,
            acceleration: Params::ACCELERATION,
            normal_steer_rate: Params::NORMAL_STEER_RATE,
            drift_steer_rate: Params::DRIFT_STEER_RATE,
            drift_threshold: Params::DRIFT_THRESHOLD,
            normal_long_friction: Params::NORMAL_LONG_FRICTION,
            normal_lat_friction: Params::NORMAL_LAT_FRICTION,
            drift_long_friction: Params::DRIFT_LONG_FRICTION,
            drift_lat_friction: Params::DRIFT_LAT_FRICTION,
            air_drag_coeff: Params::AIR_DRAG_COEFF,
            rolling_resist: Params::ROLLING_RESIST,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Half the vehicle footprint, the margin kept from every wall
    pub fn half_extent(&self) -> f32 {
        self.vehicle_size / 2.0
    }

    /// Longitudinal and lateral friction for the current mode
    pub fn friction(&self, drifting: bool) -> (f32, f32) {
        if drifting {
            (self.drift_long_friction, self.drift_lat_friction)
        } else {
            (self.normal_long_friction, self.normal_lat_friction)
        }
    }

    pub fn steer_rate(&self, drifting: bool) -> f32 {
        if drifting {
            self.drift_steer_rate
        } else {
            self.normal_steer_rate
        }
    }

    /// Check that the tuning keeps the integrator well defined
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("vehicle_size", self.vehicle_size),
            ("max_speed", self.max_speed),
            ("acceleration", self.acceleration),
            ("normal_steer_rate", self.normal_steer_rate),
        ];
        for (name, value) in positive {
            // Written as a negation so NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        let non_negative = [
            ("drift_threshold", self.drift_threshold),
            ("normal_long_friction", self.normal_long_friction),
            ("normal_lat_friction", self.normal_lat_friction),
            ("drift_long_friction", self.drift_long_friction),
            ("drift_lat_friction", self.drift_lat_friction),
            ("air_drag_coeff", self.air_drag_coeff),
            ("rolling_resist", self.rolling_resist),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if self.vehicle_size >= self.arena_width || self.vehicle_size >= self.arena_height {
            return Err(ConfigError::VehicleTooLarge {
                size: self.vehicle_size,
                width: self.arena_width,
                height: self.arena_height,
            });
        }

        if self.drift_steer_rate < self.normal_steer_rate {
            return Err(ConfigError::DriftSteerTooLow {
                drift: self.drift_steer_rate,
                normal: self.normal_steer_rate,
            });
        }

        Ok(())
    }
}
