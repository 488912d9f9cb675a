pub mod components;
pub mod config;
pub mod hud;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use systems::*;

/// Clamp a requested frame time to the range the integrator is tuned for
pub fn clamp_dt(dt: f32) -> f32 {
    if !dt.is_finite() {
        return 0.0;
    }
    dt.clamp(0.0, Params::MAX_DT)
}

/// Run one frame of the drift simulation.
///
/// Exactly one pass of drift -> steering -> velocity -> position; the
/// returned telemetry describes the state after the pass.
pub fn step(
    vehicle: &mut VehicleState,
    input: &InputSnapshot,
    time: &mut Time,
    arena: &Arena,
    config: &Config,
) -> Telemetry {
    let dt = clamp_dt(time.dt);
    if dt != time.dt {
        log::debug!("frame time {:.4}s clamped to {:.4}s", time.dt, dt);
    }

    let speed = vehicle.speed();

    // 1. Drift flag from this frame's button and current speed
    let drifting = classify_drift(input.drift_button, speed, config);

    // 2. Heading
    vehicle.heading = integrate_heading(vehicle.heading, input.steer, speed, drifting, dt, config);

    // 3. Velocity
    let vel_step = integrate_velocity(
        vehicle.velocity,
        vehicle.heading,
        input.throttle,
        drifting,
        speed,
        dt,
        config,
    );
    vehicle.velocity = vel_step.velocity;

    // 4. Position
    vehicle.position = integrate_position(vehicle.position, vehicle.velocity, dt, arena);

    time.dt = dt;
    time.now += dt;

    telemetry(vehicle, drifting)
}

/// Describe the car as it stands, for render/particles/HUD
pub fn telemetry(vehicle: &VehicleState, drifting: bool) -> Telemetry {
    let speed = vehicle.speed();
    let parts = decompose(vehicle.velocity, vehicle.heading);
    Telemetry {
        position: vehicle.position,
        heading: vehicle.heading,
        velocity: vehicle.velocity,
        speed,
        lateral_velocity: parts.lateral,
        traction: traction(parts.lateral.length(), speed),
        drifting,
    }
}

/// Helper to create the car at the middle of the arena, at rest
pub fn create_vehicle(arena: &Arena) -> VehicleState {
    VehicleState::new(arena.center())
}

/// Owns the car and everything needed to advance it
#[derive(Debug, Clone)]
pub struct Simulation {
    pub vehicle: VehicleState,
    pub time: Time,
    pub arena: Arena,
    pub config: Config,
}

impl Simulation {
    /// Build a simulation, rejecting tunings the integrator cannot run
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let arena = Arena::from_config(&config);
        Ok(Self {
            vehicle: create_vehicle(&arena),
            time: Time::default(),
            arena,
            config,
        })
    }

    /// Advance by one frame of `dt` seconds
    pub fn advance(&mut self, input: &InputSnapshot, dt: f32) -> Telemetry {
        self.time.dt = dt;
        step(
            &mut self.vehicle,
            input,
            &mut self.time,
            &self.arena,
            &self.config,
        )
    }
}

impl Default for Simulation {
    fn default() -> Self {
        let config = Config::default();
        let arena = Arena::from_config(&config);
        Self {
            vehicle: create_vehicle(&arena),
            time: Time::default(),
            arena,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_clamp_dt() {
        assert_eq!(clamp_dt(1.0 / 60.0), 1.0 / 60.0);
        assert_eq!(clamp_dt(5.0), Params::MAX_DT);
        assert_eq!(clamp_dt(-1.0), 0.0);
        assert_eq!(clamp_dt(f32::NAN), 0.0);
        assert_eq!(clamp_dt(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_step_advances_time() {
        let mut sim = Simulation::default();
        sim.advance(&InputSnapshot::default(), 0.02);
        sim.advance(&InputSnapshot::default(), 0.03);
        assert!((sim.time.now - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_stall_is_capped() {
        let mut sim = Simulation::default();
        let input = InputSnapshot::new(0, 1.0, false);
        sim.advance(&input, 3.0);
        assert_eq!(sim.time.dt, Params::MAX_DT);
        // One capped frame of throttle from rest
        assert!((sim.vehicle.velocity.x - sim.config.acceleration * Params::MAX_DT).abs() < 1e-3);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = Config {
            max_speed: -1.0,
            ..Config::default()
        };
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_telemetry_matches_state() {
        let mut vehicle = VehicleState::new(Vec2::new(100.0, 100.0));
        vehicle.velocity = Vec2::new(0.0, 50.0);
        let t = telemetry(&vehicle, false);
        assert_eq!(t.speed, 50.0);
        assert_eq!(t.lateral_velocity, Vec2::new(0.0, 50.0));
        assert_eq!(t.traction, 0.0);
        assert!(!t.drifting);
    }
}
