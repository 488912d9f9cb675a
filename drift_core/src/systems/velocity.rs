use glam::Vec2;

use crate::config::Config;

/// Velocity split along and across the car's nose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposition {
    pub facing: Vec2,
    /// Signed speed along `facing`
    pub forward: f32,
    /// Sideways component, perpendicular to `facing`
    pub lateral: Vec2,
}

/// Split `velocity` relative to `heading`.
///
/// Shared by the velocity step, the telemetry and the smoke emitter so all
/// three agree on what "sideways" means.
pub fn decompose(velocity: Vec2, heading: f32) -> Decomposition {
    let facing = Vec2::from_angle(heading);
    let forward = velocity.dot(facing);
    Decomposition {
        facing,
        forward,
        lateral: velocity - facing * forward,
    }
}

/// Grip multiplier for a given slip ratio, in [0, 1]
pub fn traction_from_slip(slip_ratio: f32) -> f32 {
    (1.0 - slip_ratio.max(0.0).powf(1.5)).max(0.0).sqrt()
}

/// Grip multiplier from sideways speed relative to total speed
pub fn traction(lateral_speed: f32, speed: f32) -> f32 {
    // Floor of 1 keeps the ratio finite when nearly stopped
    traction_from_slip(lateral_speed / speed.max(1.0))
}

/// Limit `velocity` to `max_speed`, never leaving it a rounding step above
pub fn cap_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    let mut capped = velocity.clamp_length_max(max_speed);
    // Rescaling to max_speed can round up by an ulp
    while capped.length() > max_speed {
        capped *= 1.0 - f32::EPSILON;
    }
    capped
}

/// Result of one velocity update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityStep {
    pub velocity: Vec2,
    pub traction: f32,
}

/// Advance the velocity by one frame.
///
/// `speed` is the speed measured at the start of the frame. Stages run in a
/// fixed order, each one reading the velocity left by the previous stage:
/// traction-limited throttle, friction, drag, then the speed cap.
pub fn integrate_velocity(
    velocity: Vec2,
    heading: f32,
    throttle: f32,
    drifting: bool,
    speed: f32,
    dt: f32,
    config: &Config,
) -> VelocityStep {
    let parts = decompose(velocity, heading);

    // Throttle only bites along the nose, scaled by remaining grip
    let traction = traction(parts.lateral.length(), speed);
    let mut vel = velocity + parts.facing * (config.acceleration * throttle * traction * dt);

    let (long_friction, lat_friction) = config.friction(drifting);
    vel -= parts.facing * (parts.forward * long_friction * dt);
    vel -= parts.lateral * (lat_friction * dt);

    // Drag acts along the velocity's own direction: v - v/|v| * drag
    let len = vel.length();
    if speed > 0.0 && len > 0.0 {
        let drag = speed * config.air_drag_coeff * dt + config.rolling_resist * dt;
        // Drag may stop the car but never push it backwards
        vel *= (1.0 - drag / len).max(0.0);
    }

    VelocityStep {
        velocity: cap_speed(vel, config.max_speed),
        traction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;
    use std::f32::consts::FRAC_PI_2;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_decompose_aligned() {
        let parts = decompose(Vec2::new(100.0, 0.0), 0.0);
        assert_eq!(parts.forward, 100.0);
        assert_eq!(parts.lateral, Vec2::ZERO);
    }

    #[test]
    fn test_decompose_sideways() {
        let parts = decompose(Vec2::new(0.0, 50.0), 0.0);
        assert_eq!(parts.forward, 0.0);
        assert_eq!(parts.lateral, Vec2::new(0.0, 50.0));

        let parts = decompose(Vec2::new(30.0, 40.0), FRAC_PI_2);
        assert_relative_eq!(parts.forward, 40.0, epsilon = 1e-4);
        assert_relative_eq!(parts.lateral.x, 30.0, epsilon = 1e-4);
        assert_relative_eq!(parts.lateral.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_decompose_recombines() {
        let velocity = Vec2::new(-120.0, 75.0);
        let parts = decompose(velocity, 2.3);
        let rebuilt = parts.facing * parts.forward + parts.lateral;
        assert_relative_eq!(rebuilt.x, velocity.x, epsilon = 1e-3);
        assert_relative_eq!(rebuilt.y, velocity.y, epsilon = 1e-3);
        assert!(parts.lateral.dot(parts.facing).abs() < 1e-3);
    }

    #[test]
    fn test_traction_range() {
        assert_eq!(traction_from_slip(0.0), 1.0);
        assert_eq!(traction_from_slip(1.0), 0.0);
        assert_eq!(traction_from_slip(1.5), 0.0);
        let mut last = 1.0;
        for i in 0..=100 {
            let t = traction_from_slip(i as f32 / 100.0);
            assert!((0.0..=1.0).contains(&t));
            assert!(t <= last, "Traction falls as slip grows");
            last = t;
        }
    }

    #[test]
    fn test_traction_is_concave_near_zero_slip() {
        // Small slip barely costs grip
        assert!(traction_from_slip(0.1) > 0.98);
        assert!(traction_from_slip(0.9) < 0.4);
    }

    #[test]
    fn test_traction_floor_at_low_speed() {
        // 0.5 sideways at 0.5 total speed: ratio uses the floor of 1
        assert_relative_eq!(traction(0.5, 0.5), traction_from_slip(0.5));
        assert_eq!(traction(0.0, 0.0), 1.0);
    }

    #[test]
    fn test_throttle_from_rest() {
        let config = Config::new();
        let step = integrate_velocity(Vec2::ZERO, 0.0, 1.0, false, 0.0, DT, &config);
        assert_relative_eq!(step.velocity.x, config.acceleration * DT);
        assert_eq!(step.velocity.y, 0.0);
        assert_eq!(step.traction, 1.0);
    }

    #[test]
    fn test_reverse_is_weaker() {
        let config = Config::new();
        let fwd = integrate_velocity(Vec2::ZERO, 0.0, 1.0, false, 0.0, DT, &config);
        let rev = integrate_velocity(Vec2::ZERO, 0.0, -0.8, false, 0.0, DT, &config);
        assert!(rev.velocity.x < 0.0);
        assert_relative_eq!(rev.velocity.x.abs(), fwd.velocity.x * 0.8, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_speed_skips_drag() {
        let config = Config::new();
        let step = integrate_velocity(Vec2::ZERO, 0.0, 0.0, false, 0.0, DT, &config);
        assert_eq!(step.velocity, Vec2::ZERO);
        assert!(step.velocity.is_finite());
    }

    #[test]
    fn test_drift_keeps_lateral_speed() {
        let config = Config::new();
        let velocity = Vec2::new(0.0, 300.0);
        let grip = integrate_velocity(velocity, 0.0, 0.0, false, 300.0, DT, &config);
        let slide = integrate_velocity(velocity, 0.0, 0.0, true, 300.0, DT, &config);
        assert!(slide.velocity.y > grip.velocity.y);
        // Fully sideways: no forward bite either way
        assert_eq!(grip.traction, 0.0);
    }

    #[test]
    fn test_drift_bleeds_more_forward_speed() {
        let config = Config::new();
        let velocity = Vec2::new(300.0, 0.0);
        let grip = integrate_velocity(velocity, 0.0, 0.0, false, 300.0, DT, &config);
        let slide = integrate_velocity(velocity, 0.0, 0.0, true, 300.0, DT, &config);
        assert!(slide.velocity.x < grip.velocity.x);
    }

    #[test]
    fn test_drag_never_reverses() {
        let config = Config::new();
        let step = integrate_velocity(Vec2::new(1.0, 0.0), 0.0, 0.0, false, 1.0, DT, &config);
        assert_eq!(step.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_speed_cap() {
        let config = Config::new();
        let velocity = Vec2::new(900.0, 0.0);
        let step = integrate_velocity(velocity, 0.0, 1.0, false, 0.0, DT, &config);
        assert_relative_eq!(step.velocity.length(), config.max_speed, epsilon = 1e-3);
        assert_eq!(step.velocity.y, 0.0);
    }

    #[test]
    fn test_cap_speed_never_rounds_above() {
        let mut rng = crate::GameRng::new(11);
        for _ in 0..20_000 {
            let angle: f32 = rng.0.gen_range(-10.0..10.0);
            let speed: f32 = rng.0.gen_range(600.0..5000.0);
            let capped = cap_speed(Vec2::from_angle(angle) * speed, 600.0);
            assert!(capped.length() <= 600.0, "{} over the cap", capped.length());
            assert!(capped.length() > 599.9);
        }
    }

    #[test]
    fn test_cap_speed_leaves_slow_velocity() {
        let velocity = Vec2::new(120.0, -45.0);
        assert_eq!(cap_speed(velocity, 600.0), velocity);
    }

    #[test]
    fn test_over_cap_sweep_through_integrator() {
        let config = Config::new();
        let mut rng = crate::GameRng::new(21);
        for _ in 0..20_000 {
            let velocity = Vec2::from_angle(rng.0.gen_range(-10.0..10.0))
                * rng.0.gen_range(config.max_speed..2.0 * config.max_speed);
            let heading: f32 = rng.0.gen_range(-10.0..10.0);
            let step = integrate_velocity(
                velocity,
                heading,
                1.0,
                rng.0.gen_bool(0.5),
                velocity.length(),
                DT,
                &config,
            );
            assert!(step.velocity.length() <= config.max_speed);
        }
    }

    #[test]
    fn test_speed_bound_sweep() {
        let config = Config::new();
        let mut rng = crate::GameRng::new(7);
        for _ in 0..2000 {
            let angle: f32 = rng.0.gen_range(-10.0..10.0);
            let speed: f32 = rng.0.gen_range(0.0..config.max_speed);
            let velocity = Vec2::from_angle(angle) * speed;
            let heading: f32 = rng.0.gen_range(-10.0..10.0);
            let drifting = rng.0.gen_bool(0.5);
            let dt: f32 = rng.0.gen_range(1.0 / 240.0..1.0 / 30.0);
            let step = integrate_velocity(
                velocity,
                heading,
                1.0,
                drifting,
                velocity.length(),
                dt,
                &config,
            );
            assert!(step.velocity.length() <= config.max_speed);
            assert!((0.0..=1.0).contains(&step.traction));
        }
    }
}
