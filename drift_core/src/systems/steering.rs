use crate::config::Config;
use crate::params::Params;

/// Fraction of steering authority left at `speed`, never below 30%
pub fn steer_damping(speed: f32, config: &Config) -> f32 {
    let falloff_speed = config.max_speed * Params::STEER_FALLOFF_SPEED_RATIO;
    (1.0 - speed / falloff_speed).max(Params::MIN_STEER_DAMPING)
}

/// Advance the heading by one frame of steering input.
///
/// The result is not wrapped; display code reduces it modulo a full turn.
pub fn integrate_heading(
    heading: f32,
    steer: i8,
    speed: f32,
    drifting: bool,
    dt: f32,
    config: &Config,
) -> f32 {
    let rate = config.steer_rate(drifting);
    heading + f32::from(steer) * rate * steer_damping(speed, config) * dt
}
