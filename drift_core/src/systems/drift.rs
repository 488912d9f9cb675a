use crate::config::Config;

/// Whether the car is drifting this frame.
///
/// Pure: no memory of earlier frames, so releasing the button or dropping
/// below the threshold ends the drift on the very next step.
pub fn classify_drift(drift_button: bool, speed: f32, config: &Config) -> bool {
    drift_button && speed > config.drift_threshold
}
