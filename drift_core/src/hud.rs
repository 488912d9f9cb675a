//! Text shown over the arena each frame

use crate::resources::Telemetry;

pub const CONTROLS_LINE: &str = "W=throttle | S=brake | A/D=steer | SPACE=drift";

/// The five readout lines, top to bottom
pub fn hud_lines(telemetry: &Telemetry) -> [String; 5] {
    [
        format!("Speed: {:.0}", telemetry.speed),
        format!("Lateral slip: {:.0}", telemetry.lateral_speed()),
        format!("DRIFT: {}", if telemetry.drifting { "ON" } else { "OFF" }),
        format!("Traction: {:.2}", telemetry.traction),
        format!("Angle: {:.0}°", telemetry.heading_degrees()),
    ]
}
