//! Turns simulation output into GPU instances
//!
//! Everything here is plain data so it can be checked without a device.

use drift_core::{Config, Lifetime, Params, Particle, Telemetry};
use glam::Vec2;

pub const BODY_COLOR: [u8; 3] = [200, 50, 50];
pub const HEADLIGHT_COLOR: [u8; 3] = [255, 255, 200];
pub const SMOKE_COLOR: [u8; 3] = [100, 90, 70];

const HEADLIGHT_SIZE: Vec2 = Vec2::new(6.0, 7.0);
const HEADLIGHT_NOSE_INSET: f32 = 8.0;
const HEADLIGHT_SIDE_INSET: f32 = 2.0;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub rotation: [f32; 2],  // cos, sin
    pub _padding: [f32; 2],
    pub tint: [f32; 4], // linear rgba
}

impl InstanceData {
    pub fn new(center: Vec2, scale: Vec2, angle: f32, tint: [f32; 4]) -> Self {
        let rotation = Vec2::from_angle(angle);
        Self {
            transform: [center.x, center.y, scale.x, scale.y],
            rotation: [rotation.x, rotation.y],
            _padding: [0.0; 2],
            tint,
        }
    }
}

/// Convert one sRGB channel to linear for an sRGB surface
pub fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn tint(rgb: [u8; 3], alpha: u8) -> [f32; 4] {
    [
        srgb_to_linear(rgb[0]),
        srgb_to_linear(rgb[1]),
        srgb_to_linear(rgb[2]),
        alpha as f32 / 255.0,
    ]
}

/// Car body plus its two headlights, rotated about the car's centre
pub fn car_instances(telemetry: &Telemetry, config: &Config) -> [InstanceData; 3] {
    let length = config.vehicle_size * Params::VEHICLE_LENGTH_RATIO;
    let width = config.vehicle_size;
    let rotation = Vec2::from_angle(telemetry.heading);

    // Headlight centres in the car's frame, x towards the nose
    let light_x = length / 2.0 - HEADLIGHT_NOSE_INSET + HEADLIGHT_SIZE.x / 2.0;
    let light_y = width / 2.0 - HEADLIGHT_SIDE_INSET - HEADLIGHT_SIZE.y / 2.0;
    let light = |side: f32| {
        let offset = rotation.rotate(Vec2::new(light_x, light_y * side));
        InstanceData::new(
            telemetry.position + offset,
            HEADLIGHT_SIZE,
            telemetry.heading,
            tint(HEADLIGHT_COLOR, 255),
        )
    };

    [
        InstanceData::new(
            telemetry.position,
            Vec2::new(length, width),
            telemetry.heading,
            tint(BODY_COLOR, 255),
        ),
        light(-1.0),
        light(1.0),
    ]
}

/// One circle per live smoke particle; `size` is the radius
pub fn smoke_instances(particles: &[(Particle, Lifetime)]) -> Vec<InstanceData> {
    particles
        .iter()
        .map(|(particle, lifetime)| {
            InstanceData::new(
                particle.pos,
                Vec2::splat(particle.size * 2.0),
                0.0,
                tint(SMOKE_COLOR, lifetime.alpha()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn center(instance: &InstanceData) -> Vec2 {
        Vec2::new(instance.transform[0], instance.transform[1])
    }

    fn telemetry_at(heading: f32) -> Telemetry {
        Telemetry {
            position: Vec2::new(480.0, 270.0),
            heading,
            ..Default::default()
        }
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 48);
    }

    #[test]
    fn test_srgb_endpoints() {
        assert_eq!(srgb_to_linear(0), 0.0);
        assert_relative_eq!(srgb_to_linear(255), 1.0, epsilon = 1e-6);
        assert!(srgb_to_linear(128) < 0.5);
    }

    #[test]
    fn test_car_facing_right() {
        let [body, left, right] = car_instances(&telemetry_at(0.0), &Config::new());
        assert_eq!(body.transform, [480.0, 270.0, 32.0, 20.0]);
        assert_eq!(body.rotation, [1.0, 0.0]);

        // Nose at x = 496; lights span 488..494 and sit 2 in from each side
        assert_relative_eq!(center(&left).x, 491.0);
        assert_relative_eq!(center(&left).y, 265.5);
        assert_relative_eq!(center(&right).x, 491.0);
        assert_relative_eq!(center(&right).y, 274.5);
        assert_eq!(left.transform[2..], [6.0, 7.0]);
    }

    #[test]
    fn test_headlights_turn_with_car() {
        // Facing down the screen (+y): lights move below the centre
        let [_, left, right] =
            car_instances(&telemetry_at(std::f32::consts::FRAC_PI_2), &Config::new());
        assert_relative_eq!(center(&left).y, 281.0, epsilon = 1e-4);
        assert_relative_eq!(center(&right).y, 281.0, epsilon = 1e-4);
        assert_relative_eq!(center(&left).x, 484.5, epsilon = 1e-4);
        assert_relative_eq!(center(&right).x, 475.5, epsilon = 1e-4);
    }

    #[test]
    fn test_smoke_fades_with_life() {
        let particles = [
            (Particle::new(Vec2::new(1.0, 2.0), Vec2::ZERO, 5.0), Lifetime::new(1.3)),
            (Particle::new(Vec2::new(3.0, 4.0), Vec2::ZERO, 8.0), Lifetime::new(0.65)),
        ];
        let instances = smoke_instances(&particles);
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].transform, [1.0, 2.0, 10.0, 10.0]);
        assert_relative_eq!(instances[0].tint[3], 200.0 / 255.0);
        // Half life left: about half of the starting opacity
        assert!((instances[1].tint[3] - 100.0 / 255.0).abs() <= 1.0 / 255.0 + 1e-6);
    }
}
