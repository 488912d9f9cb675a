use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::components::*;
use crate::config::Config;
use crate::params::Params;
use crate::resources::*;

/// Smoke only appears while the tail is actually sliding
pub fn should_emit_smoke(telemetry: &Telemetry) -> bool {
    telemetry.drifting && telemetry.lateral_speed() > Params::SMOKE_MIN_LATERAL
}

/// Spawn a puff of smoke behind the car, returns how many particles spawned
pub fn emit_smoke(
    world: &mut World,
    telemetry: &Telemetry,
    config: &Config,
    rng: &mut GameRng,
) -> usize {
    if !should_emit_smoke(telemetry) {
        return 0;
    }

    let rotation = Vec2::from_angle(telemetry.heading);
    let half_length = config.vehicle_size * Params::VEHICLE_LENGTH_RATIO / 2.0;
    let rear_offset = rotation.rotate(Vec2::new(-half_length, 0.0));
    let rear_dir = rear_offset.normalize_or_zero();

    for _ in 0..Params::SMOKE_PER_FRAME {
        let jitter = Vec2::new(rng.0.gen_range(-16.0..-6.0), rng.0.gen_range(-8.0..8.0));
        let pos = telemetry.position + rear_offset + rotation.rotate(jitter);
        let vel = telemetry.velocity * 0.15 - rear_dir * 8.0;
        let life: f32 = rng.0.gen_range(0.7..Params::SMOKE_MAX_LIFE);
        let size: f32 = rng.0.gen_range(5.0..12.0);

        world.spawn((Particle::new(pos, vel, size), Lifetime::new(life)));
    }

    Params::SMOKE_PER_FRAME
}

/// Age smoke, move the survivors and despawn the expired.
///
/// Expired entities are collected first and despawned after the query ends,
/// so nothing is removed while the world is being iterated.
pub fn age_particles(world: &mut World, time: &Time) -> usize {
    let mut to_remove = Vec::new();

    for (entity, (particle, lifetime)) in world.query_mut::<(&mut Particle, &mut Lifetime)>() {
        lifetime.t_left -= time.dt;
        if lifetime.is_expired() {
            to_remove.push(entity);
            continue;
        }
        particle.pos += particle.vel * time.dt;
    }

    let removed = to_remove.len();
    for entity in to_remove {
        let _ = world.despawn(entity);
    }
    removed
}

/// Live particles in spawn order, for drawing
pub fn collect_particles(world: &World) -> Vec<(Particle, Lifetime)> {
    let mut particles: Vec<_> = world
        .query::<(&Particle, &Lifetime)>()
        .iter()
        .map(|(e, (p, l))| (e, *p, *l))
        .collect();
    particles.sort_by_key(|(e, _, _)| e.id());
    particles.into_iter().map(|(_, p, l)| (p, l)).collect()
}
