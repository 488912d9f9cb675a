use crate::camera::{Camera, CameraUniform};
use crate::scene::InstanceData;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Enough for a long drift: 5 puffs a frame living up to 1.3s at 60 FPS
pub const INITIAL_SMOKE_CAPACITY: usize = 512;

pub const CAR_INSTANCES: usize = 3;

pub struct SceneBuffers {
    pub camera: Buffer,
    pub car: Buffer,
    pub smoke: Buffer,
    pub smoke_capacity: usize,
}

fn instance_buffer(device: &Device, label: &str, count: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some(label),
        size: (std::mem::size_of::<InstanceData>() * count) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub fn create_buffers(device: &Device, camera: &Camera) -> SceneBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    SceneBuffers {
        camera: camera_buffer,
        car: instance_buffer(device, "Car Instance Buffer", CAR_INSTANCES),
        smoke: instance_buffer(device, "Smoke Instance Buffer", INITIAL_SMOKE_CAPACITY),
        smoke_capacity: INITIAL_SMOKE_CAPACITY,
    }
}

impl SceneBuffers {
    /// Grow the smoke buffer so it holds at least `count` instances
    pub fn reserve_smoke(&mut self, device: &Device, count: usize) {
        if count <= self.smoke_capacity {
            return;
        }
        let capacity = count.next_power_of_two();
        log::debug!(
            "Growing smoke buffer from {} to {} instances",
            self.smoke_capacity,
            capacity
        );
        self.smoke = instance_buffer(device, "Smoke Instance Buffer", capacity);
        self.smoke_capacity = capacity;
    }
}
