pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use crate::simulation::FrameOutput;
use drift_core::Config;
use resources::SceneBuffers;
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub sprite_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: SceneBuffers,
    pub rect_mesh: Mesh,
    pub circle_mesh: Mesh,

    // Instances written this frame
    pub smoke_count: u32,
}

impl Renderer {
    pub async fn new(canvas: web_sys::HtmlCanvasElement, config: &Config) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::orthographic(config.arena_width, config.arena_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, 24);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            sprite_pipeline: pipes.sprite_pipeline,
            camera_bind_group,
            buffers,
            rect_mesh,
            circle_mesh,
            smoke_count: 0,
        })
    }

    /// Reconfigure the surface after the canvas changed size
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width, height) == self.size {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, frame: &FrameOutput, config: &Config) -> Result<(), String> {
        draw::draw_frame(self, frame, config)
    }
}
