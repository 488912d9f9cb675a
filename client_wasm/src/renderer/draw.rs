use super::Renderer;
use crate::scene::{car_instances, smoke_instances};
use crate::simulation::FrameOutput;
use drift_core::Config;
use wgpu::*;

pub fn draw_frame(
    renderer: &mut Renderer,
    frame: &FrameOutput,
    config: &Config,
) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame; the next one draws into the fresh surface
            log::warn!("Surface lost, reconfiguring");
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, frame, config);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, frame: &FrameOutput, config: &Config) {
    let car = car_instances(&frame.telemetry, config);
    renderer
        .queue
        .write_buffer(&renderer.buffers.car, 0, bytemuck::cast_slice(&car));

    let smoke = smoke_instances(&frame.particles);
    renderer.buffers.reserve_smoke(&renderer.device, smoke.len());
    if !smoke.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.smoke, 0, bytemuck::cast_slice(&smoke));
    }
    renderer.smoke_count = smoke.len() as u32;
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>) {
    pass.set_pipeline(&renderer.sprite_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Car body and headlights
    let rect = &renderer.rect_mesh;
    pass.set_vertex_buffer(0, rect.vertex_buffer.slice(..));
    pass.set_index_buffer(rect.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.car.slice(..));
    pass.draw_indexed(
        0..rect.index_count,
        0,
        0..super::resources::CAR_INSTANCES as u32,
    );

    // Smoke over the car
    if renderer.smoke_count > 0 {
        let circle = &renderer.circle_mesh;
        pass.set_vertex_buffer(0, circle.vertex_buffer.slice(..));
        pass.set_index_buffer(circle.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.smoke.slice(..));
        pass.draw_indexed(0..circle.index_count, 0, 0..renderer.smoke_count);
    }
}
