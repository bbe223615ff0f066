use glam::Vec2;
use crate::game_data::canvas::DrawList;
use crate::game_data::line::lines::LineDrawer;
use crate::game_data::particle::particle_drawer::DiscDrawer;
use crate::renderer::camera::Camera;
use crate::renderer::renderable::Renderable;
use crate::renderer::wgpu_context::WgpuContext;

// Draws a recorded frame, in registration order, onto the window surface
pub struct Renderer {
    renderables: Vec<Box<dyn Renderable>>,
    background_color: wgpu::Color,
    camera: Camera,
}

impl Renderer {
    /// `surface_size` is in logical pixels, the unit the recorded frames use.
    pub fn new(wgpu_context: &WgpuContext, surface_size: Vec2, background_color: wgpu::Color) -> Self {
        let camera = Camera::new(surface_size, wgpu_context);

        // Lines go first so the particles sit on top of their connections.
        let renderables: Vec<Box<dyn Renderable>> = vec![
            Box::new(LineDrawer::new(wgpu_context, &camera)),
            Box::new(DiscDrawer::new(wgpu_context, &camera)),
        ];

        Self {
            renderables,
            background_color,
            camera,
        }
    }

    pub fn resize(&mut self, surface_size: Vec2, wgpu_context: &WgpuContext) {
        self.camera.resize(surface_size, wgpu_context);
    }

    pub fn render(&mut self, wgpu_context: &WgpuContext, frame: &DrawList) -> Result<(), wgpu::SurfaceError> {
        // We can't render unless the window is configured
        if !wgpu_context.is_surface_configured() {
            return Ok(());
        }

        for renderable in self.renderables.iter_mut() {
            renderable.upload(frame, wgpu_context);
        }

        let output = wgpu_context.get_surface().get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = wgpu_context.get_device().create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Backdrop Render Pass"),
                color_attachments: &[
                    Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        depth_slice: None,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(self.background_color),
                            store: wgpu::StoreOp::Store,
                        }
                    })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            for renderable in self.renderables.iter() {
                renderable.draw(&mut render_pass, &self.camera);
            }
        }

        wgpu_context.get_queue().submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
