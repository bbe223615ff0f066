use crate::game_data::canvas::DrawList;
use crate::renderer::camera::Camera;
use crate::renderer::wgpu_context::WgpuContext;

/// A GPU drawer fed from the shapes recorded in a [`DrawList`].
pub trait Renderable {
    /// Copies this frame's shapes to the GPU.
    fn upload(&mut self, frame: &DrawList, wgpu_context: &WgpuContext);
    fn draw(&self, render_pass: &mut wgpu::RenderPass, camera: &Camera);
}
