use glam::{Mat4, Vec2};
use wgpu::util::DeviceExt;
use crate::renderer::wgpu_context::WgpuContext;

/// Maps surface pixels to clip space: origin at the top-left corner, `y`
/// pointing down, one unit per logical pixel.
pub struct Camera {
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    camera_bind_group_layout: wgpu::BindGroupLayout,
}

impl Camera {
    pub fn new(surface_size: Vec2, wgpu_context: &WgpuContext) -> Self {
        let mut camera_uniform = CameraUniform::new();
        camera_uniform.update_view_proj(&Self::screen_projection(surface_size));

        let camera_buffer = wgpu_context.get_device().create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            }
        );

        let camera_bind_group_layout = wgpu_context.get_device().create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    // Must match `@binding(0)` in the shaders
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }
            ],
            label: Some("Camera Bind Group Layout"),
        });

        let camera_bind_group = wgpu_context.get_device().create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &camera_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }
            ],
            label: Some("Camera Bind Group"),
        });

        Self {
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            camera_bind_group_layout,
        }
    }

    /// Orthographic projection of a `surface_size` pixel surface. Degenerate
    /// sizes are widened to one pixel to keep the matrix finite.
    pub fn screen_projection(surface_size: Vec2) -> Mat4 {
        let size = surface_size.max(Vec2::ONE);
        Mat4::orthographic_rh(
            0.0,    // left
            size.x, // right
            size.y, // bottom
            0.0,    // top
            -1.0,   // near
            1.0,    // far
        )
    }

    /// Rebuilds the projection for a new surface size and uploads it.
    pub fn resize(&mut self, surface_size: Vec2, wgpu_context: &WgpuContext) {
        self.camera_uniform.update_view_proj(&Self::screen_projection(surface_size));
        wgpu_context.get_queue().write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );
    }

    pub fn binding_group(&self) -> &wgpu::BindGroup {
        &self.camera_bind_group
    }

    pub fn camera_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.camera_bind_group_layout
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    // Column-major, matching WGSL's mat4x4<f32>
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    pub fn update_view_proj(&mut self, m: &Mat4) {
        self.view_proj = m.to_cols_array_2d();
    }
}
