use glam::Vec2;
use crate::game_data::canvas::DrawList;
use crate::renderer::camera::Camera;
use crate::renderer::renderable::Renderable;
use crate::renderer::wgpu_context::WgpuContext;
use crate::utils::gpu_buffer::GpuBuffer;

const INITIAL_CAPACITY: usize = 256;

/// Per-instance data of one filled disc.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DiscInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub color: [f32; 4],
}

/// Draws the recorded discs as instanced quads; the fragment shader cuts
/// each quad down to a circle.
pub struct DiscDrawer {
    vertices: GpuBuffer<Vec2>,
    indices: GpuBuffer<u32>,
    instances: GpuBuffer<DiscInstance>,
    render_pipeline: wgpu::RenderPipeline,
}

impl DiscDrawer {
    pub fn new(wgpu_context: &WgpuContext, camera: &Camera) -> Self {
        let shader = wgpu_context.get_device().create_shader_module(wgpu::include_wgsl!("disc.wgsl"));
        let render_pipeline_layout = wgpu_context.get_device().create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Disc Pipeline Layout"),
            bind_group_layouts: &[camera.camera_bind_group_layout()],
            push_constant_ranges: &[],
        });

        let render_pipeline = wgpu_context.get_device().create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Disc Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[
                    // Buffer 0: quad corners
                    wgpu::VertexBufferLayout {
                        array_stride: size_of::<Vec2>() as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
                    },
                    // Buffer 1: one entry per disc
                    wgpu::VertexBufferLayout {
                        array_stride: size_of::<DiscInstance>() as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![1 => Float32x2, 2 => Float32, 3 => Float32x4],
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: wgpu_context.get_surface_config().format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default()
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The projection flips y, which flips the winding too
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            vertices: GpuBuffer::new(
                wgpu_context,
                vec![
                    Vec2::new(-1.0, 1.0),
                    Vec2::new(1.0, 1.0),
                    Vec2::new(1.0, -1.0),
                    Vec2::new(-1.0, -1.0),
                ],
                wgpu::BufferUsages::VERTEX,
                "Disc Vertices",
            ),
            indices: GpuBuffer::new(
                wgpu_context,
                vec![
                    0, 3, 2,
                    2, 1, 0,
                ],
                wgpu::BufferUsages::INDEX,
                "Disc Indices",
            ),
            instances: GpuBuffer::with_capacity(wgpu_context, INITIAL_CAPACITY, wgpu::BufferUsages::VERTEX, "Disc Instances"),
            render_pipeline,
        }
    }
}

impl Renderable for DiscDrawer {
    fn upload(&mut self, frame: &DrawList, wgpu_context: &WgpuContext) {
        self.instances.replace(
            frame.discs().iter().map(|disc| DiscInstance {
                center: disc.center.to_array(),
                radius: disc.radius,
                color: disc.color.to_array(),
            }),
            wgpu_context,
        );
    }

    fn draw(&self, render_pass: &mut wgpu::RenderPass, camera: &Camera) {
        if self.instances.is_empty() { return; }
        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_vertex_buffer(0, self.vertices.buffer().slice(..));
        render_pass.set_vertex_buffer(1, self.instances.buffer().slice(..));
        render_pass.set_index_buffer(self.indices.buffer().slice(..), wgpu::IndexFormat::Uint32);
        render_pass.set_bind_group(0, camera.binding_group(), &[]);
        render_pass.draw_indexed(0..self.indices.len() as u32, 0, 0..self.instances.len() as u32);
    }
}
