use crate::game_data::canvas::DrawList;
use crate::renderer::camera::Camera;
use crate::renderer::renderable::Renderable;
use crate::renderer::wgpu_context::WgpuContext;
use crate::utils::gpu_buffer::GpuBuffer;

const INITIAL_CAPACITY: usize = 1024;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Draws the recorded line segments as a `LineList`, two vertices per segment.
pub struct LineDrawer {
    vertices: GpuBuffer<LineVertex>,
    render_pipeline: wgpu::RenderPipeline,
}

impl LineDrawer {
    pub fn new(wgpu_context: &WgpuContext, camera: &Camera) -> Self {
        let shader = wgpu_context.get_device().create_shader_module(wgpu::include_wgsl!("line.wgsl"));
        let render_pipeline_layout = wgpu_context.get_device().create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Line Pipeline Layout"),
            bind_group_layouts: &[camera.camera_bind_group_layout()],
            push_constant_ranges: &[],
        });

        let render_pipeline = wgpu_context.get_device().create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: size_of::<LineVertex>() as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4],
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
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None, // No culling for lines
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
            vertices: GpuBuffer::with_capacity(wgpu_context, INITIAL_CAPACITY, wgpu::BufferUsages::VERTEX, "Line Vertices"),
            render_pipeline,
        }
    }
}

impl Renderable for LineDrawer {
    fn upload(&mut self, frame: &DrawList, wgpu_context: &WgpuContext) {
        self.vertices.replace(
            frame.lines().iter().flat_map(|line| {
                let color = line.color.to_array();
                [
                    LineVertex { position: line.from.to_array(), color },
                    LineVertex { position: line.to.to_array(), color },
                ]
            }),
            wgpu_context,
        );
    }

    fn draw(&self, render_pass: &mut wgpu::RenderPass, camera: &Camera) {
        if self.vertices.is_empty() { return; }
        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_vertex_buffer(0, self.vertices.buffer().slice(..));
        render_pass.set_bind_group(0, camera.binding_group(), &[]);
        render_pass.draw(0..self.vertices.len() as u32, 0..1);
    }
}
