pub mod camera;
pub mod renderable;
pub mod renderer;
pub mod surface_manager;
pub mod wgpu_context;
