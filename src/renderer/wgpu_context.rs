use std::sync::Arc;
use wgpu::Adapter;
use winit::window::Window;

use crate::renderer::surface_manager::SurfaceManager;

pub struct WgpuContext {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_manager: SurfaceManager,
}

impl WgpuContext {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        // The instance is a handle to our GPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            #[cfg(not(target_arch = "wasm32"))]
            backends: wgpu::Backends::PRIMARY,
            #[cfg(target_arch = "wasm32")]
            backends: wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            }).await?;
        log::info!("Using adapter {:?}", adapter.get_info().name);

        let surface_manager = SurfaceManager::new(window, surface, &adapter)?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Backdrop Device"),
                required_features: wgpu::Features::empty(),
                required_limits: WgpuContext::get_limits(&adapter),
                ..Default::default()
            }).await?;

        Ok(Self {
            device,
            queue,
            surface_manager,
        })
    }

    fn get_limits(adapter: &Adapter) -> wgpu::Limits {
        if cfg!(target_arch = "wasm32") {
            // When on web, request the browser's supported limits
            wgpu::Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits())
        } else {
            wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits())
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface_manager.resize(width, height, &self.device);
    }

    pub fn get_window(&self) -> &Arc<Window> {
        self.surface_manager.get_window()
    }

    pub fn get_surface(&self) -> &wgpu::Surface<'static> {
        self.surface_manager.get_surface()
    }

    pub fn is_surface_configured(&self) -> bool {
        self.surface_manager.is_surface_configured()
    }

    pub fn get_device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn get_queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn get_surface_config(&self) -> &wgpu::SurfaceConfiguration {
        self.surface_manager.get_config()
    }
}
