use std::sync::Arc;
use wgpu::Adapter;
use winit::window::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSettings {
    pub format: wgpu::TextureFormat,
    pub present_mode: wgpu::PresentMode,
    pub alpha_mode: wgpu::CompositeAlphaMode,
}

/// Picks an sRGB format when there is one, otherwise the first format and
/// the first present / alpha modes the surface reports.
pub fn surface_settings(caps: &wgpu::SurfaceCapabilities) -> anyhow::Result<SurfaceSettings> {
    let format = caps.formats.iter()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first())
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Surface is incompatible with the adapter: no texture formats"))?;
    let present_mode = caps.present_modes.first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Surface reports no present modes"))?;
    let alpha_mode = caps.alpha_modes.first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Surface reports no alpha modes"))?;

    Ok(SurfaceSettings { format, present_mode, alpha_mode })
}

pub struct SurfaceManager {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    is_surface_configured: bool,
    config: wgpu::SurfaceConfiguration,
}

impl SurfaceManager {
    pub fn new(window: Arc<Window>, surface: wgpu::Surface<'static>, adapter: &Adapter) -> anyhow::Result<Self> {
        let settings = surface_settings(&surface.get_capabilities(adapter))?;

        let size = window.inner_size();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: settings.format,
            width: size.width,
            height: size.height,
            present_mode: settings.present_mode,
            alpha_mode: settings.alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        Ok(Self { window, surface, is_surface_configured: false, config })
    }

    /// Reconfigures the surface. A zero-sized surface is left unconfigured,
    /// so nothing gets drawn until a usable size arrives.
    pub fn resize(&mut self, width: u32, height: u32, device: &wgpu::Device) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(device, &self.config);
            self.is_surface_configured = true;
        } else {
            log::warn!("Ignoring resize of the surface to {}x{}", width, height);
            self.is_surface_configured = false;
        }
    }

    pub fn get_window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn get_surface(&self) -> &wgpu::Surface<'static> {
        &self.surface
    }

    pub fn is_surface_configured(&self) -> bool {
        self.is_surface_configured
    }

    pub fn get_config(&self) -> &wgpu::SurfaceConfiguration {
        &self.config
    }
}
