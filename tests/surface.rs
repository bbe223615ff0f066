use particle_backdrop::renderer::surface_manager::{surface_settings, SurfaceSettings};

fn capabilities(
    formats: Vec<wgpu::TextureFormat>,
    present_modes: Vec<wgpu::PresentMode>,
    alpha_modes: Vec<wgpu::CompositeAlphaMode>,
) -> wgpu::SurfaceCapabilities {
    wgpu::SurfaceCapabilities {
        formats,
        present_modes,
        alpha_modes,
        usages: wgpu::TextureUsages::RENDER_ATTACHMENT,
    }
}

#[test]
fn test_srgb_format_is_preferred() {
    let caps = capabilities(
        vec![wgpu::TextureFormat::Bgra8Unorm, wgpu::TextureFormat::Bgra8UnormSrgb],
        vec![wgpu::PresentMode::Fifo, wgpu::PresentMode::Mailbox],
        vec![wgpu::CompositeAlphaMode::Opaque],
    );

    assert_eq!(
        surface_settings(&caps).unwrap(),
        SurfaceSettings {
            format: wgpu::TextureFormat::Bgra8UnormSrgb,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Opaque,
        },
    );
}

#[test]
fn test_first_format_without_srgb() {
    let caps = capabilities(
        vec![wgpu::TextureFormat::Rgba8Unorm, wgpu::TextureFormat::Bgra8Unorm],
        vec![wgpu::PresentMode::Fifo],
        vec![wgpu::CompositeAlphaMode::PreMultiplied],
    );
    assert_eq!(surface_settings(&caps).unwrap().format, wgpu::TextureFormat::Rgba8Unorm);
}

#[test]
fn test_incompatible_surface_is_an_error() {
    let empty = capabilities(vec![], vec![], vec![]);
    assert!(surface_settings(&empty).is_err());

    let no_present_modes = capabilities(
        vec![wgpu::TextureFormat::Bgra8UnormSrgb],
        vec![],
        vec![wgpu::CompositeAlphaMode::Opaque],
    );
    assert!(surface_settings(&no_present_modes).is_err());
}
