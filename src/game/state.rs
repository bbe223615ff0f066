use std::sync::Arc;
use glam::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;
use crate::game::animation::{AnimationLoop, LoopState};
use crate::game::input_manager::{FieldEvent, InputAction, InputManager};
#[cfg(target_arch = "wasm32")]
use crate::game::page_listener::PagePointerListener;
use crate::game_data::canvas::DrawList;
use crate::game_data::config::AppConfig;
use crate::game_data::particle::particle_field::ParticleField;
use crate::renderer::renderer::Renderer;
use crate::renderer::wgpu_context::WgpuContext;

// Everything the background needs while the page is alive
pub struct State {
    wgpu_context: WgpuContext,
    renderer: Renderer,
    field: ParticleField<DrawList, StdRng>,
    animation: AnimationLoop,
    input_manager: InputManager,
    // Set when the canvas changed while paused and has to be presented once
    needs_present: bool,
    #[cfg(target_arch = "wasm32")]
    page_listener: Option<PagePointerListener>,
}

impl State {
    pub async fn new(window: Arc<Window>, config: &AppConfig) -> anyhow::Result<Self> {
        let physical_size = window.inner_size();
        let logical_size = physical_size.to_logical::<f32>(window.scale_factor());
        let logical_size = Vec2::new(logical_size.width, logical_size.height);

        let wgpu_context = WgpuContext::new(window).await?;
        let renderer = Renderer::new(&wgpu_context, logical_size, config.clear_color);
        let field = ParticleField::new(
            DrawList::new(),
            logical_size,
            config.field,
            StdRng::from_os_rng(),
        );

        let mut state = Self {
            wgpu_context,
            renderer,
            field,
            animation: AnimationLoop::new(),
            input_manager: InputManager::new(),
            needs_present: false,
            #[cfg(target_arch = "wasm32")]
            page_listener: None,
        };
        // Configure the surface right away; not every platform sends an initial resize.
        state.configure_surface(physical_size.width, physical_size.height, logical_size);
        Ok(state)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn set_page_listener(&mut self, listener: PagePointerListener) {
        if let Some(previous) = self.page_listener.replace(listener) {
            previous.detach();
        }
    }

    /// Starts the frame chain.
    pub fn start(&mut self) {
        if self.animation.start() {
            self.wgpu_context.get_window().request_redraw();
        }
    }

    /// Stops scheduling frames and unsubscribes the field from input.
    pub fn dispose(&mut self) {
        self.animation.stop();
        self.input_manager.detach();
        self.detach_page_listener();
    }

    #[cfg(target_arch = "wasm32")]
    fn detach_page_listener(&mut self) {
        if let Some(listener) = self.page_listener.take() {
            listener.detach();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn detach_page_listener(&mut self) {}

    /// Applies a host event to the field, unless the field was disposed.
    pub fn handle_field_event(&mut self, event: FieldEvent) {
        if !self.input_manager.is_attached() {
            return;
        }
        match event {
            FieldEvent::Resize { width, height } => self.resize(width, height),
            FieldEvent::PointerMove { x, y } => self.field.on_pointer_move(x, y),
        }
    }

    /// Resizes to a surface of `width` x `height` logical pixels.
    pub fn resize(&mut self, width: f32, height: f32) {
        let physical_size = self.wgpu_context.get_window().inner_size();
        self.configure_surface(physical_size.width, physical_size.height, Vec2::new(width, height));
        self.field.resize(width, height);

        // A paused field still shows its new layout.
        if !self.animation.is_running() {
            self.field.repaint();
            self.needs_present = true;
            self.wgpu_context.get_window().request_redraw();
        }
    }

    fn configure_surface(&mut self, physical_width: u32, physical_height: u32, logical_size: Vec2) {
        self.wgpu_context.resize(physical_width, physical_height);
        self.renderer.resize(logical_size, &self.wgpu_context);
    }

    pub fn render_loop(&mut self, event: &WindowEvent, event_loop: &ActiveEventLoop) {
        let scale_factor = self.wgpu_context.get_window().scale_factor();
        match self.input_manager.manage_input(event, scale_factor) {
            Some(InputAction::Field(field_event)) => self.handle_field_event(field_event),
            Some(InputAction::ToggleAnimation) => {
                if self.animation.toggle() == LoopState::Running {
                    self.wgpu_context.get_window().request_redraw();
                }
            }
            Some(InputAction::Exit) => {
                self.dispose();
                event_loop.exit();
            }
            None => {}
        }

        if let WindowEvent::RedrawRequested = event {
            self.redraw();
        }
    }

    fn redraw(&mut self) {
        let rendered = self.animation.tick(&mut self.field).is_some();
        if !rendered && !self.needs_present {
            return;
        }
        self.needs_present = false;

        match self.renderer.render(&self.wgpu_context, self.field.canvas()) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = self.wgpu_context.get_window().inner_size();
                self.wgpu_context.resize(size.width, size.height);
            }
            Err(e) => {
                log::error!("Unable to render: {:?}", e);
            }
        }

        // Next animation frame
        if rendered {
            self.wgpu_context.get_window().request_redraw();
        }
    }
}
