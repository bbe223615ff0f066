pub mod game;
pub mod game_data;
pub mod renderer;
pub mod utils;

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use crate::game::input_manager::FieldEvent;
use crate::game::state::State;
use crate::game_data::config::AppConfig;

/// Events sent into the event loop from outside of winit.
pub enum UserEvent {
    /// Asynchronous setup finished.
    Ready(State),
    /// Input observed by a page-level listener.
    Field(FieldEvent),
}

pub struct App {
    #[cfg(target_arch = "wasm32")]
    proxy: Option<winit::event_loop::EventLoopProxy<UserEvent>>,
    state: Option<State>,
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig, #[cfg(target_arch = "wasm32")] event_loop: &EventLoop<UserEvent>) -> Self {
        #[cfg(target_arch = "wasm32")]
        let proxy = Some(event_loop.create_proxy());
        Self {
            state: None,
            config,
            #[cfg(target_arch = "wasm32")]
            proxy,
        }
    }
}

impl ApplicationHandler<UserEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        #[allow(unused_mut)]
        let mut window_attributes = Window::default_attributes()
            .with_title(self.config.window_title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(self.config.initial_size.0, self.config.initial_size.1));

        #[cfg(target_arch = "wasm32")]
        let page_canvas: web_sys::HtmlCanvasElement;
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            // The background is decorative: without its canvas the page just goes without it.
            let canvas = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&self.config.canvas_id))
                .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok());
            match canvas {
                Some(canvas) => {
                    page_canvas = canvas.clone();
                    window_attributes = window_attributes.with_canvas(Some(canvas));
                }
                None => {
                    log::warn!("No <canvas id=\"{}\"> on the page, skipping the particle background", self.config.canvas_id);
                    return;
                }
            }
        }

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Unable to create the window: {}", e);
                return;
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            match pollster::block_on(State::new(window, &self.config)) {
                Ok(mut state) => {
                    state.start();
                    self.state = Some(state);
                }
                Err(e) => {
                    log::error!("Unable to set up the particle background: {:#}", e);
                    event_loop.exit();
                }
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            // Run the future asynchronously and use the
            // proxy to send the results to the event loop
            if let Some(proxy) = self.proxy.take() {
                let config = self.config.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match State::new(window, &config).await {
                        Ok(mut state) => {
                            if let Some(listener) = game::page_listener::PagePointerListener::attach(page_canvas, proxy.clone()) {
                                state.set_page_listener(listener);
                            }
                            if proxy.send_event(UserEvent::Ready(state)).is_err() {
                                log::error!("Event loop closed before the particle background was ready");
                            }
                        }
                        Err(e) => log::error!("Unable to set up the particle background: {:#}", e),
                    }
                });
            }
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        // This is where proxy.send_event() ends up
        match event {
            UserEvent::Ready(mut state) => {
                state.start();
                self.state = Some(state);
            }
            UserEvent::Field(field_event) => {
                if let Some(state) = &mut self.state {
                    state.handle_field_event(field_event);
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: winit::window::WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        state.render_loop(&event, event_loop);
    }
}

pub fn run() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }
    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info)?;
    }

    let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
    let mut app = App::new(
        AppConfig::default(),
        #[cfg(target_arch = "wasm32")]
        &event_loop,
    );

    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn run_web() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    run().map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}
