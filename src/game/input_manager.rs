use winit::event::{KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Host events the particle field subscribes to, in logical (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldEvent {
    Resize { width: f32, height: f32 },
    PointerMove { x: f32, y: f32 },
}

impl FieldEvent {
    /// A pointer move reported by the page, in viewport coordinates,
    /// relative to the canvas' top-left corner at `canvas_origin`.
    pub fn page_pointer_move(client_x: f64, client_y: f64, canvas_origin: (f64, f64)) -> Self {
        FieldEvent::PointerMove {
            x: (client_x - canvas_origin.0) as f32,
            y: (client_y - canvas_origin.1) as f32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    Field(FieldEvent),
    ToggleAnimation,
    Exit,
}

/// Translates window events into field events and app actions.
///
/// Window events arrive in physical pixels and are divided by the window's
/// scale factor.
pub struct InputManager {
    attached: bool,
}

impl InputManager {
    pub fn new() -> InputManager {
        InputManager { attached: true }
    }

    /// Drops the field's subscriptions; only `Exit` is reported afterwards.
    pub fn detach(&mut self) {
        if self.attached {
            log::debug!("Input detached from the particle field");
        }
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn manage_input(&self, event: &WindowEvent, scale_factor: f64) -> Option<InputAction> {
        match event {
            WindowEvent::CloseRequested => Some(InputAction::Exit),
            WindowEvent::KeyboardInput {
                event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state: key_state,
                    repeat: false,
                    ..
                },
                ..
            } => self.handle_key(code, key_state.is_pressed()),
            _ if !self.attached => None,
            WindowEvent::Resized(size) => {
                let size = size.to_logical::<f32>(scale_factor);
                Some(InputAction::Field(FieldEvent::Resize {
                    width: size.width,
                    height: size.height,
                }))
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = position.to_logical::<f32>(scale_factor);
                Some(InputAction::Field(FieldEvent::PointerMove {
                    x: position.x,
                    y: position.y,
                }))
            }
            _ => None,
        }
    }

    fn handle_key(&self, code: &KeyCode, is_pressed: bool) -> Option<InputAction> {
        match (code, is_pressed) {
            (KeyCode::Escape, true) => Some(InputAction::Exit),
            (KeyCode::Space, true) if self.attached => Some(InputAction::ToggleAnimation),
            _ => None,
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
