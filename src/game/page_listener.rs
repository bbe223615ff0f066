use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use winit::event_loop::EventLoopProxy;
use crate::UserEvent;
use crate::game::input_manager::FieldEvent;

const POINTER_MOVE: &str = "pointermove";

/// A `pointermove` subscription on the page window.
///
/// The background canvas usually sits under the page content, so the canvas
/// itself never sees the pointer; the window sees every move.
pub struct PagePointerListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut(web_sys::PointerEvent)>,
}

impl PagePointerListener {
    pub fn attach(canvas: web_sys::HtmlCanvasElement, proxy: EventLoopProxy<UserEvent>) -> Option<Self> {
        let window = web_sys::window()?;

        let callback = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |event: web_sys::PointerEvent| {
            let rect = canvas.get_bounding_client_rect();
            let field_event = FieldEvent::page_pointer_move(
                event.client_x() as f64,
                event.client_y() as f64,
                (rect.left(), rect.top()),
            );
            // Fails only once the event loop is gone.
            let _ = proxy.send_event(UserEvent::Field(field_event));
        });

        if let Err(e) = window.add_event_listener_with_callback(POINTER_MOVE, callback.as_ref().unchecked_ref()) {
            log::warn!("Unable to listen for pointer moves on the page: {:?}", e);
            return None;
        }
        log::debug!("Listening for pointer moves on the page");

        Some(Self { window, callback })
    }

    pub fn detach(self) {
        if let Err(e) = self.window.remove_event_listener_with_callback(POINTER_MOVE, self.callback.as_ref().unchecked_ref()) {
            log::warn!("Unable to remove the page pointer listener: {:?}", e);
        }
    }
}
