pub mod animation;
pub mod input_manager;
#[cfg(target_arch = "wasm32")]
pub mod page_listener;
pub mod state;
