pub mod loader;
pub mod markup;
pub mod models;

#[cfg(target_arch = "wasm32")]
mod wasm_app;

#[cfg(target_arch = "wasm32")]
pub use wasm_app::*;
