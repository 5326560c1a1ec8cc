pub mod channel;
pub mod json;
pub mod renderer;
mod renderer_tests;

pub use channel::spawn_renderer;
pub use json::{open_output, JsonRenderer};
#[cfg(test)]
pub use renderer::RecordingRenderer;
pub use renderer::{LogRenderer, NullRenderer, Renderer};
