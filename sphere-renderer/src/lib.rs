mod animation;
mod config;
mod console;
mod error;
mod file;
mod frame;
mod gl;
mod model;
mod render;
mod shader;
mod vbo;

#[cfg(test)]
mod testing;

pub use crate::animation::AnimationState;
pub use crate::config::DemoConfig;
pub use crate::console::Logger;
pub use crate::error::{RenderError, RenderResult, ShaderStage};
pub use crate::file::FileSource;
pub use crate::frame::{FrameCallback, FrameScheduler, Launcher, Lifecycle};
pub use crate::gl::Graphics;
pub use crate::model::{Model, ModelLoaderPly};
pub use crate::render::RenderContext;

#[cfg(target_arch = "wasm32")]
pub use crate::{console::ConsoleLogger, file::HttpFileSource, frame::AnimationFrameScheduler};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Starts the demo on `canvas`. `config` is an optional JSON object with any
/// of the `DemoConfig` fields.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn start_rendering(
    canvas: web_sys::HtmlCanvasElement,
    config: Option<String>,
) -> Result<(), JsValue> {
    use web_sys::WebGl2RenderingContext as GL;

    let config = match config {
        Some(json) => DemoConfig::from_json(&json)?,
        None => DemoConfig::default(),
    };

    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or_else(|| RenderError::Context("canvas has no webgl2 context".into()))?
        .dyn_into::<GL>()?;

    let files = HttpFileSource::new(config.base_url.clone());
    let mut launcher = Launcher::new(config);
    launcher
        .launch(gl, &files, &AnimationFrameScheduler, &ConsoleLogger)
        .await?;
    Ok(())
}
