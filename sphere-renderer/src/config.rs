use serde::Deserialize;

use crate::error::RenderResult;

/// Settings for a demo run. Every field has a default, so the page can pass a
/// partial JSON object (or nothing at all).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DemoConfig {
    pub model_path: String,
    pub vertex_shader_path: String,
    pub fragment_shader_path: String,
    /// Prefix prepended to every fetched path; empty means page-relative.
    pub base_url: String,
    pub clear_color: [f32; 4],
    pub window_size: [f32; 2],
    /// Radians added to the sphere angle each frame.
    pub angle_step: f64,
    pub radius: f32,
    pub distance: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            model_path: "models/cube.ply".into(),
            vertex_shader_path: "shaders/simple.vs".into(),
            fragment_shader_path: "shaders/simple.frag".into(),
            base_url: String::new(),
            // cornflower blue
            clear_color: [
                0.392_156_87,
                0.584_313_7,
                0.929_411_8,
                1.0,
            ],
            window_size: [800.0, 800.0],
            angle_step: 0.01,
            radius: 1.0,
            distance: -3.0,
        }
    }
}

impl DemoConfig {
    pub fn from_json(json: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
