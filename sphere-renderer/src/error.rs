//! Error types for loading and rendering

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result type for renderer operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while bringing up or driving the renderer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("could not load {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("program failed to link: {0}")]
    ProgramLink(String),

    #[error("attribute not found in program: {0}")]
    MissingAttribute(String),

    #[error("uniform not found in program: {0}")]
    MissingUniform(String),

    #[error("could not create {0}")]
    ResourceCreation(&'static str),

    #[error("graphics context error: {0}")]
    Context(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("renderer was already launched")]
    AlreadyLaunched,
}

impl RenderError {
    pub fn load(path: &str, reason: impl ToString) -> Self {
        RenderError::Load {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Config(err.to_string())
    }
}

impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}
