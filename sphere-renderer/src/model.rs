use cgmath::Point3;

use crate::file::FileSource;
use crate::error::RenderResult;

// vertex data types
pub type Pos = [f32; 3];
pub type Color = [f32; 3];

/// Geometry ready for upload: positions, per-vertex colors and a triangle
/// list indexing into them.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub vertices: Vec<Pos>,
    pub vertex_colors: Vec<Color>,
    pub indices: Vec<u16>,
    pub center: Point3<f32>,
}

impl Model {
    /// Single front-facing quad spanning clip space.
    pub fn quad() -> Self {
        Self {
            vertices: vec![
                [-1.0, -1.0, 0.0],
                [1.0, -1.0, 0.0],
                [1.0, 1.0, 0.0],
                [-1.0, 1.0, 0.0],
            ],
            vertex_colors: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
            // CCW winding order
            indices: vec![1, 2, 0, 2, 0, 3],
            center: Point3::new(0.0, 0.0, 0.0),
        }
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// PLY model loader.
///
/// Parsing is not implemented yet: the file is fetched (so a missing file
/// still fails the load) and the built-in quad is returned in its place.
pub struct ModelLoaderPly;

impl ModelLoaderPly {
    pub async fn load<F: FileSource>(files: &F, path: &str) -> RenderResult<Model> {
        let _source = files.load_text(path).await?;
        Ok(Model::quad())
    }
}
