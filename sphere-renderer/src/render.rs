use web_sys::WebGl2RenderingContext as GL;

use crate::animation::AnimationState;
use crate::config::DemoConfig;
use crate::console::Logger;
use crate::error::RenderResult;
use crate::file::FileSource;
use crate::gl::Graphics;
use crate::model::{Model, ModelLoaderPly};
use crate::shader::{ShaderLocations, ShaderSet};
use crate::vbo::BufferSet;

/// Everything a frame needs: the context, the uploaded model, the program
/// and the animation state. Built once by [`RenderContext::initialize`] and
/// then owned by the frame callback.
pub struct RenderContext<G: Graphics> {
    gl: G,
    model: Model,
    buffers: BufferSet<G>,
    shaders: ShaderSet<G>,
    locations: ShaderLocations<G>,
    animation: AnimationState,
    previous_time: Option<f64>,
}

impl<G: Graphics> RenderContext<G> {
    pub async fn initialize<F: FileSource, L: Logger>(
        gl: G,
        files: &F,
        config: &DemoConfig,
        logger: &L,
    ) -> RenderResult<Self> {
        logger.info("initializing...");
        logger.info("    Loading model");
        let model = ModelLoaderPly::load(files, &config.model_path).await?;

        logger.info("    WebGL settings");
        configure_pipeline(&gl, config);

        logger.info("    vertex buffer objects");
        let buffers = BufferSet::upload(&gl, &model)?;

        logger.info("    shaders");
        let shaders = ShaderSet::load(
            &gl,
            files,
            &config.vertex_shader_path,
            &config.fragment_shader_path,
        )
        .await?;
        let locations = ShaderLocations::resolve(&gl, &shaders.program)?;

        logger.info("initialization complete!");
        Ok(Self {
            gl,
            model,
            buffers,
            shaders,
            locations,
            animation: AnimationState::new(config),
            previous_time: None,
        })
    }

    /// One animation frame: update then render. `time` is the host's frame
    /// timestamp in milliseconds.
    pub fn frame(&mut self, time: f64) {
        let elapsed = time - self.previous_time.unwrap_or(time);
        self.previous_time = Some(time);

        self.update(elapsed);
        self.render();
    }

    pub fn update(&mut self, elapsed_ms: f64) {
        self.animation.update(elapsed_ms);
    }

    pub fn render(&self) {
        let gl = &self.gl;
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        self.associate_shaders_with_buffers();

        self.buffers.indices.bind(gl);
        gl.draw_elements(
            GL::TRIANGLES,
            self.model.index_count() as i32,
            GL::UNSIGNED_SHORT,
            0,
        );
    }

    /// Selects the program and points its inputs at our buffers and state.
    fn associate_shaders_with_buffers(&self) {
        let gl = &self.gl;
        gl.use_program(Some(&self.shaders.program));

        self.buffers.vertices.set_attribute(gl, self.locations.position, 3);
        if let Some(color) = self.locations.color {
            self.buffers.colors.set_attribute(gl, color, 3);
        }

        let p = self.animation.sphere_position;
        gl.uniform3f(&self.locations.sphere_position, p.x, p.y, p.z);
        let size = self.animation.window_size;
        gl.uniform2f(&self.locations.window_size, size.x, size.y);
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}

fn configure_pipeline<G: Graphics>(gl: &G, config: &DemoConfig) {
    let [r, g, b, a] = config.clear_color;
    gl.clear_color(r, g, b, a);
    gl.clear_depth(1.0);
    gl.depth_func(GL::LEQUAL);
    gl.enable(GL::DEPTH_TEST);
}
