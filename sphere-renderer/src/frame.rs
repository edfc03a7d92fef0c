use crate::config::DemoConfig;
use crate::console::Logger;
use crate::error::{RenderError, RenderResult};
use crate::file::FileSource;
use crate::gl::Graphics;
use crate::render::RenderContext;

/// Per-frame callback; receives the host's timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnMut(f64)>;

/// Host facility that calls a frame callback once per display refresh,
/// forever.
pub trait FrameScheduler {
    fn run(&self, frame: FrameCallback) -> RenderResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Initializing,
    Running,
    Failed,
}

/// Brings a renderer up once and hands it to the frame scheduler.
pub struct Launcher {
    config: DemoConfig,
    lifecycle: Lifecycle,
}

impl Launcher {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Initializes everything, then starts the frame loop. On failure the
    /// error is logged once and the loop is never started.
    pub async fn launch<G, F, S, L>(
        &mut self,
        gl: G,
        files: &F,
        scheduler: &S,
        logger: &L,
    ) -> RenderResult<()>
    where
        G: Graphics + 'static,
        F: FileSource,
        S: FrameScheduler,
        L: Logger,
    {
        if self.lifecycle != Lifecycle::Uninitialized {
            return Err(RenderError::AlreadyLaunched);
        }
        self.lifecycle = Lifecycle::Initializing;

        let started = match RenderContext::initialize(gl, files, &self.config, logger).await {
            Ok(mut context) => {
                scheduler.run(Box::new(move |time: f64| context.frame(time)))
            }
            Err(err) => Err(err),
        };

        match started {
            Ok(()) => {
                self.lifecycle = Lifecycle::Running;
                Ok(())
            }
            Err(err) => {
                logger.error(&format!("initialization failed: {}", err));
                self.lifecycle = Lifecycle::Failed;
                Err(err)
            }
        }
    }
}

/// Drives frames with `window.requestAnimationFrame`.
#[cfg(target_arch = "wasm32")]
pub struct AnimationFrameScheduler;

#[cfg(target_arch = "wasm32")]
fn request_animation_frame(
    closure: &wasm_bindgen::closure::Closure<dyn FnMut(f64)>,
) -> RenderResult<()> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or_else(|| RenderError::Context("no window".into()))?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|e| RenderError::Context(format!("{:?}", e)))?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
impl FrameScheduler for AnimationFrameScheduler {
    fn run(&self, mut frame: FrameCallback) -> RenderResult<()> {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::closure::Closure;

        let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();

        let closure = Closure::wrap(Box::new(move |time: f64| {
            frame(time);

            // Schedule next frame
            if let Some(next) = f.borrow().as_ref() {
                if let Err(err) = request_animation_frame(next) {
                    web_sys::console::error_1(&format!("ERROR: {}", err).into());
                }
            }
        }) as Box<dyn FnMut(f64)>);

        *g.borrow_mut() = Some(closure);

        match g.borrow().as_ref() {
            Some(first) => request_animation_frame(first),
            None => Ok(()),
        }
    }
}
