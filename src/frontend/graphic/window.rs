use std::{
    any::Any,
    ffi::c_void,
    panic,
};

use glutin::{
    Api,
    ContextBuilder,
    ContextError,
    CreationError,
    GlContext,
    GlProfile,
    GlRequest,
    GlWindow,
};
use thiserror::Error;
use winit::{EventsLoop, WindowBuilder};

use super::{
    constants::*,
    data_type::Viewport,
    hal::opengl::GlDevice,
};
use crate::app::frame::physical_viewport;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("window system unavailable: {0}")]
    Init(String),
    #[error("could not open window with GL context")]
    Creation(#[from] CreationError),
    #[error("could not make the OpenGL context current")]
    Context(#[from] ContextError),
}

pub struct WindowState {
    pub window: GlWindow,
    pub events_loop: EventsLoop,
}

impl WindowState {
    pub fn new() -> Result<WindowState, WindowError> {
        // winit panics when no display backend can be reached
        let events_loop = guard_init(EventsLoop::new)?;
        let window_builder = WindowBuilder::new()
            .with_dimensions(WINDOW_SIZE)
            .with_title(WINDOW_TITLE);
        let context_builder = ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, GL_VERSION))
            .with_gl_profile(GlProfile::Core)
            .with_vsync(true);
        let window = GlWindow::new(window_builder, context_builder, &events_loop)?;
        unsafe { window.make_current() }?;
        Ok(WindowState {
            window,
            events_loop,
        })
    }

    /// Resolves GL entry points against this window's context.
    pub fn load_device(&self) -> GlDevice {
        GlDevice::load(|symbol| self.window.get_proc_address(symbol) as *const c_void)
    }

    /// Drawable size in physical pixels.
    pub fn viewport(&self) -> Viewport {
        physical_viewport(self.inner_size(), self.hidpi_factor())
    }

    pub fn inner_size(&self) -> winit::dpi::LogicalSize {
        self.window.get_inner_size().unwrap_or(WINDOW_SIZE)
    }

    pub fn hidpi_factor(&self) -> f64 {
        self.window.get_hidpi_factor()
    }

    pub fn resize(&self, viewport: Viewport) {
        self.window.resize(winit::dpi::PhysicalSize::new(
            f64::from(viewport.width),
            f64::from(viewport.height),
        ));
    }

    pub fn swap_buffers(&self) -> Result<(), ContextError> {
        self.window.swap_buffers()
    }
}

/// Runs `init`, turning a panic inside it into [`WindowError::Init`].
pub fn guard_init<T, F>(init: F) -> Result<T, WindowError>
    where F: FnOnce() -> T + panic::UnwindSafe {
    panic::catch_unwind(init).map_err(|payload| WindowError::Init(panic_message(payload)))
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown failure".to_string()
    }
}
