use std::rc::Rc;

use anyhow::Context;
use tracing::info;
use winit::Event;

use crate::{
    common::resource::ResourceLoader,
    frontend::graphic::{
        constants::RESOURCE_DIR,
        hal::opengl::GlDevice,
        renderer::RendererState,
        window::WindowState,
    },
};

pub mod frame;

use self::frame::{translate, FrameControl, InputEvent};

/// The window, its GL context and the scene drawn into it.
pub struct App {
    // dropped before the window so GL objects go while the context lives
    renderer: RendererState<GlDevice>,
    control: FrameControl,
    window_state: WindowState,
}

impl App {
    pub fn new() -> anyhow::Result<App> {
        let window_state = WindowState::new().context("could not open the window")?;
        let device = Rc::new(window_state.load_device());
        let resources = ResourceLoader::new(RESOURCE_DIR);
        let renderer = RendererState::new(device, &resources, window_state.viewport())
            .with_context(|| format!("renderer setup failed ({})", resources))?;
        Ok(App {
            renderer,
            control: FrameControl::new(),
            window_state,
        })
    }

    /// Renders until the window is closed or escape is pressed.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let startup_time = time::precise_time_s();

        while self.control.is_running() {
            let mut pending = Vec::new();
            self.window_state
                .events_loop
                .poll_events(|event| pending.push(event));
            for event in pending {
                let input = match self.translate(event) {
                    Some(input) => input,
                    None => continue,
                };
                if let Some(viewport) = self.control.handle(input) {
                    self.window_state.resize(viewport);
                    self.renderer.resize(viewport);
                }
            }
            if !self.control.is_running() {
                break;
            }

            let seconds = (time::precise_time_s() - startup_time) as f32;
            self.renderer.paint_frame(seconds);
            self.window_state
                .swap_buffers()
                .context("cannot present the frame")?;
            self.control.frame_presented();
        }

        info!("window closed after {} frames", self.control.frames());
        Ok(())
    }

    fn translate(&self, event: Event) -> Option<InputEvent> {
        match event {
            Event::WindowEvent { event, .. } => translate(
                event,
                self.window_state.hidpi_factor(),
                self.window_state.inner_size(),
            ),
            _ => None,
        }
    }
}
