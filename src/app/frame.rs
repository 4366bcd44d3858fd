use winit::{
    dpi::LogicalSize,
    ElementState,
    KeyboardInput,
    VirtualKeyCode,
    WindowEvent,
};

use crate::frontend::graphic::data_type::Viewport;

/// Window events the frame loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Resized(Viewport),
    EscapePressed,
    CloseRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Rendering,
    Terminated,
}

/// Tracks whether another frame should be rendered.
#[derive(Debug)]
pub struct FrameControl {
    state: LoopState,
    frames: u64,
}

impl FrameControl {
    pub fn new() -> FrameControl {
        FrameControl {
            state: LoopState::Rendering,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Rendering
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame_presented(&mut self) {
        self.frames += 1;
    }

    /// Applies `event`, returning the new viewport for a resize.
    ///
    /// Once terminated nothing brings the loop back.
    pub fn handle(&mut self, event: InputEvent) -> Option<Viewport> {
        match event {
            InputEvent::EscapePressed | InputEvent::CloseRequested => {
                self.state = LoopState::Terminated;
                None
            }
            InputEvent::Resized(viewport) if self.is_running() => Some(viewport),
            InputEvent::Resized(_) => None,
        }
    }
}

impl Default for FrameControl {
    fn default() -> Self {
        FrameControl::new()
    }
}

/// Physical pixel size of a logical size at `hidpi_factor`.
pub fn physical_viewport(size: LogicalSize, hidpi_factor: f64) -> Viewport {
    let physical = size.to_physical(hidpi_factor);
    Viewport::new(physical.width.round() as u32, physical.height.round() as u32)
}

/// Maps a window event to what the frame loop reacts to.
///
/// `hidpi_factor` and `inner_size` describe the window as it is now; a
/// changed DPI factor re-derives the physical size from `inner_size`.
pub fn translate(event: WindowEvent, hidpi_factor: f64, inner_size: LogicalSize) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { input, .. } => translate_key(input),
        WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),
        WindowEvent::Resized(size) => Some(InputEvent::Resized(physical_viewport(size, hidpi_factor))),
        WindowEvent::HiDpiFactorChanged(factor) => {
            Some(InputEvent::Resized(physical_viewport(inner_size, factor)))
        }
        _ => None,
    }
}

/// Only a press of escape counts, releases and other keys are ignored.
pub fn translate_key(input: KeyboardInput) -> Option<InputEvent> {
    match input {
        KeyboardInput {
            state: ElementState::Pressed,
            virtual_keycode: Some(VirtualKeyCode::Escape),
            ..
        } => Some(InputEvent::EscapePressed),
        _ => None,
    }
}
