use std::mem;

use bytemuck::{Pod, Zeroable};

#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub texture: [f32; 2],
}

impl Vertex {
    pub const STRIDE: usize = mem::size_of::<Vertex>();
    pub const POSITION_OFFSET: usize = 0;
    pub const NORMAL_OFFSET: usize = Vertex::POSITION_OFFSET + mem::size_of::<[f32; 3]>();
    pub const TEXTURE_OFFSET: usize = Vertex::NORMAL_OFFSET + mem::size_of::<[f32; 3]>();

    pub const fn new(position: [f32; 3], normal: [f32; 3], texture: [f32; 2]) -> Vertex {
        Vertex {
            position,
            normal,
            texture,
        }
    }
}

/// Drawable area of the window, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Viewport {
        Viewport { width, height }
    }

    /// `None` while either side is zero, e.g. when the window is minimised
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}
