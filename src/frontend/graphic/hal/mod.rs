//! Thin layer between the renderer and the graphics API.
//!
//! Everything the renderer asks of the GPU goes through [`Device`], so the
//! same setup and frame code drives the real OpenGL context and the
//! recording device used by the integration tests.

use std::fmt::Debug;

pub mod buffer;
pub mod device;
pub mod error;
pub mod opengl;
pub mod image;
pub mod pipeline;
pub mod shader_module;
pub mod uniform;

pub use self::{
    device::{AttributeDesc, DeviceInfo, Filter, Primitive, SamplerInfo, ShaderStage, WrapMode},
    error::HalError,
};

pub trait Device {
    type Shader: Copy + Debug;
    type Program: Copy + Debug;
    type Buffer: Copy + Debug;
    type VertexArray: Copy + Debug;
    type Texture: Copy + Debug;
    type UniformLocation: Copy + Debug;

    fn info(&self) -> DeviceInfo;
    fn enable_depth_test(&self);

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, HalError>;
    fn shader_source(&self, shader: Self::Shader, stage: ShaderStage, source: &str) -> Result<(), HalError>;
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, HalError>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn validate_program(&self, program: Self::Program);
    fn program_validate_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    /// `None` when `name` is not an active uniform of `program`
    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation>;
    fn uniform_1_i32(&self, location: Self::UniformLocation, value: i32);
    fn uniform_1_f32(&self, location: Self::UniformLocation, value: f32);
    fn uniform_3_f32(&self, location: Self::UniformLocation, value: &[f32; 3]);
    fn uniform_matrix_3_f32(&self, location: Self::UniformLocation, value: &[f32; 9]);
    fn uniform_matrix_4_f32(&self, location: Self::UniformLocation, value: &[f32; 16]);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, HalError>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    fn create_buffer(&self) -> Result<Self::Buffer, HalError>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// uploads `data` once into the bound array buffer
    fn array_buffer_data(&self, data: &[u8]);
    fn vertex_attrib_pointer_f32(&self, attribute: AttributeDesc, stride: usize);
    fn enable_vertex_attrib_array(&self, location: u32);
    fn delete_buffer(&self, buffer: Self::Buffer);

    fn create_texture(&self) -> Result<Self::Texture, HalError>;
    fn active_texture(&self, unit: u32);
    fn bind_texture_2d(&self, texture: Option<Self::Texture>);
    fn texture_2d_sampling(&self, sampler_info: SamplerInfo);
    /// tightly packed 8-bit RGB rows, bottom row first
    fn texture_2d_image_rgb(&self, width: u32, height: u32, pixels: &[u8]);
    fn generate_mipmap_2d(&self);
    fn delete_texture(&self, texture: Self::Texture);

    fn clear_color(&self, color: [f32; 4]);
    fn clear_color_depth(&self);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn draw_arrays(&self, primitive: Primitive, first: i32, count: i32);
}
