use std::{
    ffi::{c_void, CStr, CString},
    marker::PhantomData,
    ptr,
};

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLsizeiptr, GLuint};

use super::{
    AttributeDesc, Device, DeviceInfo, Filter, HalError, Primitive, SamplerInfo, ShaderStage,
    WrapMode,
};
use crate::frontend::graphic::constants::INFO_LOG_CAPACITY;

/// [`Device`] backed by the OpenGL context current on this thread.
pub struct GlDevice {
    // GL calls are only valid on the thread owning the context
    _not_send: PhantomData<*const ()>,
}

impl GlDevice {
    /// Loads the GL entry points through `loader`.
    ///
    /// The context `loader` resolves symbols for must already be current.
    pub fn load<F>(loader: F) -> GlDevice
        where F: FnMut(&'static str) -> *const c_void {
        gl::load_with(loader);
        GlDevice {
            _not_send: PhantomData,
        }
    }
}

fn get_string(name: GLenum) -> String {
    unsafe {
        let raw = gl::GetString(name);
        if raw.is_null() {
            String::new()
        } else {
            CStr::from_ptr(raw as *const GLchar).to_string_lossy().into_owned()
        }
    }
}

fn info_log<F>(read: F) -> String
    where F: FnOnce(GLsizei, *mut GLsizei, *mut GLchar) {
    let mut buffer = vec![0u8; INFO_LOG_CAPACITY];
    let mut length: GLsizei = 0;
    read(buffer.len() as GLsizei, &mut length, buffer.as_mut_ptr() as *mut GLchar);
    buffer.truncate(length.max(0) as usize);
    String::from_utf8_lossy(&buffer).into_owned()
}

fn generated_name(name: GLuint, what: &'static str) -> Result<GLuint, HalError> {
    if name == 0 {
        Err(HalError::ObjectCreation(what))
    } else {
        Ok(name)
    }
}

impl Device for GlDevice {
    type Shader = GLuint;
    type Program = GLuint;
    type Buffer = GLuint;
    type VertexArray = GLuint;
    type Texture = GLuint;
    type UniformLocation = GLint;

    fn info(&self) -> DeviceInfo {
        DeviceInfo {
            vendor: get_string(gl::VENDOR),
            renderer: get_string(gl::RENDERER),
            version: get_string(gl::VERSION),
            shading_language_version: get_string(gl::SHADING_LANGUAGE_VERSION),
        }
    }

    fn enable_depth_test(&self) {
        unsafe {
            gl::Enable(gl::DEPTH_TEST);
            // smaller depth is closer
            gl::DepthFunc(gl::LESS);
        }
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<GLuint, HalError> {
        let kind = match stage {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        };
        generated_name(unsafe { gl::CreateShader(kind) }, "shader")
    }

    fn shader_source(&self, shader: GLuint, stage: ShaderStage, source: &str) -> Result<(), HalError> {
        let source = CString::new(source).map_err(|_| HalError::InvalidSource { stage })?;
        unsafe {
            gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
        }
        Ok(())
    }

    fn compile_shader(&self, shader: GLuint) {
        unsafe { gl::CompileShader(shader) }
    }

    fn shader_compile_status(&self, shader: GLuint) -> bool {
        let mut status = GLint::from(gl::FALSE);
        unsafe { gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status) };
        status == GLint::from(gl::TRUE)
    }

    fn shader_info_log(&self, shader: GLuint) -> String {
        info_log(|capacity, length, log| unsafe {
            gl::GetShaderInfoLog(shader, capacity, length, log)
        })
    }

    fn delete_shader(&self, shader: GLuint) {
        unsafe { gl::DeleteShader(shader) }
    }

    fn create_program(&self) -> Result<GLuint, HalError> {
        generated_name(unsafe { gl::CreateProgram() }, "shader program")
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::AttachShader(program, shader) }
    }

    fn detach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::DetachShader(program, shader) }
    }

    fn link_program(&self, program: GLuint) {
        unsafe { gl::LinkProgram(program) }
    }

    fn program_link_status(&self, program: GLuint) -> bool {
        let mut status = GLint::from(gl::FALSE);
        unsafe { gl::GetProgramiv(program, gl::LINK_STATUS, &mut status) };
        status == GLint::from(gl::TRUE)
    }

    fn validate_program(&self, program: GLuint) {
        unsafe { gl::ValidateProgram(program) }
    }

    fn program_validate_status(&self, program: GLuint) -> bool {
        let mut status = GLint::from(gl::FALSE);
        unsafe { gl::GetProgramiv(program, gl::VALIDATE_STATUS, &mut status) };
        status == GLint::from(gl::TRUE)
    }

    fn program_info_log(&self, program: GLuint) -> String {
        info_log(|capacity, length, log| unsafe {
            gl::GetProgramInfoLog(program, capacity, length, log)
        })
    }

    fn use_program(&self, program: Option<GLuint>) {
        unsafe { gl::UseProgram(program.unwrap_or(0)) }
    }

    fn delete_program(&self, program: GLuint) {
        unsafe { gl::DeleteProgram(program) }
    }

    fn uniform_location(&self, program: GLuint, name: &str) -> Option<GLint> {
        let name = CString::new(name).ok()?;
        let location = unsafe { gl::GetUniformLocation(program, name.as_ptr()) };
        // -1 marks a name the linker did not keep
        if location < 0 {
            None
        } else {
            Some(location)
        }
    }

    fn uniform_1_i32(&self, location: GLint, value: i32) {
        unsafe { gl::Uniform1i(location, value) }
    }

    fn uniform_1_f32(&self, location: GLint, value: f32) {
        unsafe { gl::Uniform1f(location, value) }
    }

    fn uniform_3_f32(&self, location: GLint, value: &[f32; 3]) {
        unsafe { gl::Uniform3fv(location, 1, value.as_ptr()) }
    }

    fn uniform_matrix_3_f32(&self, location: GLint, value: &[f32; 9]) {
        unsafe { gl::UniformMatrix3fv(location, 1, gl::FALSE, value.as_ptr()) }
    }

    fn uniform_matrix_4_f32(&self, location: GLint, value: &[f32; 16]) {
        unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, value.as_ptr()) }
    }

    fn create_vertex_array(&self) -> Result<GLuint, HalError> {
        let mut vertex_array = 0;
        unsafe { gl::GenVertexArrays(1, &mut vertex_array) };
        generated_name(vertex_array, "vertex array")
    }

    fn bind_vertex_array(&self, vertex_array: Option<GLuint>) {
        unsafe { gl::BindVertexArray(vertex_array.unwrap_or(0)) }
    }

    fn delete_vertex_array(&self, vertex_array: GLuint) {
        unsafe { gl::DeleteVertexArrays(1, &vertex_array) }
    }

    fn create_buffer(&self) -> Result<GLuint, HalError> {
        let mut buffer = 0;
        unsafe { gl::GenBuffers(1, &mut buffer) };
        generated_name(buffer, "vertex buffer")
    }

    fn bind_array_buffer(&self, buffer: Option<GLuint>) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, buffer.unwrap_or(0)) }
    }

    fn array_buffer_data(&self, data: &[u8]) {
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                data.len() as GLsizeiptr,
                data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
        }
    }

    fn vertex_attrib_pointer_f32(&self, attribute: AttributeDesc, stride: usize) {
        unsafe {
            gl::VertexAttribPointer(
                attribute.location,
                attribute.components,
                gl::FLOAT,
                gl::FALSE,
                stride as GLsizei,
                attribute.offset as *const c_void,
            );
        }
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        unsafe { gl::EnableVertexAttribArray(location) }
    }

    fn delete_buffer(&self, buffer: GLuint) {
        unsafe { gl::DeleteBuffers(1, &buffer) }
    }

    fn create_texture(&self) -> Result<GLuint, HalError> {
        let mut texture = 0;
        unsafe { gl::GenTextures(1, &mut texture) };
        generated_name(texture, "texture")
    }

    fn active_texture(&self, unit: u32) {
        unsafe { gl::ActiveTexture(gl::TEXTURE0 + unit) }
    }

    fn bind_texture_2d(&self, texture: Option<GLuint>) {
        unsafe { gl::BindTexture(gl::TEXTURE_2D, texture.unwrap_or(0)) }
    }

    fn texture_2d_sampling(&self, sampler_info: SamplerInfo) {
        let wrap = match sampler_info.wrap_mode {
            WrapMode::Repeat => gl::REPEAT as GLint,
        };
        let filter = match sampler_info.filter {
            Filter::Linear => gl::LINEAR as GLint,
        };
        unsafe {
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, wrap);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, wrap);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, filter);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, filter);
        }
    }

    fn texture_2d_image_rgb(&self, width: u32, height: u32, pixels: &[u8]) {
        unsafe {
            // RGB rows are not 4-byte aligned for most widths
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGB as GLint,
                width as GLsizei,
                height as GLsizei,
                0,
                gl::RGB,
                gl::UNSIGNED_BYTE,
                pixels.as_ptr() as *const c_void,
            );
        }
    }

    fn generate_mipmap_2d(&self) {
        unsafe { gl::GenerateMipmap(gl::TEXTURE_2D) }
    }

    fn delete_texture(&self, texture: GLuint) {
        unsafe { gl::DeleteTextures(1, &texture) }
    }

    fn clear_color(&self, color: [f32; 4]) {
        unsafe { gl::ClearColor(color[0], color[1], color[2], color[3]) }
    }

    fn clear_color_depth(&self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { gl::Viewport(x, y, width, height) }
    }

    fn draw_arrays(&self, primitive: Primitive, first: i32, count: i32) {
        let mode = match primitive {
            Primitive::TriangleList => gl::TRIANGLES,
        };
        unsafe { gl::DrawArrays(mode, first, count) }
    }
}
