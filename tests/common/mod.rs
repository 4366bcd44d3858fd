#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
    path::Path,
};

use spinning_cube::frontend::graphic::hal::{
    AttributeDesc, Device, DeviceInfo, HalError, Primitive, SamplerInfo, ShaderStage,
};

pub const MINIMAL_VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 v_pos;
void main() {
  gl_Position = vec4(v_pos, 1.0);
}
";

pub const MINIMAL_FRAGMENT_SHADER: &str = "#version 330 core
out vec4 frag_col;
void main() {
  frag_col = vec4(1.0, 0.5, 0.2, 1.0);
}
";

#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    I32(i32),
    F32(f32),
    Vec3([f32; 3]),
    Mat3([f32; 9]),
    Mat4([f32; 16]),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    EnableDepthTest,
    CreateShader(ShaderStage, u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    DetachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    ValidateProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    Uniform { location: i32, value: UniformValue },
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    BufferData { bytes: usize },
    DeleteBuffer(u32),
    VertexAttribPointer { attribute: AttributeDesc, stride: usize },
    EnableVertexAttribArray(u32),
    CreateTexture(u32),
    ActiveTexture(u32),
    BindTexture(Option<u32>),
    TextureSampling(SamplerInfo),
    TextureImage { width: u32, height: u32, bytes: usize },
    GenerateMipmap,
    DeleteTexture(u32),
    ClearColor([f32; 4]),
    Clear,
    Viewport { width: i32, height: i32 },
    DrawArrays { primitive: Primitive, first: i32, count: i32 },
}

/// Records every call instead of talking to a GPU.
///
/// Shaders "compile" when they contain a `main`, and a linked program
/// exposes exactly the uniforms its sources declare at top level.
#[derive(Default)]
pub struct RecordingDevice {
    pub fail_compile: Option<ShaderStage>,
    pub fail_link: bool,
    calls: RefCell<Vec<Call>>,
    next_name: Cell<u32>,
    live: RefCell<HashSet<u32>>,
    sources: RefCell<HashMap<u32, (ShaderStage, String)>>,
    attached: RefCell<HashMap<u32, Vec<u32>>>,
    linked_sources: RefCell<HashMap<u32, String>>,
    uniform_names: RefCell<Vec<String>>,
}

impl RecordingDevice {
    pub fn new() -> RecordingDevice {
        RecordingDevice::default()
    }

    pub fn failing_compile(stage: ShaderStage) -> RecordingDevice {
        RecordingDevice {
            fail_compile: Some(stage),
            ..RecordingDevice::default()
        }
    }

    pub fn failing_link() -> RecordingDevice {
        RecordingDevice {
            fail_link: true,
            ..RecordingDevice::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// objects created and not deleted yet
    pub fn live_objects(&self) -> usize {
        self.live.borrow().len()
    }

    pub fn draw_calls(&self) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::DrawArrays { .. }))
            .cloned()
            .collect()
    }

    pub fn uniform_writes(&self, location: i32) -> Vec<UniformValue> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Uniform { location: l, value } if *l == location => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn generate(&self) -> u32 {
        let name = self.next_name.get() + 1;
        self.next_name.set(name);
        self.live.borrow_mut().insert(name);
        name
    }

    fn release(&self, name: u32) {
        self.live.borrow_mut().remove(&name);
    }

    fn uniform(&self, location: i32, value: UniformValue) {
        self.record(Call::Uniform { location, value });
    }
}

/// true when `source` declares a top level uniform called `name`
pub fn declares_uniform(source: &str, name: &str) -> bool {
    let head = name.split('.').next().unwrap_or(name);
    source.lines().any(|line| {
        let line = line.trim();
        line.starts_with("uniform ")
            && line.trim_end_matches(';').split_whitespace().last() == Some(head)
    })
}

impl Device for RecordingDevice {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type Texture = u32;
    type UniformLocation = i32;

    fn info(&self) -> DeviceInfo {
        DeviceInfo {
            vendor: "test".to_string(),
            renderer: "recording device".to_string(),
            version: "3.3.0".to_string(),
            shading_language_version: "3.30".to_string(),
        }
    }

    fn enable_depth_test(&self) {
        self.record(Call::EnableDepthTest);
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, HalError> {
        let name = self.generate();
        self.record(Call::CreateShader(stage, name));
        self.sources.borrow_mut().insert(name, (stage, String::new()));
        Ok(name)
    }

    fn shader_source(&self, shader: u32, stage: ShaderStage, source: &str) -> Result<(), HalError> {
        if source.contains('\0') {
            return Err(HalError::InvalidSource { stage });
        }
        self.sources.borrow_mut().insert(shader, (stage, source.to_string()));
        Ok(())
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        let sources = self.sources.borrow();
        match sources.get(&shader) {
            Some((stage, source)) => Some(*stage) != self.fail_compile && source.contains("void main"),
            None => false,
        }
    }

    fn shader_info_log(&self, _shader: u32) -> String {
        format!("0:1(1): error: {}", "syntax error, unexpected token ".repeat(40))
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
        self.release(shader);
    }

    fn create_program(&self) -> Result<u32, HalError> {
        let name = self.generate();
        self.record(Call::CreateProgram(name));
        Ok(name)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader { program, shader });
        self.attached.borrow_mut().entry(program).or_default().push(shader);
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(Call::DetachShader { program, shader });
        if let Some(shaders) = self.attached.borrow_mut().get_mut(&program) {
            shaders.retain(|&s| s != shader);
        }
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
        let sources = self.sources.borrow();
        let linked: String = self
            .attached
            .borrow()
            .get(&program)
            .map(|shaders| {
                shaders
                    .iter()
                    .filter_map(|shader| sources.get(shader))
                    .map(|(_, source)| source.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();
        self.linked_sources.borrow_mut().insert(program, linked);
    }

    fn program_link_status(&self, _program: u32) -> bool {
        !self.fail_link
    }

    fn validate_program(&self, program: u32) {
        self.record(Call::ValidateProgram(program));
    }

    fn program_validate_status(&self, _program: u32) -> bool {
        true
    }

    fn program_info_log(&self, _program: u32) -> String {
        "error: vertex shader output `frag_3Dpos' is not read".to_string()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
        self.release(program);
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<i32> {
        let linked = self.linked_sources.borrow();
        let source = linked.get(&program)?;
        if !declares_uniform(source, name) {
            return None;
        }
        let mut names = self.uniform_names.borrow_mut();
        let index = match names.iter().position(|known| known == name) {
            Some(index) => index,
            None => {
                names.push(name.to_string());
                names.len() - 1
            }
        };
        Some(index as i32)
    }

    fn uniform_1_i32(&self, location: i32, value: i32) {
        self.uniform(location, UniformValue::I32(value));
    }

    fn uniform_1_f32(&self, location: i32, value: f32) {
        self.uniform(location, UniformValue::F32(value));
    }

    fn uniform_3_f32(&self, location: i32, value: &[f32; 3]) {
        self.uniform(location, UniformValue::Vec3(*value));
    }

    fn uniform_matrix_3_f32(&self, location: i32, value: &[f32; 9]) {
        self.uniform(location, UniformValue::Mat3(*value));
    }

    fn uniform_matrix_4_f32(&self, location: i32, value: &[f32; 16]) {
        self.uniform(location, UniformValue::Mat4(*value));
    }

    fn create_vertex_array(&self) -> Result<u32, HalError> {
        let name = self.generate();
        self.record(Call::CreateVertexArray(name));
        Ok(name)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(Call::DeleteVertexArray(vertex_array));
        self.release(vertex_array);
    }

    fn create_buffer(&self) -> Result<u32, HalError> {
        let name = self.generate();
        self.record(Call::CreateBuffer(name));
        Ok(name)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        self.record(Call::BindArrayBuffer(buffer));
    }

    fn array_buffer_data(&self, data: &[u8]) {
        self.record(Call::BufferData { bytes: data.len() });
    }

    fn vertex_attrib_pointer_f32(&self, attribute: AttributeDesc, stride: usize) {
        self.record(Call::VertexAttribPointer { attribute, stride });
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record(Call::EnableVertexAttribArray(location));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
        self.release(buffer);
    }

    fn create_texture(&self) -> Result<u32, HalError> {
        let name = self.generate();
        self.record(Call::CreateTexture(name));
        Ok(name)
    }

    fn active_texture(&self, unit: u32) {
        self.record(Call::ActiveTexture(unit));
    }

    fn bind_texture_2d(&self, texture: Option<u32>) {
        self.record(Call::BindTexture(texture));
    }

    fn texture_2d_sampling(&self, sampler_info: SamplerInfo) {
        self.record(Call::TextureSampling(sampler_info));
    }

    fn texture_2d_image_rgb(&self, width: u32, height: u32, pixels: &[u8]) {
        self.record(Call::TextureImage { width, height, bytes: pixels.len() });
    }

    fn generate_mipmap_2d(&self) {
        self.record(Call::GenerateMipmap);
    }

    fn delete_texture(&self, texture: u32) {
        self.record(Call::DeleteTexture(texture));
        self.release(texture);
    }

    fn clear_color(&self, color: [f32; 4]) {
        self.record(Call::ClearColor(color));
    }

    fn clear_color_depth(&self) {
        self.record(Call::Clear);
    }

    fn viewport(&self, _x: i32, _y: i32, width: i32, height: i32) {
        self.record(Call::Viewport { width, height });
    }

    fn draw_arrays(&self, primitive: Primitive, first: i32, count: i32) {
        self.record(Call::DrawArrays { primitive, first, count });
    }
}

/// Lays out a resource directory the way the renderer expects it.
pub fn write_resources(root: &Path, vertex_shader: Option<&str>, fragment_shader: Option<&str>, texture: bool) {
    let shaders = root.join("shaders");
    std::fs::create_dir_all(&shaders).unwrap();
    if let Some(source) = vertex_shader {
        std::fs::write(shaders.join("spinningcube_withlight_vs.glsl"), source).unwrap();
    }
    if let Some(source) = fragment_shader {
        std::fs::write(shaders.join("spinningcube_withlight_fs.glsl"), source).unwrap();
    }
    if texture {
        let textures = root.join("textures");
        std::fs::create_dir_all(&textures).unwrap();
        // 2x2 solid orange
        let mut ppm = b"P6\n2 2\n255\n".to_vec();
        for _ in 0..4 {
            ppm.extend_from_slice(&[255, 128, 0]);
        }
        std::fs::write(textures.join("box.ppm"), ppm).unwrap();
    }
}
