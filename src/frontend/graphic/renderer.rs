use std::rc::Rc;

use thiserror::Error;
use tracing::{info, trace, warn};

use crate::{
    common::{
        math::geometry::normal_matrix,
        resource::{ReadFile, ResourceError, ResourceLoader},
    },
    frontend::graphic::{
        constants::*,
        data_type::{Vertex, Viewport},
        hal::{
            buffer::VertexBufferState,
            image::{decode_rgb, TextureState},
            pipeline::ProgramState,
            uniform::{LightField, Semantic, UniformBindings, UNIFORM_TABLE},
            AttributeDesc,
            Device,
            Filter,
            HalError,
            Primitive,
            SamplerInfo,
            WrapMode,
        },
        mesh::VERTICES,
    },
};

pub const VERTEX_ATTRIBUTES: [AttributeDesc; 3] = [
    AttributeDesc { location: 0, components: 3, offset: Vertex::POSITION_OFFSET },
    AttributeDesc { location: 1, components: 3, offset: Vertex::NORMAL_OFFSET },
    AttributeDesc { location: 2, components: 2, offset: Vertex::TEXTURE_OFFSET },
];

#[derive(Debug, Error)]
pub enum RendererError {
    #[error("cannot load shader source")]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Hal(#[from] HalError),
}

/// Everything the frame loop needs, created once at startup.
pub struct RendererState<D: Device> {
    // current drawable size, changed only through `resize`
    viewport: Viewport,
    uniforms: UniformBindings<D>,

    // These own GPU objects and delete them on drop, so they have to go
    // before the device they were created on. Field order is drop order.
    texture: TextureState<D>,
    vertex_buffer: VertexBufferState<D, Vertex>,
    program: ProgramState<D>,
    device: Rc<D>,
}

impl<D: Device> RendererState<D> {
    pub fn new(
        device: Rc<D>,
        resources: &ResourceLoader,
        viewport: Viewport,
    ) -> Result<RendererState<D>, RendererError> {
        let device_info = device.info();
        info!("Vendor: {}", device_info.vendor);
        info!("Renderer: {}", device_info.renderer);
        info!("OpenGL version supported {}", device_info.version);
        info!("GLSL version supported {}", device_info.shading_language_version);
        info!("Starting viewport: (width: {}, height: {})", viewport.width, viewport.height);

        device.enable_depth_test();
        device.clear_color(CLEAR_COLOR);

        let vertex_source = resources.load(VERTEX_SHADER)?;
        let fragment_source = resources.load(FRAGMENT_SHADER)?;
        let program = ProgramState::new(device.clone(), &vertex_source, &fragment_source)?;

        let vertex_buffer =
            VertexBufferState::new_from_items(device.clone(), &VERTICES[..], &VERTEX_ATTRIBUTES)?;

        let uniforms = UniformBindings::resolve(&*device, &program, &UNIFORM_TABLE);

        let mut texture = TextureState::new(
            device.clone(),
            MATERIAL.diffuse_unit as u32,
            SamplerInfo::new(Filter::Linear, WrapMode::Repeat),
        )?;
        match decode_rgb(resources.resolve(TEXTURE)) {
            Ok(image) => texture.upload(&image),
            // rendering goes on with an empty texture
            Err(e) => warn!("Failed to load the texture: {}", e),
        }

        Ok(RendererState {
            viewport,
            uniforms,
            texture,
            vertex_buffer,
            program,
            device,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn uniforms(&self) -> &UniformBindings<D> {
        &self.uniforms
    }

    pub fn texture(&self) -> &TextureState<D> {
        &self.texture
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        info!("New viewport: (width: {}, height: {})", viewport.width, viewport.height);
    }

    /// Renders the scene as it looks `seconds` after startup.
    pub fn paint_frame(&self, seconds: f32) {
        let device = &*self.device;

        device.clear_color_depth();
        device.viewport(0, 0, self.viewport.width as i32, self.viewport.height as i32);

        let aspect = match self.viewport.aspect_ratio() {
            Some(aspect) => aspect,
            None => {
                trace!("zero-sized viewport, nothing to draw");
                return;
            }
        };

        self.program.bind();
        self.vertex_buffer.bind();
        self.texture.bind();

        let view = CAMERA.view();
        let model = ANIMATION.model_matrix(seconds);
        // recomputed every frame so a resize never distorts the scene
        let projection = CAMERA.projection(aspect);
        let normal_to_world = normal_matrix(&model);

        let uniforms = &self.uniforms;
        uniforms.set_mat4(device, Semantic::View, &view);
        uniforms.set_mat4(device, Semantic::Model, &model);
        uniforms.set_mat4(device, Semantic::Projection, &projection);
        uniforms.set_mat3(device, Semantic::NormalToWorld, &normal_to_world);

        for (slot, light) in LIGHTS.iter().enumerate() {
            let field = |field| Semantic::Light { slot, field };
            uniforms.set_vec3(device, field(LightField::Position), light.position.as_ref());
            uniforms.set_vec3(device, field(LightField::Ambient), &light.ambient);
            uniforms.set_vec3(device, field(LightField::Diffuse), &light.diffuse);
            uniforms.set_vec3(device, field(LightField::Specular), &light.specular);
        }

        uniforms.set_i32(device, Semantic::MaterialDiffuse, MATERIAL.diffuse_unit);
        uniforms.set_vec3(device, Semantic::MaterialSpecular, &MATERIAL.specular);
        uniforms.set_f32(device, Semantic::MaterialShininess, MATERIAL.shininess);
        uniforms.set_vec3(device, Semantic::ViewPosition, CAMERA.eye.as_ref());

        device.draw_arrays(Primitive::TriangleList, 0, self.vertex_buffer.count as i32);
    }
}
