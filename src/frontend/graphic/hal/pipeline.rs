use std::rc::Rc;

use tracing::{debug, warn};

use super::{
    shader_module::{bounded_log, ShaderModuleState},
    Device,
    HalError,
    ShaderStage,
};

/// A linked and validated shader program.
///
/// The stages only live while linking, afterwards the program is all that
/// is kept.
pub struct ProgramState<D: Device> {
    device: Rc<D>,
    pub program: Option<D::Program>,
}

impl<D: Device> ProgramState<D> {
    pub fn new(
        device: Rc<D>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<ProgramState<D>, HalError> {
        let vertex_module = ShaderModuleState::new(device.clone(), ShaderStage::Vertex, vertex_source)?;
        let fragment_module = ShaderModuleState::new(device.clone(), ShaderStage::Fragment, fragment_source)?;

        let program = device.create_program()?;
        let state = ProgramState {
            device,
            program: Some(program),
        };

        let stages: Vec<D::Shader> = [vertex_module.module, fragment_module.module]
            .iter()
            .flatten()
            .copied()
            .collect();
        for &shader in &stages {
            state.device.attach_shader(program, shader);
        }
        state.device.link_program(program);
        let linked = state.device.program_link_status(program);

        // stages are released whether linking worked or not
        for &shader in &stages {
            state.device.detach_shader(program, shader);
        }
        drop(vertex_module);
        drop(fragment_module);

        if !linked {
            let log = bounded_log(state.device.program_info_log(program));
            return Err(HalError::ProgramLink { log });
        }

        state.device.validate_program(program);
        if !state.device.program_validate_status(program) {
            warn!(
                "shader program validation failed: {}",
                bounded_log(state.device.program_info_log(program))
            );
        }
        debug!("shader program linked");
        Ok(state)
    }

    pub fn bind(&self) {
        self.device.use_program(self.program);
    }
}

impl<D: Device> Drop for ProgramState<D> {
    fn drop(&mut self) {
        if let Some(program) = self.program.take() {
            self.device.use_program(None);
            self.device.delete_program(program);
        }
    }
}
