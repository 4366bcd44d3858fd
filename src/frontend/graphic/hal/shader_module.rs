use std::rc::Rc;

use tracing::debug;

use super::{Device, HalError, ShaderStage};
use crate::frontend::graphic::constants::INFO_LOG_CAPACITY;

/// One compiled shader stage, deleted again on drop.
pub struct ShaderModuleState<D: Device> {
    device: Rc<D>,
    pub stage: ShaderStage,
    pub module: Option<D::Shader>,
}

impl<D: Device> ShaderModuleState<D> {
    pub fn new(
        device: Rc<D>,
        stage: ShaderStage,
        source: &str,
    ) -> Result<ShaderModuleState<D>, HalError> {
        let module = device.create_shader(stage)?;
        // from here on Drop releases the shader object on every error path
        let state = ShaderModuleState {
            device,
            stage,
            module: Some(module),
        };

        state.device.shader_source(module, stage, source)?;
        state.device.compile_shader(module);
        if !state.device.shader_compile_status(module) {
            let log = bounded_log(state.device.shader_info_log(module));
            return Err(HalError::ShaderCompile { stage, log });
        }
        debug!("{} shader compiled", stage);
        Ok(state)
    }
}

impl<D: Device> Drop for ShaderModuleState<D> {
    fn drop(&mut self) {
        if let Some(module) = self.module.take() {
            self.device.delete_shader(module);
        }
    }
}

/// Cuts a driver log down to [`INFO_LOG_CAPACITY`] bytes on a char boundary.
pub fn bounded_log(mut log: String) -> String {
    if log.len() > INFO_LOG_CAPACITY {
        let mut end = INFO_LOG_CAPACITY;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }
    log
}
