use thiserror::Error;

use super::device::ShaderStage;

#[derive(Debug, Error)]
pub enum HalError {
    #[error("{stage} shader compilation failed!\n{log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("shader program linking failed!\n{log}")]
    ProgramLink { log: String },
    #[error("{stage} shader source contains a NUL byte")]
    InvalidSource { stage: ShaderStage },
    #[error("cannot create {0}")]
    ObjectCreation(&'static str),
}
