//! Shading pipeline
//!
//! Loads the vertex and fragment programs by name from the shader source
//! artifact, compiles them for the best profile the backend offers and
//! reports failures (with the compiler listing) on the shader channel.

mod shader_error;
mod shader_source;
mod shader_compiler;
mod shader_setup;

pub use shader_error::{ShaderError, ShaderErrorKind, ShaderResult};
pub use shader_source::{ShaderSource, PROGRAM_MARKER};
pub use shader_compiler::{ProgramId, ShaderCompiler, ShaderProfile, ShaderStage};
pub use shader_setup::{
    report_shader_error, situations, Acknowledge, PressEnterToContinue, ShaderPrograms, ShaderSetup,
};

// Mock shader compiler for tests (no GPU required)
#[cfg(test)]
pub mod mock_shader_compiler;
