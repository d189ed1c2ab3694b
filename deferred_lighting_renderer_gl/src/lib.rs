/*!
# Deferred Lighting - OpenGL Backend

OpenGL implementation of the deferred lighting demo.

This crate implements the `deferred_lighting` traits with the glow bindings:
texture and framebuffer management (`GlGraphicsDevice`), GLSL compilation
(`GlShaderCompiler`), and the winit event loop that drives the demo through
a glutin window surface.
*/

mod gl_context;
mod gl_graphics_device;
mod gl_shader_compiler;
mod gl_app;

pub use gl_context::GlWindowContext;
pub use gl_graphics_device::GlGraphicsDevice;
pub use gl_shader_compiler::GlShaderCompiler;
pub use gl_app::{run, GlWindowControl};

/// Backend namespace, mirroring `deferred_lighting::deferred`
pub mod deferred {
    pub use crate::gl_app::{run, GlWindowControl};
    pub use crate::gl_context::GlWindowContext;
    pub use crate::gl_graphics_device::GlGraphicsDevice;
    pub use crate::gl_shader_compiler::GlShaderCompiler;
}
