/// Startup configuration of the demo

use std::path::PathBuf;

use glam::Vec4;

use crate::graphics_device::ClearValues;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_TITLE: &str = "Deferred Lighting Demo";
pub const DEFAULT_SHADER_PATH: &str = "shaders/deferred_lighting.glsl";

/// Fixed demo configuration
///
/// The window and the G-Buffer share `width` x `height`; the window is held
/// at that size for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Shader source artifact holding every program
    pub shader_path: PathBuf,
    pub vertex_program: String,
    pub fragment_program: String,
    /// G-Buffer clear: flat normal (0, 0, 1) encoded as (0.5, 0.5, 1.0), no specular
    pub clear_values: ClearValues,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            shader_path: PathBuf::from(DEFAULT_SHADER_PATH),
            vertex_program: "blinn_phong_vtf".to_string(),
            fragment_program: "blinn_phong_ftb".to_string(),
            clear_values: ClearValues {
                color: Vec4::new(0.5, 0.5, 1.0, 0.0),
                depth: 1.0,
            },
        }
    }
}

impl DemoConfig {
    /// Window and G-Buffer size
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
