/*!
# Deferred Lighting

Core traits and types for the deferred lighting G-Buffer demo.

This crate owns the backend-agnostic part of the demo: the G-Buffer
(render target) lifecycle, the diagnostic channels that classify graphics
errors and framebuffer completeness, the shader program setup sequence and
the frame handler driven by the window event loop. Graphics backends
(OpenGL, ...) implement the [`GraphicsDevice`](graphics_device::GraphicsDevice)
and [`ShaderCompiler`](shading::ShaderCompiler) traits.

## Architecture

- **GraphicsDevice**: low-level texture/framebuffer operations of a backend
- **RenderTargetManager**: creation, validation and release of the G-Buffer
- **ShaderCompiler / ShaderSetup**: loading the vertex and fragment programs
- **FrameHandler**: `on_resize`, `on_tick`, `on_key`, `on_draw` callbacks
- **DeferredLightingDemo**: the one handler composed at startup
*/

// Internal modules
mod error;
pub mod log;
pub mod graphics_device;
pub mod diagnostics;
pub mod gbuffer;
pub mod shading;
pub mod app;

// Main deferred namespace module
pub mod deferred {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and logger control)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger,
        };
    }

    // Render sub-module: device, diagnostics and G-Buffer types
    pub mod render {
        pub use crate::graphics_device::*;
        pub use crate::diagnostics::*;
        pub use crate::gbuffer::*;
    }

    // Shading sub-module
    pub mod shading {
        pub use crate::shading::*;
    }

    // Application sub-module
    pub mod app {
        pub use crate::app::*;
    }
}

// Re-export math library at crate root
pub use glam;
