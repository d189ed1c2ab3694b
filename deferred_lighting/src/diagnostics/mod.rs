//! Diagnostic channels
//!
//! Classifies raw graphics error codes and framebuffer completeness codes
//! into stable, distinct diagnostics. Each check logs the diagnostic and
//! hands the classified value back to the caller.

mod graphics_error;
mod framebuffer_status;

pub use graphics_error::{GraphicsErrorKind, check_graphics_error, gl_error_codes};
pub use framebuffer_status::{FramebufferStatus, check_framebuffer_status, framebuffer_status_codes};
