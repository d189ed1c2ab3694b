//! Error types for the deferred lighting demo
//!
//! Every diagnostic channel (graphics calls, framebuffer completeness,
//! shader compilation) reports through this enum so callers decide whether
//! to continue, abort or retry.

use std::fmt;
use crate::diagnostics::{FramebufferStatus, GraphicsErrorKind};
use crate::gbuffer::RenderTargetState;
use crate::shading::ShaderError;

/// Result type for deferred lighting operations
pub type Result<T> = std::result::Result<T, Error>;

/// Deferred lighting errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-specific error (OpenGL, windowing, etc.)
    BackendError(String),

    /// Invalid resource request (zero-sized texture, unknown handle, etc.)
    InvalidResource(String),

    /// Initialization failed (window, context, subsystems)
    InitializationFailed(String),

    /// Operation not allowed in the current render target state
    InvalidState {
        /// Rejected operation (e.g. "validate")
        operation: &'static str,
        /// State the render target was in
        state: RenderTargetState,
    },

    /// A graphics call left an error flag set
    Graphics {
        /// Action that produced the error (e.g. "Attach G-Buffer texture RGBA")
        action: String,
        /// Classified error code
        kind: GraphicsErrorKind,
    },

    /// The framebuffer is not complete
    IncompleteFramebuffer(FramebufferStatus),

    /// Shader profile selection, compilation or loading failed
    Shader(ShaderError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidState { operation, state } => {
                write!(f, "Invalid state: cannot {} a render target that is {}", operation, state)
            }
            Error::Graphics { action, kind } => write!(f, "{} : {}", action, kind),
            Error::IncompleteFramebuffer(status) => write!(f, "{}", status),
            Error::Shader(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<ShaderError> for Error {
    fn from(err: ShaderError) -> Self {
        Error::Shader(err)
    }
}

/// Log an ERROR message and return `Err(Error::BackendError(..))`
///
/// # Example
///
/// ```no_run
/// # use deferred_lighting::dl_bail;
/// fn check(id: u32) -> deferred_lighting::deferred::Result<()> {
///     if id == 0 {
///         dl_bail!("deferred::mock", "handle generation returned {}", id);
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! dl_bail {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::dl_error!($source, "{}", message);
        return Err($crate::deferred::Error::BackendError(message));
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
