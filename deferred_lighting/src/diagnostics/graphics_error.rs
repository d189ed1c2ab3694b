/// Graphics-call error channel
///
/// After a state-changing call, the pending error code is popped from the
/// device and classified. Non-`None` kinds are logged tagged with the action
/// that produced them.

use std::fmt;

use crate::error::{Error, Result};
use crate::graphics_device::GraphicsDevice;

/// Raw error codes reported by `GraphicsDevice::last_error()`
pub mod gl_error_codes {
    pub const NO_ERROR: u32 = 0;
    pub const INVALID_ENUM: u32 = 0x0500;
    pub const INVALID_VALUE: u32 = 0x0501;
    pub const INVALID_OPERATION: u32 = 0x0502;
    pub const STACK_OVERFLOW: u32 = 0x0503;
    pub const STACK_UNDERFLOW: u32 = 0x0504;
    pub const OUT_OF_MEMORY: u32 = 0x0505;
}

/// Classified graphics error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphicsErrorKind {
    /// No error pending
    None,
    /// An enumerated argument had an unacceptable value
    InvalidEnum,
    /// The operation is not allowed in the current state
    InvalidOperation,
    /// A stack push overflowed
    StackOverflow,
    /// Any other numeric code
    Other(u32),
}

impl GraphicsErrorKind {
    /// Classify a raw error code
    pub fn from_code(code: u32) -> Self {
        match code {
            gl_error_codes::NO_ERROR => GraphicsErrorKind::None,
            gl_error_codes::INVALID_ENUM => GraphicsErrorKind::InvalidEnum,
            gl_error_codes::INVALID_OPERATION => GraphicsErrorKind::InvalidOperation,
            gl_error_codes::STACK_OVERFLOW => GraphicsErrorKind::StackOverflow,
            other => GraphicsErrorKind::Other(other),
        }
    }

    /// Returns true when no error is pending
    pub fn is_none(&self) -> bool {
        matches!(self, GraphicsErrorKind::None)
    }

    /// Diagnostic line for an action, `None` when there is nothing to report
    pub fn diagnostic(&self, action: &str) -> Option<String> {
        match self {
            GraphicsErrorKind::None => None,
            kind => Some(format!("{} : {}", action, kind)),
        }
    }
}

impl fmt::Display for GraphicsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsErrorKind::None => write!(f, "No error"),
            GraphicsErrorKind::InvalidEnum => {
                write!(f, "An unacceptable value is specified for an enumerated argument")
            }
            GraphicsErrorKind::InvalidOperation => {
                write!(f, "The specified operation is not allowed in the current state")
            }
            GraphicsErrorKind::StackOverflow => write!(f, "Stack Overflow"),
            GraphicsErrorKind::Other(code) => write!(f, "GL error {}", code),
        }
    }
}

/// Pop the pending error of `device` and report it against `action`
///
/// # Errors
///
/// Returns `Error::Graphics` for every kind but `None`. The diagnostic has
/// already been logged when this returns.
pub fn check_graphics_error<D: GraphicsDevice + ?Sized>(
    device: &mut D,
    action: &str,
) -> Result<()> {
    let kind = GraphicsErrorKind::from_code(device.last_error());
    match kind.diagnostic(action) {
        None => Ok(()),
        Some(line) => {
            crate::dl_error!("deferred::Diagnostics", "{}", line);
            Err(Error::Graphics {
                action: action.to_string(),
                kind,
            })
        }
    }
}

#[cfg(test)]
#[path = "graphics_error_tests.rs"]
mod tests;
