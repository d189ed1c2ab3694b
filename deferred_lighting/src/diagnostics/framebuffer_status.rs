/// Framebuffer completeness channel

use std::fmt;

use crate::graphics_device::GraphicsDevice;

/// Raw completeness codes reported by `GraphicsDevice::framebuffer_status()`
pub mod framebuffer_status_codes {
    pub const COMPLETE: u32 = 0x8CD5;
    pub const INCOMPLETE_ATTACHMENT: u32 = 0x8CD6;
    pub const INCOMPLETE_MISSING_ATTACHMENT: u32 = 0x8CD7;
    pub const UNSUPPORTED: u32 = 0x8CDD;
}

/// Classified framebuffer completeness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramebufferStatus {
    /// Attachments form a usable combination
    Complete,
    /// The combination of formats is not supported by the backend
    Unsupported,
    /// An attachment is not attachment-complete
    IncompleteAttachment,
    /// No image is attached at all
    IncompleteMissingAttachment,
    /// Any other numeric code
    Other(u32),
}

impl FramebufferStatus {
    /// Classify a raw status code
    pub fn from_code(code: u32) -> Self {
        use framebuffer_status_codes::*;
        match code {
            COMPLETE => FramebufferStatus::Complete,
            UNSUPPORTED => FramebufferStatus::Unsupported,
            INCOMPLETE_ATTACHMENT => FramebufferStatus::IncompleteAttachment,
            INCOMPLETE_MISSING_ATTACHMENT => FramebufferStatus::IncompleteMissingAttachment,
            other => FramebufferStatus::Other(other),
        }
    }

    /// Returns true for `Complete`
    pub fn is_complete(&self) -> bool {
        matches!(self, FramebufferStatus::Complete)
    }

    /// Diagnostic line, `None` when the framebuffer is complete
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            FramebufferStatus::Complete => None,
            status => Some(status.to_string()),
        }
    }
}

impl fmt::Display for FramebufferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramebufferStatus::Complete => write!(f, "Framebuffer complete"),
            FramebufferStatus::Unsupported => {
                write!(f, "FBO Error : Framebuffer configuration not supported")
            }
            FramebufferStatus::IncompleteAttachment => {
                write!(f, "FBO Error : Incomplete attachment")
            }
            FramebufferStatus::IncompleteMissingAttachment => {
                write!(f, "FBO Error : Incomplete missing attachment")
            }
            FramebufferStatus::Other(code) => write!(f, "FBO Error : {}", code),
        }
    }
}

/// Query and classify the completeness of the bound framebuffer
///
/// Non-complete outcomes are logged; none of them is fatal here.
pub fn check_framebuffer_status<D: GraphicsDevice + ?Sized>(device: &mut D) -> FramebufferStatus {
    let status = FramebufferStatus::from_code(device.framebuffer_status());
    if let Some(line) = status.diagnostic() {
        crate::dl_error!("deferred::Diagnostics", "{}", line);
    }
    status
}

#[cfg(test)]
#[path = "framebuffer_status_tests.rs"]
mod tests;
