/// Lifecycle state of the G-Buffer render target

use std::fmt;

/// Render target lifecycle
///
/// `Uninitialized -> Allocating -> Attached -> Validated -> Released`, with
/// `Allocating -> Uninitialized` (and `Attached -> Uninitialized`) taken
/// when creation fails and every partially created resource is unwound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTargetState {
    /// Nothing allocated
    Uninitialized,
    /// Textures and framebuffer being created
    Allocating,
    /// Both textures attached, completeness not yet confirmed
    Attached,
    /// Complete and ready to be rendered to and sampled from
    Validated,
    /// Resources freed; terminal
    Released,
}

impl RenderTargetState {
    /// Returns true while device resources are owned
    pub fn owns_resources(&self) -> bool {
        matches!(self, RenderTargetState::Attached | RenderTargetState::Validated)
    }
}

impl fmt::Display for RenderTargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RenderTargetState::Uninitialized => "uninitialized",
            RenderTargetState::Allocating => "allocating",
            RenderTargetState::Attached => "attached",
            RenderTargetState::Validated => "validated",
            RenderTargetState::Released => "released",
        };
        f.write_str(name)
    }
}
