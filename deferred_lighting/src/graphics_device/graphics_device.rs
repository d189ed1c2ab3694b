/// GraphicsDevice trait - the backend operations the G-Buffer needs
///
/// The trait mirrors the immediate-mode model of the driver: operations act
/// on the currently bound framebuffer and report failures through a sticky
/// error flag queried with `last_error()`. Only handle generation fails
/// eagerly (there is no handle to hand back).

use std::fmt;
use std::num::NonZeroU32;

use crate::error::Result;
use crate::graphics_device::{AttachmentPoint, ClearFlags, ClearValues, TextureDesc};

// ============================================================================
// Handles
// ============================================================================

/// Texture handle issued by a graphics device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub NonZeroU32);

/// Framebuffer handle issued by a graphics device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FramebufferId(pub NonZeroU32);

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "texture#{}", self.0)
    }
}

impl fmt::Display for FramebufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "framebuffer#{}", self.0)
    }
}

// ============================================================================
// GraphicsDevice trait
// ============================================================================

/// Backend graphics device
///
/// Implemented by backend-specific devices (e.g. `GlGraphicsDevice`) and by
/// the test mock. All calls happen on the thread that owns the context.
pub trait GraphicsDevice {
    /// Generate a 2D texture, set its filters and allocate storage (no initial data)
    ///
    /// # Errors
    ///
    /// Returns an error only if no handle could be generated. Storage or
    /// parameter errors are reported through `last_error()`.
    fn create_texture(&mut self, desc: &TextureDesc) -> Result<TextureId>;

    /// Delete a texture
    fn delete_texture(&mut self, texture: TextureId);

    /// Generate a framebuffer and bind it
    ///
    /// # Errors
    ///
    /// Returns an error only if no handle could be generated.
    fn create_framebuffer(&mut self) -> Result<FramebufferId>;

    /// Bind a framebuffer, or the default (window) framebuffer with `None`
    fn bind_framebuffer(&mut self, framebuffer: Option<FramebufferId>);

    /// Attach a texture (mip level 0) to the currently bound framebuffer
    fn attach_texture(&mut self, point: AttachmentPoint, texture: TextureId);

    /// Declare which color attachments the fragment stage writes to
    fn set_draw_buffers(&mut self, buffers: &[AttachmentPoint]);

    /// Raw completeness status code of the currently bound framebuffer
    fn framebuffer_status(&mut self) -> u32;

    /// Delete a framebuffer
    fn delete_framebuffer(&mut self, framebuffer: FramebufferId);

    /// Set the viewport rectangle (origin at 0, 0)
    fn set_viewport(&mut self, width: u32, height: u32);

    /// Clear the selected buffers of the currently bound framebuffer
    fn clear(&mut self, flags: ClearFlags, values: &ClearValues);

    /// Pop the oldest raw error code (0 when no error is pending)
    fn last_error(&mut self) -> u32;
}
