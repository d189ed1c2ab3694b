/// Framebuffer attachment points and clear parameters
///
/// A framebuffer binds together the color and depth textures a pass renders
/// into. Clearing acts on whichever framebuffer is bound.

use bitflags::bitflags;
use glam::Vec4;

/// Slot of a framebuffer a texture can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentPoint {
    /// Color attachment by index (0 = first color target)
    Color(u32),
    /// Depth attachment
    Depth,
}

bitflags! {
    /// Buffers affected by a clear
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u32 {
        /// Color attachments
        const COLOR = 1 << 0;
        /// Depth attachment
        const DEPTH = 1 << 1;
    }
}

/// Values written by a clear
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearValues {
    /// Color clear value (RGBA)
    pub color: Vec4,
    /// Depth clear value
    pub depth: f32,
}

impl Default for ClearValues {
    fn default() -> Self {
        Self {
            color: Vec4::ZERO,
            depth: 1.0,
        }
    }
}
