/// GBuffer - handles of a fully constructed G-Buffer
///
/// A `GBuffer` value only exists once both textures are created and
/// attached. It is owned by `RenderTargetManager`, which is the only place
/// that creates or frees the handles.

use crate::graphics_device::{
    AttachmentPoint, FramebufferId, GraphicsDevice, TextureDesc, TextureFormat, TextureId,
};

/// Action tags reported with graphics errors during G-Buffer creation
pub mod actions {
    pub const CREATE_COLOR: &str = "Generating G-Buffer texture RGBA";
    pub const CREATE_DEPTH: &str = "Generating G-Buffer texture DEPTH";
    pub const CREATE_FRAMEBUFFER: &str = "Generating frame buffer object";
    pub const ATTACH_COLOR: &str = "Attach G-Buffer texture RGBA";
    pub const ATTACH_DEPTH: &str = "Attach G-Buffer texture Depth";
    pub const DRAW_BUFFERS: &str = "Enable drawing to attachments";
}

/// Color slot holding view-space normal (RGB) and specular intensity (A)
pub const NORMAL_SPECULAR_ATTACHMENT: AttachmentPoint = AttachmentPoint::Color(0);

/// G-Buffer handles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GBuffer {
    pub(crate) normal_specular: TextureId,
    pub(crate) depth: TextureId,
    pub(crate) framebuffer: FramebufferId,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl GBuffer {
    /// Descriptor of the normal/specular texture
    pub fn normal_specular_desc(width: u32, height: u32) -> TextureDesc {
        TextureDesc::nearest(width, height, TextureFormat::R8G8B8A8_UNORM)
    }

    /// Descriptor of the depth texture
    pub fn depth_desc(width: u32, height: u32) -> TextureDesc {
        TextureDesc::nearest(width, height, TextureFormat::D24_UNORM)
    }

    /// Draw buffers enabled during the geometry pass
    pub fn draw_buffers() -> [AttachmentPoint; 1] {
        [NORMAL_SPECULAR_ATTACHMENT]
    }

    /// Normal/specular texture (sampled by the lighting pass)
    pub fn normal_specular(&self) -> TextureId {
        self.normal_specular
    }

    /// Depth texture (sampled by the lighting pass)
    pub fn depth(&self) -> TextureId {
        self.depth
    }

    /// Framebuffer binding both textures
    pub fn framebuffer(&self) -> FramebufferId {
        self.framebuffer
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Delete the framebuffer, then both textures
    pub(crate) fn destroy<D: GraphicsDevice + ?Sized>(self, device: &mut D) {
        device.delete_framebuffer(self.framebuffer);
        device.delete_texture(self.normal_specular);
        device.delete_texture(self.depth);
    }
}

/// Handles created so far by an in-progress G-Buffer creation
#[derive(Debug, Default)]
pub(crate) struct PartialGBuffer {
    pub(crate) normal_specular: Option<TextureId>,
    pub(crate) depth: Option<TextureId>,
    pub(crate) framebuffer: Option<FramebufferId>,
}

impl PartialGBuffer {
    /// Take the handles once every one of them exists
    pub(crate) fn complete(&mut self, width: u32, height: u32) -> Option<GBuffer> {
        match (self.normal_specular, self.depth, self.framebuffer) {
            (Some(normal_specular), Some(depth), Some(framebuffer)) => {
                *self = PartialGBuffer::default();
                Some(GBuffer {
                    normal_specular,
                    depth,
                    framebuffer,
                    width,
                    height,
                })
            }
            _ => None,
        }
    }

    /// Free whatever was created and restore the default framebuffer
    pub(crate) fn unwind<D: GraphicsDevice + ?Sized>(self, device: &mut D) {
        if let Some(framebuffer) = self.framebuffer {
            device.bind_framebuffer(None);
            device.delete_framebuffer(framebuffer);
        }
        if let Some(texture) = self.normal_specular {
            device.delete_texture(texture);
        }
        if let Some(texture) = self.depth {
            device.delete_texture(texture);
        }
    }
}
