/// GraphicsDevice - OpenGL implementation
///
/// Every method issues raw GL calls on the context shared with the shader
/// compiler. The context must be current on the calling thread; errors are
/// left on the GL error flag for `last_error()` to collect.

use std::rc::Rc;

use deferred_lighting::deferred::render::{
    AttachmentPoint, ClearFlags, ClearValues, FramebufferId, GraphicsDevice, TextureDesc,
    TextureFilter, TextureFormat, TextureId,
};
use deferred_lighting::deferred::Result;
use deferred_lighting::dl_bail;
use glow::HasContext;

const SOURCE: &str = "deferred::gl::Device";

/// OpenGL graphics device
pub struct GlGraphicsDevice {
    gl: Rc<glow::Context>,
}

impl GlGraphicsDevice {
    /// Wrap a context that is current on this thread
    pub fn new(gl: Rc<glow::Context>) -> Self {
        Self { gl }
    }
}

/// (internal format, upload format, upload type) of a texture format
pub(crate) fn texture_format_to_gl(format: TextureFormat) -> (i32, u32, u32) {
    match format {
        TextureFormat::R8G8B8A8_UNORM => (glow::RGBA8 as i32, glow::RGBA, glow::UNSIGNED_BYTE),
        TextureFormat::D24_UNORM => {
            (glow::DEPTH_COMPONENT24 as i32, glow::DEPTH_COMPONENT, glow::FLOAT)
        }
    }
}

pub(crate) fn texture_filter_to_gl(filter: TextureFilter) -> i32 {
    match filter {
        TextureFilter::Nearest => glow::NEAREST as i32,
    }
}

pub(crate) fn attachment_to_gl(point: AttachmentPoint) -> u32 {
    match point {
        AttachmentPoint::Color(index) => glow::COLOR_ATTACHMENT0 + index,
        AttachmentPoint::Depth => glow::DEPTH_ATTACHMENT,
    }
}

pub(crate) fn clear_flags_to_gl(flags: ClearFlags) -> u32 {
    let mut mask = 0;
    if flags.contains(ClearFlags::COLOR) {
        mask |= glow::COLOR_BUFFER_BIT;
    }
    if flags.contains(ClearFlags::DEPTH) {
        mask |= glow::DEPTH_BUFFER_BIT;
    }
    mask
}

impl GraphicsDevice for GlGraphicsDevice {
    fn create_texture(&mut self, desc: &TextureDesc) -> Result<TextureId> {
        let (internal_format, format, ty) = texture_format_to_gl(desc.format);
        unsafe {
            let texture = match self.gl.create_texture() {
                Ok(texture) => texture,
                Err(err) => dl_bail!(SOURCE, "glGenTextures failed: {}", err),
            };
            self.gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            self.gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                texture_filter_to_gl(desc.min_filter),
            );
            self.gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                texture_filter_to_gl(desc.mag_filter),
            );
            self.gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                internal_format,
                desc.width as i32,
                desc.height as i32,
                0,
                format,
                ty,
                None,
            );
            self.gl.bind_texture(glow::TEXTURE_2D, None);
            Ok(TextureId(texture.0))
        }
    }

    fn delete_texture(&mut self, texture: TextureId) {
        unsafe { self.gl.delete_texture(glow::NativeTexture(texture.0)) }
    }

    fn create_framebuffer(&mut self) -> Result<FramebufferId> {
        unsafe {
            let framebuffer = match self.gl.create_framebuffer() {
                Ok(framebuffer) => framebuffer,
                Err(err) => dl_bail!(SOURCE, "glGenFramebuffers failed: {}", err),
            };
            self.gl.bind_framebuffer(glow::FRAMEBUFFER, Some(framebuffer));
            Ok(FramebufferId(framebuffer.0))
        }
    }

    fn bind_framebuffer(&mut self, framebuffer: Option<FramebufferId>) {
        unsafe {
            self.gl
                .bind_framebuffer(
                    glow::FRAMEBUFFER,
                    framebuffer.map(|id| glow::NativeFramebuffer(id.0)),
                );
        }
    }

    fn attach_texture(&mut self, point: AttachmentPoint, texture: TextureId) {
        unsafe {
            self.gl.framebuffer_texture_2d(
                glow::FRAMEBUFFER,
                attachment_to_gl(point),
                glow::TEXTURE_2D,
                Some(glow::NativeTexture(texture.0)),
                0,
            );
        }
    }

    fn set_draw_buffers(&mut self, buffers: &[AttachmentPoint]) {
        let buffers: Vec<u32> = buffers.iter().copied().map(attachment_to_gl).collect();
        unsafe { self.gl.draw_buffers(&buffers) }
    }

    fn framebuffer_status(&mut self) -> u32 {
        unsafe { self.gl.check_framebuffer_status(glow::FRAMEBUFFER) }
    }

    fn delete_framebuffer(&mut self, framebuffer: FramebufferId) {
        unsafe { self.gl.delete_framebuffer(glow::NativeFramebuffer(framebuffer.0)) }
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        unsafe { self.gl.viewport(0, 0, width as i32, height as i32) }
    }

    fn clear(&mut self, flags: ClearFlags, values: &ClearValues) {
        unsafe {
            if flags.contains(ClearFlags::COLOR) {
                let c = values.color;
                self.gl.clear_color(c.x, c.y, c.z, c.w);
            }
            if flags.contains(ClearFlags::DEPTH) {
                self.gl.clear_depth_f32(values.depth);
            }
            self.gl.clear(clear_flags_to_gl(flags));
        }
    }

    fn last_error(&mut self) -> u32 {
        unsafe { self.gl.get_error() }
    }
}

#[cfg(test)]
#[path = "gl_format_tests.rs"]
mod tests;
