/// Render target manager - owns the G-Buffer through its whole lifecycle
///
/// Creation allocates the normal/specular and depth textures, binds them
/// to a fresh framebuffer, declares the single color draw buffer and then
/// validates completeness. Every step is checked; on the first failure all
/// handles created so far are deleted and the manager goes back to
/// `Uninitialized`, so callers never observe a half-built target.

use crate::diagnostics::{check_framebuffer_status, check_graphics_error, FramebufferStatus};
use crate::error::{Error, Result};
use crate::graphics_device::{AttachmentPoint, ClearFlags, ClearValues, GraphicsDevice};
use super::g_buffer::{actions, GBuffer, PartialGBuffer, NORMAL_SPECULAR_ATTACHMENT};
use super::RenderTargetState;

const SOURCE: &str = "deferred::RenderTargetManager";

/// Owner of the G-Buffer render target
#[derive(Debug)]
pub struct RenderTargetManager {
    state: RenderTargetState,
    gbuffer: Option<GBuffer>,
}

impl Default for RenderTargetManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTargetManager {
    /// Create a manager in the `Uninitialized` state
    pub fn new() -> Self {
        Self {
            state: RenderTargetState::Uninitialized,
            gbuffer: None,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> RenderTargetState {
        self.state
    }

    /// G-Buffer handles, while they are owned
    pub fn gbuffer(&self) -> Option<&GBuffer> {
        self.gbuffer.as_ref()
    }

    /// Returns true once the G-Buffer is complete
    pub fn is_ready(&self) -> bool {
        self.state == RenderTargetState::Validated
    }

    /// Allocate, attach and validate the G-Buffer
    ///
    /// # Errors
    ///
    /// - `Error::InvalidState` unless the manager is `Uninitialized`
    /// - `Error::InvalidResource` for a zero width or height
    /// - `Error::BackendError` if the device cannot generate a handle
    /// - `Error::Graphics` if a creation step leaves an error pending
    /// - `Error::IncompleteFramebuffer` if the result is not complete
    ///
    /// On error every resource created by this call has been deleted and the
    /// manager is `Uninitialized` again.
    pub fn create<D: GraphicsDevice + ?Sized>(
        &mut self,
        device: &mut D,
        width: u32,
        height: u32,
    ) -> Result<()> {
        if self.state != RenderTargetState::Uninitialized {
            return Err(self.reject("create"));
        }
        if width == 0 || height == 0 {
            crate::dl_error!(SOURCE, "G-Buffer size must be positive, got {}x{}", width, height);
            return Err(Error::InvalidResource(format!(
                "G-Buffer size must be positive, got {}x{}",
                width, height
            )));
        }

        self.state = RenderTargetState::Allocating;
        let mut partial = PartialGBuffer::default();
        match Self::allocate(device, &mut partial, width, height) {
            Ok(gbuffer) => {
                self.gbuffer = Some(gbuffer);
                self.state = RenderTargetState::Attached;
            }
            Err(err) => {
                partial.unwind(device);
                self.state = RenderTargetState::Uninitialized;
                crate::dl_warn!(SOURCE, "G-Buffer creation unwound: {}", err);
                return Err(err);
            }
        }

        let status = self.validate(device)?;
        if !status.is_complete() {
            if let Some(gbuffer) = self.gbuffer.take() {
                gbuffer.destroy(device);
            }
            self.state = RenderTargetState::Uninitialized;
            crate::dl_warn!(SOURCE, "G-Buffer creation unwound: {}", status);
            return Err(Error::IncompleteFramebuffer(status));
        }

        crate::dl_info!(SOURCE, "G-Buffer created ({}x{})", width, height);
        Ok(())
    }

    fn allocate<D: GraphicsDevice + ?Sized>(
        device: &mut D,
        partial: &mut PartialGBuffer,
        width: u32,
        height: u32,
    ) -> Result<GBuffer> {
        let normal_specular = device.create_texture(&GBuffer::normal_specular_desc(width, height))?;
        partial.normal_specular = Some(normal_specular);
        check_graphics_error(device, actions::CREATE_COLOR)?;

        let depth = device.create_texture(&GBuffer::depth_desc(width, height))?;
        partial.depth = Some(depth);
        check_graphics_error(device, actions::CREATE_DEPTH)?;

        let framebuffer = device.create_framebuffer()?;
        partial.framebuffer = Some(framebuffer);
        check_graphics_error(device, actions::CREATE_FRAMEBUFFER)?;

        device.attach_texture(NORMAL_SPECULAR_ATTACHMENT, normal_specular);
        check_graphics_error(device, actions::ATTACH_COLOR)?;

        device.attach_texture(AttachmentPoint::Depth, depth);
        check_graphics_error(device, actions::ATTACH_DEPTH)?;

        device.set_draw_buffers(&GBuffer::draw_buffers());
        check_graphics_error(device, actions::DRAW_BUFFERS)?;

        partial
            .complete(width, height)
            .ok_or_else(|| {
                Error::InvalidResource("G-Buffer handles missing after allocation".to_string())
            })
    }

    /// Check completeness of the G-Buffer framebuffer
    ///
    /// Binds the framebuffer for the query and restores the default
    /// framebuffer afterwards. A complete result moves the manager to
    /// `Validated`; any other result is logged and leaves it `Attached`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidState` when no G-Buffer is owned (before `create` or
    /// after `release`).
    pub fn validate<D: GraphicsDevice + ?Sized>(
        &mut self,
        device: &mut D,
    ) -> Result<FramebufferStatus> {
        let framebuffer = match &self.gbuffer {
            Some(gbuffer) if self.state.owns_resources() => gbuffer.framebuffer,
            _ => return Err(self.reject("validate")),
        };

        device.bind_framebuffer(Some(framebuffer));
        let status = check_framebuffer_status(device);
        device.bind_framebuffer(None);

        self.state = if status.is_complete() {
            RenderTargetState::Validated
        } else {
            RenderTargetState::Attached
        };
        Ok(status)
    }

    /// Free the framebuffer and both textures
    ///
    /// # Errors
    ///
    /// `Error::InvalidState` when no G-Buffer is owned. Nothing is deleted
    /// in that case.
    pub fn release<D: GraphicsDevice + ?Sized>(&mut self, device: &mut D) -> Result<()> {
        if !self.state.owns_resources() {
            return Err(self.reject("release"));
        }
        if let Some(gbuffer) = self.gbuffer.take() {
            gbuffer.destroy(device);
        }
        self.state = RenderTargetState::Released;
        crate::dl_info!(SOURCE, "G-Buffer released");
        Ok(())
    }

    /// Bind the G-Buffer, set the viewport and clear color and depth
    ///
    /// # Errors
    ///
    /// `Error::InvalidState` unless the G-Buffer is `Validated`.
    pub fn begin_geometry_pass<D: GraphicsDevice + ?Sized>(
        &self,
        device: &mut D,
        clear: &ClearValues,
    ) -> Result<()> {
        let gbuffer = match &self.gbuffer {
            Some(gbuffer) if self.is_ready() => gbuffer,
            _ => return Err(self.reject("bind")),
        };
        device.bind_framebuffer(Some(gbuffer.framebuffer));
        device.set_viewport(gbuffer.width, gbuffer.height);
        device.clear(ClearFlags::COLOR | ClearFlags::DEPTH, clear);
        Ok(())
    }

    /// Restore the default framebuffer
    pub fn end_geometry_pass<D: GraphicsDevice + ?Sized>(&self, device: &mut D) {
        device.bind_framebuffer(None);
    }

    fn reject(&self, operation: &'static str) -> Error {
        crate::dl_error!(SOURCE, "Cannot {} a render target that is {}", operation, self.state);
        Error::InvalidState {
            operation,
            state: self.state,
        }
    }
}

#[cfg(test)]
#[path = "render_target_manager_tests.rs"]
mod tests;
