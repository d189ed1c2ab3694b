/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Tracks live textures and framebuffers, the bound framebuffer and the
/// order of calls. Errors and completeness codes can be scripted so every
/// diagnostic path of the G-Buffer can be exercised.

use std::collections::VecDeque;
use std::num::NonZeroU32;

use rustc_hash::FxHashMap;

use crate::diagnostics::{framebuffer_status_codes, gl_error_codes};
use crate::dl_bail;
use crate::error::Result;
use crate::graphics_device::{
    AttachmentPoint, ClearFlags, ClearValues, FramebufferId, GraphicsDevice, TextureDesc,
    TextureFormat, TextureId,
};

// ============================================================================
// Mock Framebuffer
// ============================================================================

/// Attachments recorded for a mock framebuffer
#[derive(Debug, Clone, Default)]
pub struct MockFramebuffer {
    pub color_attachments: FxHashMap<u32, TextureId>,
    pub depth_attachment: Option<TextureId>,
    pub draw_buffers: Vec<AttachmentPoint>,
}

/// Error code raised on the n-th invocation of a call
#[derive(Debug, Clone)]
struct InjectedError {
    call: &'static str,
    occurrence: usize,
    code: u32,
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

#[derive(Debug)]
pub struct MockGraphicsDevice {
    next_handle: u32,
    /// Live textures
    pub textures: FxHashMap<TextureId, TextureDesc>,
    /// Live framebuffers
    pub framebuffers: FxHashMap<FramebufferId, MockFramebuffer>,
    /// Currently bound framebuffer (`None` = default framebuffer)
    pub bound_framebuffer: Option<FramebufferId>,
    /// Call log, in order
    pub calls: Vec<String>,
    /// Textures deleted so far
    pub deleted_textures: Vec<TextureId>,
    /// Framebuffers deleted so far
    pub deleted_framebuffers: Vec<FramebufferId>,
    /// Clears issued, with the framebuffer bound at the time
    pub clears: Vec<(Option<FramebufferId>, ClearFlags, ClearValues)>,
    /// Last viewport set
    pub viewport: Option<(u32, u32)>,
    pending_errors: VecDeque<u32>,
    injected_errors: Vec<InjectedError>,
    call_counts: FxHashMap<&'static str, usize>,
    forced_status: Option<u32>,
    handle_generation_fails: bool,
    unsupported_formats: Vec<TextureFormat>,
}

impl MockGraphicsDevice {
    /// Create a new mock device supporting every format
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            textures: FxHashMap::default(),
            framebuffers: FxHashMap::default(),
            bound_framebuffer: None,
            calls: Vec::new(),
            deleted_textures: Vec::new(),
            deleted_framebuffers: Vec::new(),
            clears: Vec::new(),
            viewport: None,
            pending_errors: VecDeque::new(),
            injected_errors: Vec::new(),
            call_counts: FxHashMap::default(),
            forced_status: None,
            handle_generation_fails: false,
            unsupported_formats: Vec::new(),
        }
    }

    /// Raise `code` on the `occurrence`-th call (1-based) named `call`
    pub fn inject_error(&mut self, call: &'static str, occurrence: usize, code: u32) {
        self.injected_errors.push(InjectedError { call, occurrence, code });
    }

    /// Report `code` from every `framebuffer_status()` call
    pub fn force_status(&mut self, code: u32) {
        self.forced_status = Some(code);
    }

    /// Make handle generation fail from now on
    pub fn fail_handle_generation(&mut self) {
        self.handle_generation_fails = true;
    }

    /// Report UNSUPPORTED for framebuffers using `format`
    pub fn mark_unsupported(&mut self, format: TextureFormat) {
        self.unsupported_formats.push(format);
    }

    /// Number of live textures
    pub fn live_texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Number of live framebuffers
    pub fn live_framebuffer_count(&self) -> usize {
        self.framebuffers.len()
    }

    /// Number of times `call` was issued
    pub fn call_count(&self, call: &str) -> usize {
        self.call_counts.get(call).copied().unwrap_or(0)
    }

    fn next_id(&mut self) -> NonZeroU32 {
        let id = NonZeroU32::new(self.next_handle).unwrap();
        self.next_handle += 1;
        id
    }

    fn record(&mut self, call: &'static str, detail: String) {
        self.calls.push(detail);
        let count = self.call_counts.entry(call).or_insert(0);
        *count += 1;
        let count = *count;
        let triggered: Vec<u32> = self
            .injected_errors
            .iter()
            .filter(|e| e.call == call && e.occurrence == count)
            .map(|e| e.code)
            .collect();
        self.pending_errors.extend(triggered);
    }

    fn raise(&mut self, code: u32) {
        self.pending_errors.push_back(code);
    }

    fn computed_status(&self) -> u32 {
        let Some(id) = self.bound_framebuffer else {
            return framebuffer_status_codes::COMPLETE;
        };
        let Some(fb) = self.framebuffers.get(&id) else {
            return framebuffer_status_codes::COMPLETE;
        };

        if fb.color_attachments.is_empty() && fb.depth_attachment.is_none() {
            return framebuffer_status_codes::INCOMPLETE_MISSING_ATTACHMENT;
        }

        let mut attached = Vec::new();
        for texture in fb.color_attachments.values() {
            match self.textures.get(texture) {
                Some(desc) if !desc.format.is_depth() => attached.push(desc),
                _ => return framebuffer_status_codes::INCOMPLETE_ATTACHMENT,
            }
        }
        if let Some(texture) = fb.depth_attachment {
            match self.textures.get(&texture) {
                Some(desc) if desc.format.is_depth() => attached.push(desc),
                _ => return framebuffer_status_codes::INCOMPLETE_ATTACHMENT,
            }
        }

        let (width, height) = (attached[0].width, attached[0].height);
        if attached.iter().any(|d| d.width != width || d.height != height) {
            return framebuffer_status_codes::INCOMPLETE_ATTACHMENT;
        }
        if attached.iter().any(|d| self.unsupported_formats.contains(&d.format)) {
            return framebuffer_status_codes::UNSUPPORTED;
        }
        for buffer in &fb.draw_buffers {
            if let AttachmentPoint::Color(index) = buffer {
                if !fb.color_attachments.contains_key(index) {
                    // INCOMPLETE_DRAW_BUFFER
                    return 0x8CDB;
                }
            }
        }
        framebuffer_status_codes::COMPLETE
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_texture(&mut self, desc: &TextureDesc) -> Result<TextureId> {
        if self.handle_generation_fails {
            dl_bail!("deferred::mock", "create_texture: no texture handle available");
        }
        let id = TextureId(self.next_id());
        self.textures.insert(id, desc.clone());
        self.record(
            "create_texture",
            format!("create_texture({}x{} {:?})", desc.width, desc.height, desc.format),
        );
        Ok(id)
    }

    fn delete_texture(&mut self, texture: TextureId) {
        if self.textures.remove(&texture).is_some() {
            self.deleted_textures.push(texture);
        }
        self.record("delete_texture", format!("delete_texture({})", texture));
    }

    fn create_framebuffer(&mut self) -> Result<FramebufferId> {
        if self.handle_generation_fails {
            dl_bail!("deferred::mock", "create_framebuffer: no framebuffer handle available");
        }
        let id = FramebufferId(self.next_id());
        self.framebuffers.insert(id, MockFramebuffer::default());
        self.bound_framebuffer = Some(id);
        self.record("create_framebuffer", format!("create_framebuffer({})", id));
        Ok(id)
    }

    fn bind_framebuffer(&mut self, framebuffer: Option<FramebufferId>) {
        match framebuffer {
            Some(id) if !self.framebuffers.contains_key(&id) => {
                self.raise(gl_error_codes::INVALID_OPERATION);
            }
            _ => self.bound_framebuffer = framebuffer,
        }
        let detail = match framebuffer {
            Some(id) => format!("bind_framebuffer({})", id),
            None => "bind_framebuffer(default)".to_string(),
        };
        self.record("bind_framebuffer", detail);
    }

    fn attach_texture(&mut self, point: AttachmentPoint, texture: TextureId) {
        let live = self.textures.contains_key(&texture);
        let attached = match self.bound_framebuffer.and_then(|id| self.framebuffers.get_mut(&id)) {
            Some(fb) if live => {
                match point {
                    AttachmentPoint::Color(index) => {
                        fb.color_attachments.insert(index, texture);
                    }
                    AttachmentPoint::Depth => fb.depth_attachment = Some(texture),
                }
                true
            }
            _ => false,
        };
        if !attached {
            self.raise(gl_error_codes::INVALID_OPERATION);
        }
        self.record("attach_texture", format!("attach_texture({:?}, {})", point, texture));
    }

    fn set_draw_buffers(&mut self, buffers: &[AttachmentPoint]) {
        let declared = match self.bound_framebuffer.and_then(|id| self.framebuffers.get_mut(&id)) {
            Some(fb) => {
                fb.draw_buffers = buffers.to_vec();
                true
            }
            None => false,
        };
        if !declared {
            self.raise(gl_error_codes::INVALID_OPERATION);
        }
        self.record("set_draw_buffers", format!("set_draw_buffers({:?})", buffers));
    }

    fn framebuffer_status(&mut self) -> u32 {
        self.record("framebuffer_status", "framebuffer_status".to_string());
        self.forced_status.unwrap_or_else(|| self.computed_status())
    }

    fn delete_framebuffer(&mut self, framebuffer: FramebufferId) {
        if self.framebuffers.remove(&framebuffer).is_some() {
            self.deleted_framebuffers.push(framebuffer);
        }
        if self.bound_framebuffer == Some(framebuffer) {
            self.bound_framebuffer = None;
        }
        self.record("delete_framebuffer", format!("delete_framebuffer({})", framebuffer));
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Some((width, height));
        self.record("set_viewport", format!("set_viewport({}x{})", width, height));
    }

    fn clear(&mut self, flags: ClearFlags, values: &ClearValues) {
        self.clears.push((self.bound_framebuffer, flags, *values));
        self.record("clear", format!("clear({:?})", flags));
    }

    fn last_error(&mut self) -> u32 {
        self.pending_errors.pop_front().unwrap_or(gl_error_codes::NO_ERROR)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
