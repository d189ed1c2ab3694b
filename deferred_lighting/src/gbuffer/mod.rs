//! G-Buffer management module
//!
//! The G-Buffer is the off-screen render target of the geometry pass: a
//! packed normal/specular color texture and a depth texture bound together
//! by one framebuffer.

mod render_target_state;
mod g_buffer;
mod render_target_manager;

pub use render_target_state::RenderTargetState;
pub use g_buffer::{GBuffer, actions};
pub use render_target_manager::RenderTargetManager;
