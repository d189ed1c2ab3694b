/// Event loop callbacks and the window services they may use

use crate::error::Result;
use super::Key;

/// Window services offered to a frame handler during a callback
pub trait WindowControl {
    /// Current client area size
    fn inner_size(&self) -> (u32, u32);

    /// Ask the windowing system for a new client area size
    fn request_inner_size(&mut self, width: u32, height: u32);

    /// Schedule a draw callback
    fn request_redraw(&mut self);

    /// Swap buffers, showing the default framebuffer
    fn present(&mut self) -> Result<()>;

    /// Leave the event loop once the current callback returns
    fn exit(&mut self);
}

/// Callbacks invoked by the window event loop, all on the main thread
pub trait FrameHandler {
    /// The window was resized to `width` x `height`
    fn on_resize(&mut self, window: &mut dyn WindowControl, width: u32, height: u32);

    /// The loop is idle
    fn on_tick(&mut self, window: &mut dyn WindowControl);

    /// A key was pressed
    fn on_key(&mut self, window: &mut dyn WindowControl, key: Key);

    /// The window needs to be redrawn
    fn on_draw(&mut self, window: &mut dyn WindowControl) -> Result<()>;
}
