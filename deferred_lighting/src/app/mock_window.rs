/// Mock WindowControl for unit tests (no windowing system required)

use crate::error::{Error, Result};
use super::WindowControl;

#[derive(Debug, Default)]
pub struct MockWindow {
    pub size: (u32, u32),
    /// Sizes requested through `request_inner_size`
    pub size_requests: Vec<(u32, u32)>,
    pub redraw_requests: usize,
    pub presents: usize,
    pub exits: usize,
    /// When set, `present` fails with this message
    pub present_failure: Option<String>,
}

impl MockWindow {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..Self::default()
        }
    }
}

impl WindowControl for MockWindow {
    fn inner_size(&self) -> (u32, u32) {
        self.size
    }

    fn request_inner_size(&mut self, width: u32, height: u32) {
        self.size_requests.push((width, height));
        self.size = (width, height);
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }

    fn present(&mut self) -> Result<()> {
        if let Some(message) = &self.present_failure {
            return Err(Error::BackendError(message.clone()));
        }
        self.presents += 1;
        Ok(())
    }

    fn exit(&mut self) {
        self.exits += 1;
    }
}
