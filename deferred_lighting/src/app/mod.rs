//! Demo application layer
//!
//! The window event loop drives one [`FrameHandler`]; the backend supplies
//! a [`WindowControl`] for the window being driven.

mod config;
mod key;
mod frame_handler;
mod demo;

pub use config::{DemoConfig, DEFAULT_HEIGHT, DEFAULT_SHADER_PATH, DEFAULT_TITLE, DEFAULT_WIDTH};
pub use key::Key;
pub use frame_handler::{FrameHandler, WindowControl};
pub use demo::DeferredLightingDemo;

// Mock window for tests (no windowing system required)
#[cfg(test)]
pub mod mock_window;
