/// Window, GL context and window surface creation
///
/// Asks for an RGBA8 config with a 24 bit depth buffer and a desktop GL
/// context. WGL needs the window before the config; everywhere else the
/// window is created for the chosen config.

use std::num::NonZeroU32;
use std::rc::Rc;

use deferred_lighting::deferred::app::DemoConfig;
use deferred_lighting::deferred::{Error, Result};
use glow::HasContext;
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextAttributesBuilder, PossiblyCurrentContext};
use glutin::display::{Display, DisplayApiPreference};
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::GlWindow;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use winit::dpi::PhysicalSize;
use winit::error::OsError;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes};

const SOURCE: &str = "deferred::gl::Context";

/// Event loops a window can be created on
///
/// Stands in for `glutin_winit::GlutinEventLoop`, which glutin-winit 0.5
/// does not export.
pub trait WindowEventLoop: HasDisplayHandle {
    fn create_window(&self, attributes: WindowAttributes) -> std::result::Result<Window, OsError>;
    fn finalize_window(
        &self,
        attributes: WindowAttributes,
        gl_config: &glutin::config::Config,
    ) -> std::result::Result<Window, OsError>;
}

impl WindowEventLoop for ActiveEventLoop {
    fn create_window(&self, attributes: WindowAttributes) -> std::result::Result<Window, OsError> {
        ActiveEventLoop::create_window(self, attributes)
    }

    fn finalize_window(
        &self,
        attributes: WindowAttributes,
        gl_config: &glutin::config::Config,
    ) -> std::result::Result<Window, OsError> {
        glutin_winit::finalize_window(self, attributes, gl_config)
    }
}

impl<T> WindowEventLoop for EventLoop<T> {
    #[allow(deprecated)]
    fn create_window(&self, attributes: WindowAttributes) -> std::result::Result<Window, OsError> {
        EventLoop::create_window(self, attributes)
    }

    fn finalize_window(
        &self,
        attributes: WindowAttributes,
        gl_config: &glutin::config::Config,
    ) -> std::result::Result<Window, OsError> {
        glutin_winit::finalize_window(self, attributes, gl_config)
    }
}

/// A window with a current GL context and its window surface
///
/// Fields drop in order: GL bindings, surface, context, window.
pub struct GlWindowContext {
    pub gl: Rc<glow::Context>,
    pub surface: Surface<WindowSurface>,
    pub context: PossiblyCurrentContext,
    pub window: Window,
}

impl GlWindowContext {
    /// Window attributes for the demo window
    pub fn window_attributes(config: &DemoConfig) -> WindowAttributes {
        Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(config.width, config.height))
    }

    /// Create the window and make its context current
    ///
    /// # Errors
    ///
    /// `Error::InitializationFailed` if no suitable config, context or
    /// surface can be created.
    pub fn create<E: WindowEventLoop>(
        event_loop: &E,
        attributes: WindowAttributes,
    ) -> Result<Self> {
        let raw_display = event_loop
            .display_handle()
            .map_err(|err| init_failed(format!("no display handle: {}", err)))?
            .as_raw();
        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_depth_size(24);

        #[cfg(windows)]
        let (gl_display, template, early_window) = {
            let window = event_loop
                .create_window(attributes.clone())
                .map_err(|err| init_failed(format!("window creation failed: {}", err)))?;
            let raw_window = window
                .window_handle()
                .map_err(|err| init_failed(format!("no window handle: {}", err)))?
                .as_raw();
            let preference = DisplayApiPreference::Wgl(Some(raw_window));
            let gl_display = unsafe { Display::new(raw_display, preference) }
                .map_err(|err| init_failed(format!("GL display creation failed: {}", err)))?;
            (gl_display, template.compatible_with_native_window(raw_window), Some(window))
        };
        #[cfg(not(windows))]
        let (gl_display, template, early_window) = {
            let gl_display = unsafe { Display::new(raw_display, display_preference()) }
                .map_err(|err| init_failed(format!("GL display creation failed: {}", err)))?;
            (gl_display, template, None::<Window>)
        };

        let configs = unsafe { gl_display.find_configs(template.build()) }
            .map_err(|err| init_failed(format!("no suitable GL config: {}", err)))?;
        let gl_config = fewest_samples(configs, |config| config.num_samples())
            .ok_or_else(|| init_failed("no suitable GL config offered".to_string()))?;

        let window = match early_window {
            Some(window) => window,
            None => event_loop.finalize_window(attributes, &gl_config)
                .map_err(|err| init_failed(format!("window creation failed: {}", err)))?,
        };

        let raw_window_handle = window.window_handle().ok().map(|handle| handle.as_raw());
        let context_attributes = ContextAttributesBuilder::new().build(raw_window_handle);
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(|err| init_failed(format!("GL context creation failed: {}", err)))?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|err| init_failed(format!("no window handle: {}", err)))?;
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(|err| init_failed(format!("window surface creation failed: {}", err)))?;
        let context = not_current
            .make_current(&surface)
            .map_err(|err| init_failed(format!("cannot make GL context current: {}", err)))?;

        let vsync = SwapInterval::Wait(NonZeroU32::MIN);
        if let Err(err) = surface.set_swap_interval(&context, vsync) {
            deferred_lighting::dl_warn!(SOURCE, "vsync unavailable: {}", err);
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| {
                gl_display.get_proc_address(symbol).cast()
            })
        };
        let version = unsafe { gl.get_parameter_string(glow::VERSION) };
        deferred_lighting::dl_info!(SOURCE, "GL context ready: {}", version);

        Ok(Self {
            gl: Rc::new(gl),
            surface,
            context,
            window,
        })
    }

    /// Resize the window surface after the window changed size
    pub fn resize_surface(&self, width: u32, height: u32) {
        if let (Some(width), Some(height)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.surface.resize(&self.context, width, height);
        }
    }
}

#[cfg(target_os = "macos")]
fn display_preference() -> DisplayApiPreference {
    DisplayApiPreference::Cgl
}

#[cfg(target_os = "android")]
fn display_preference() -> DisplayApiPreference {
    DisplayApiPreference::Egl
}

#[cfg(all(unix, not(target_os = "macos"), not(target_os = "android")))]
fn display_preference() -> DisplayApiPreference {
    DisplayApiPreference::EglThenGlx(Box::new(winit::platform::x11::register_xlib_error_hook))
}

/// The item with the fewest samples, the first one on ties
fn fewest_samples<T>(items: impl Iterator<Item = T>, samples: impl Fn(&T) -> u8) -> Option<T> {
    items.min_by_key(|item| samples(item))
}

fn init_failed(message: String) -> Error {
    deferred_lighting::dl_error!(SOURCE, "{}", message);
    Error::InitializationFailed(message)
}
