/// winit event loop driving the demo
///
/// The application handler creates the window and GL context on `resumed`,
/// builds the demo on top of them and forwards window events to the demo's
/// `FrameHandler` callbacks.

use deferred_lighting::deferred::app::{
    DeferredLightingDemo, DemoConfig, FrameHandler, Key, WindowControl,
};
use deferred_lighting::deferred::shading::PressEnterToContinue;
use deferred_lighting::deferred::{Error, Result};
use glutin::context::PossiblyCurrentContext;
use glutin::prelude::*;
use glutin::surface::{Surface, WindowSurface};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::{GlGraphicsDevice, GlShaderCompiler, GlWindowContext};

const SOURCE: &str = "deferred::gl::App";

type GlDemo = DeferredLightingDemo<GlGraphicsDevice, GlShaderCompiler>;

/// Window services of the GL window during one callback
pub struct GlWindowControl<'a> {
    window: &'a Window,
    surface: &'a Surface<WindowSurface>,
    context: &'a PossiblyCurrentContext,
    event_loop: &'a ActiveEventLoop,
}

impl<'a> GlWindowControl<'a> {
    pub fn new(
        window: &'a Window,
        surface: &'a Surface<WindowSurface>,
        context: &'a PossiblyCurrentContext,
        event_loop: &'a ActiveEventLoop,
    ) -> Self {
        Self {
            window,
            surface,
            context,
            event_loop,
        }
    }
}

impl WindowControl for GlWindowControl<'_> {
    fn inner_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn request_inner_size(&mut self, width: u32, height: u32) {
        let _ = self.window.request_inner_size(PhysicalSize::new(width, height));
    }

    fn request_redraw(&mut self) {
        self.window.request_redraw();
    }

    fn present(&mut self) -> Result<()> {
        self.surface
            .swap_buffers(self.context)
            .map_err(|err| Error::BackendError(format!("swap buffers failed: {}", err)))
    }

    fn exit(&mut self) {
        self.event_loop.exit();
    }
}

/// Demo running on a live window; the demo drops before the context
struct Running {
    demo: GlDemo,
    context: GlWindowContext,
}

struct GlApp {
    config: DemoConfig,
    running: Option<Running>,
    failure: Option<Error>,
}

impl GlApp {
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<Running> {
        let attributes = GlWindowContext::window_attributes(&self.config);
        let context = GlWindowContext::create(event_loop, attributes)?;
        let device = GlGraphicsDevice::new(context.gl.clone());
        let compiler = GlShaderCompiler::new(context.gl.clone());
        let mut demo = DeferredLightingDemo::new(device, compiler, self.config.clone());
        demo.initialize(&mut PressEnterToContinue)?;
        Ok(Running { demo, context })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        deferred_lighting::dl_error!(SOURCE, "{}", err);
        if let Some(running) = self.running.as_mut() {
            running.demo.shutdown();
        }
        self.failure = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for GlApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() || self.failure.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(running) => self.running = Some(running),
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(Running { demo, context }) = self.running.as_mut() else {
            return;
        };
        let mut window = GlWindowControl::new(
            &context.window,
            &context.surface,
            &context.context,
            event_loop,
        );

        let outcome = match event {
            WindowEvent::CloseRequested => {
                demo.shutdown();
                window.exit();
                Ok(())
            }
            WindowEvent::Resized(size) => {
                context.resize_surface(size.width, size.height);
                demo.on_resize(&mut window, size.width, size.height);
                Ok(())
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    demo.on_key(&mut window, Key::from(&event.logical_key));
                }
                Ok(())
            }
            WindowEvent::RedrawRequested => demo.on_draw(&mut window),
            _ => Ok(()),
        };

        if let Err(err) = outcome {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(Running { demo, context }) = self.running.as_mut() {
            let mut window = GlWindowControl::new(
                &context.window,
                &context.surface,
                &context.context,
                event_loop,
            );
            demo.on_tick(&mut window);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(mut running) = self.running.take() {
            running.demo.shutdown();
        }
    }
}

/// Open the demo window and run the event loop until it exits
///
/// # Errors
///
/// - `Error::InitializationFailed` if the event loop, window or GL context
///   cannot be created
/// - any G-Buffer creation error
/// - any error raised while drawing
pub fn run(config: DemoConfig) -> Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|err| {
            Error::InitializationFailed(format!("event loop creation failed: {}", err))
        })?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GlApp {
        config,
        running: None,
        failure: None,
    };
    event_loop
        .run_app(&mut app)
        .map_err(|err| Error::BackendError(format!("event loop failed: {}", err)))?;

    match app.failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
