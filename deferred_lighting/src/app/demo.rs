/// The deferred lighting demo handler
///
/// Owns the graphics device, the shader compiler, the G-Buffer and the
/// shader programs. The event loop driver holds the one instance and passes
/// it to every callback.

use crate::error::Result;
use crate::gbuffer::RenderTargetManager;
use crate::graphics_device::GraphicsDevice;
use crate::shading::{Acknowledge, ShaderCompiler, ShaderPrograms, ShaderSetup};
use super::{DemoConfig, FrameHandler, Key, WindowControl};

const SOURCE: &str = "deferred::Demo";

pub struct DeferredLightingDemo<D: GraphicsDevice, C: ShaderCompiler> {
    device: D,
    compiler: C,
    config: DemoConfig,
    render_targets: RenderTargetManager,
    programs: Option<ShaderPrograms>,
    exit_requested: bool,
    shut_down: bool,
    frames: u64,
}

impl<D: GraphicsDevice, C: ShaderCompiler> DeferredLightingDemo<D, C> {
    pub fn new(device: D, compiler: C, config: DemoConfig) -> Self {
        Self {
            device,
            compiler,
            config,
            render_targets: RenderTargetManager::new(),
            programs: None,
            exit_requested: false,
            shut_down: false,
            frames: 0,
        }
    }

    /// Create the G-Buffer at the configured size, then set up the shaders
    ///
    /// # Errors
    ///
    /// Any G-Buffer creation error. Shader setup failures are reported and
    /// acknowledged but do not stop the demo, which then runs without
    /// programs.
    pub fn initialize<A: Acknowledge + ?Sized>(&mut self, acknowledge: &mut A) -> Result<()> {
        let (width, height) = self.config.size();
        self.render_targets.create(&mut self.device, width, height)?;

        match ShaderSetup::from_config(&self.config).run(&mut self.compiler, acknowledge) {
            Ok(programs) => {
                crate::dl_debug!(
                    SOURCE,
                    "Fragment program compiled with the fragment profile {}, \
                     not the vertex profile",
                    programs.fragment_profile
                );
                self.programs = Some(programs);
            }
            Err(err) => crate::dl_warn!(SOURCE, "Continuing without shader programs: {}", err),
        }
        Ok(())
    }

    /// Release the G-Buffer and delete the shader programs
    ///
    /// Runs at most once; later calls do nothing.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        if self.render_targets.state().owns_resources() {
            if let Err(err) = self.render_targets.release(&mut self.device) {
                crate::dl_error!(SOURCE, "G-Buffer release failed: {}", err);
            }
        }
        if let Some(programs) = self.programs.take() {
            programs.destroy(&mut self.compiler);
        }
        crate::dl_info!(SOURCE, "Shut down after {} frames", self.frames);
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn render_targets(&self) -> &RenderTargetManager {
        &self.render_targets
    }

    pub fn programs(&self) -> Option<&ShaderPrograms> {
        self.programs.as_ref()
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<D: GraphicsDevice, C: ShaderCompiler> FrameHandler for DeferredLightingDemo<D, C> {
    fn on_resize(&mut self, window: &mut dyn WindowControl, width: u32, height: u32) {
        // The window keeps the G-Buffer size; the G-Buffer is never resized.
        let fixed = self.config.size();
        if (width, height) != fixed {
            crate::dl_debug!(
                SOURCE,
                "Resize to {}x{} refused, keeping {}x{}",
                width,
                height,
                fixed.0,
                fixed.1
            );
            window.request_inner_size(fixed.0, fixed.1);
        }
    }

    fn on_tick(&mut self, window: &mut dyn WindowControl) {
        if !self.exit_requested {
            window.request_redraw();
        }
    }

    fn on_key(&mut self, window: &mut dyn WindowControl, key: Key) {
        if key != Key::Escape || self.exit_requested {
            return;
        }
        self.exit_requested = true;
        crate::dl_info!(SOURCE, "Escape pressed, leaving the main loop");
        self.shutdown();
        window.exit();
    }

    fn on_draw(&mut self, window: &mut dyn WindowControl) -> Result<()> {
        if self.exit_requested {
            return Ok(());
        }
        if self.render_targets.is_ready() {
            self.render_targets
                .begin_geometry_pass(&mut self.device, &self.config.clear_values)?;
            self.render_targets.end_geometry_pass(&mut self.device);
        }
        window.present()?;
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
