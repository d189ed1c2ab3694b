//! Deferred lighting demo
//!
//! Opens an 800x600 window, builds the G-Buffer and the geometry pass
//! programs, and runs until Escape is pressed or the window is closed.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use deferred_lighting::deferred::app::DemoConfig;
use deferred_lighting::{dl_error, dl_info};
use deferred_lighting_renderer_gl::run;

const SOURCE: &str = "deferred::demo";

/// Shader artifact relative to the working directory, or to the workspace
/// when run from elsewhere
fn locate_shader_source(configured: &Path) -> PathBuf {
    if configured.is_relative() && !configured.exists() {
        let workspace = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join(configured);
        if workspace.exists() {
            return workspace;
        }
    }
    configured.to_path_buf()
}

fn main() -> ExitCode {
    let mut config = DemoConfig::default();
    config.shader_path = locate_shader_source(&config.shader_path);
    dl_info!(SOURCE, "Starting {} ({}x{})", config.title, config.width, config.height);

    match run(config) {
        Ok(()) => {
            dl_info!(SOURCE, "Main loop exited");
            ExitCode::SUCCESS
        }
        Err(err) => {
            dl_error!(SOURCE, "Fatal: {}", err);
            ExitCode::FAILURE
        }
    }
}
