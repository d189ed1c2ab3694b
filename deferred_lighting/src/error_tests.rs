//! Unit tests for error.rs
//!
//! Tests every Error variant's Display text and the conversions.

use crate::diagnostics::{FramebufferStatus, GraphicsErrorKind};
use crate::error::{Error, Result};
use crate::gbuffer::RenderTargetState;
use crate::shading::{ShaderError, ShaderErrorKind};
use serial_test::serial;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("context creation failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("context creation failed"));
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("G-Buffer size must be positive".to_string());
    assert_eq!(err.to_string(), "Invalid resource: G-Buffer size must be positive");
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("Window creation failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Initialization failed"));
    assert!(display.contains("Window creation failed"));
}

#[test]
fn test_invalid_state_display() {
    let err = Error::InvalidState {
        operation: "validate",
        state: RenderTargetState::Released,
    };
    assert_eq!(
        err.to_string(),
        "Invalid state: cannot validate a render target that is released"
    );
}

#[test]
fn test_graphics_display_uses_action_prefix() {
    let err = Error::Graphics {
        action: "Attach G-Buffer texture RGBA".to_string(),
        kind: GraphicsErrorKind::InvalidOperation,
    };
    assert_eq!(
        err.to_string(),
        "Attach G-Buffer texture RGBA : The specified operation is not allowed in the current state"
    );
}

#[test]
fn test_incomplete_framebuffer_display() {
    let err = Error::IncompleteFramebuffer(FramebufferStatus::Unsupported);
    assert_eq!(err.to_string(), "FBO Error : Framebuffer configuration not supported");
}

#[test]
fn test_shader_display() {
    let err = Error::Shader(
        ShaderError::new(ShaderErrorKind::Compiler, "syntax error").in_situation("Creating Vertex Program"),
    );
    assert_eq!(err.to_string(), "Creating Vertex Program : syntax error");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidResource("x".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err = Error::IncompleteFramebuffer(FramebufferStatus::IncompleteAttachment);
    assert!(format!("{:?}", err).contains("IncompleteFramebuffer"));
}

#[test]
fn test_error_clone_and_eq() {
    let err = Error::Graphics {
        action: "Generating frame buffer object".to_string(),
        kind: GraphicsErrorKind::Other(0x0505),
    };
    assert_eq!(err.clone(), err);
}

#[test]
fn test_from_shader_error() {
    let shader = ShaderError::new(ShaderErrorKind::FileNotFound, "missing");
    let err: Error = shader.clone().into();
    assert_eq!(err, Error::Shader(shader));
}

// ============================================================================
// RESULT / BAIL
// ============================================================================

fn bail_on_zero(handle: u32) -> Result<u32> {
    if handle == 0 {
        crate::dl_bail!("deferred::test", "handle generation returned {}", handle);
    }
    Ok(handle)
}

#[test]
#[serial]
fn test_bail_logs_and_returns_backend_error() {
    let entries = crate::log::capture::install();
    let result = bail_on_zero(0);
    let captured = entries.lock().unwrap().clone();
    crate::log::reset_logger();

    assert_eq!(result, Err(Error::BackendError("handle generation returned 0".to_string())));
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, crate::log::LogSeverity::Error);
    assert!(captured[0].file.is_some());
}

#[test]
#[serial]
fn test_bail_passes_through_success() {
    assert_eq!(bail_on_zero(7), Ok(7));
}
