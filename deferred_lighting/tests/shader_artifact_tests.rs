//! Integration tests for the shipped shader artifact
//!
//! No GPU required.
//!
//! Run with: cargo test --test shader_artifact_tests

use deferred_lighting::deferred::app::DemoConfig;
use deferred_lighting::deferred::shading::{ShaderErrorKind, ShaderSource, PROGRAM_MARKER};
use std::path::Path;

const SHADER_ARTIFACT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../shaders/deferred_lighting.glsl");

#[test]
fn test_artifact_holds_configured_programs() {
    let source = ShaderSource::load(Path::new(SHADER_ARTIFACT)).unwrap();
    let config = DemoConfig::default();

    assert!(source.program(&config.vertex_program).is_ok());
    assert!(source.program(&config.fragment_program).is_ok());
}

#[test]
fn test_artifact_programs_have_no_version_line() {
    let source = ShaderSource::load(Path::new(SHADER_ARTIFACT)).unwrap();
    for name in source.program_names() {
        let text = source.program(name).unwrap();
        assert!(!text.contains("#version"), "{} carries its own #version", name);
        assert!(!text.contains(PROGRAM_MARKER));
        assert!(text.contains("void main()"));
    }
}

#[test]
fn test_fragment_program_writes_normal_specular() {
    let source = ShaderSource::load(Path::new(SHADER_ARTIFACT)).unwrap();
    let fragment = source.program("blinn_phong_ftb").unwrap();
    assert!(fragment.contains("normal_specular"));
}

#[test]
fn test_unknown_program_in_artifact() {
    let source = ShaderSource::load(Path::new(SHADER_ARTIFACT)).unwrap();
    let err = source.program("blinnPhongVTF").unwrap_err();
    assert_eq!(err.kind, ShaderErrorKind::UnknownProgram);
}
