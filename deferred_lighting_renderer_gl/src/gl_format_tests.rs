//! Unit tests for the OpenGL enum mappings
//!
//! Pure conversions, no context required.

use super::*;

#[test]
fn test_color_format_maps_to_rgba8_unsigned_bytes() {
    assert_eq!(
        texture_format_to_gl(TextureFormat::R8G8B8A8_UNORM),
        (glow::RGBA8 as i32, glow::RGBA, glow::UNSIGNED_BYTE)
    );
}

#[test]
fn test_depth_format_maps_to_depth24_float_upload() {
    assert_eq!(
        texture_format_to_gl(TextureFormat::D24_UNORM),
        (glow::DEPTH_COMPONENT24 as i32, glow::DEPTH_COMPONENT, glow::FLOAT)
    );
}

#[test]
fn test_filters() {
    assert_eq!(texture_filter_to_gl(TextureFilter::Nearest), glow::NEAREST as i32);
}

#[test]
fn test_attachment_points() {
    assert_eq!(attachment_to_gl(AttachmentPoint::Color(0)), glow::COLOR_ATTACHMENT0);
    assert_eq!(attachment_to_gl(AttachmentPoint::Color(2)), glow::COLOR_ATTACHMENT2);
    assert_eq!(attachment_to_gl(AttachmentPoint::Depth), glow::DEPTH_ATTACHMENT);
}

#[test]
fn test_clear_masks() {
    assert_eq!(clear_flags_to_gl(ClearFlags::COLOR), glow::COLOR_BUFFER_BIT);
    assert_eq!(clear_flags_to_gl(ClearFlags::DEPTH), glow::DEPTH_BUFFER_BIT);
    assert_eq!(
        clear_flags_to_gl(ClearFlags::COLOR | ClearFlags::DEPTH),
        glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT
    );
    assert_eq!(clear_flags_to_gl(ClearFlags::empty()), 0);
}
