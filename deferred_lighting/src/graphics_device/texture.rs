/// Texture descriptor, formats and sampling filters

/// Texture storage format
///
/// Each format fixes the internal storage and the client-side layout used
/// when storage is allocated without initial data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    /// 4 x 8-bit normalized components (normal.xyz + specular)
    R8G8B8A8_UNORM,
    /// Single 24-bit depth component, uploaded as float texels
    D24_UNORM,
}

impl TextureFormat {
    /// Returns true for depth formats
    pub fn is_depth(&self) -> bool {
        matches!(self, TextureFormat::D24_UNORM)
    }
}

/// Texture sampling filter
///
/// G-Buffer texels are read back one to one, so nearest is the only filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFilter {
    /// Nearest texel, no interpolation
    Nearest,
}

/// Descriptor for creating a 2D texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Storage format
    pub format: TextureFormat,
    /// Minification filter
    pub min_filter: TextureFilter,
    /// Magnification filter
    pub mag_filter: TextureFilter,
}

impl TextureDesc {
    /// 2D texture with nearest filtering in both directions
    pub fn nearest(width: u32, height: u32, format: TextureFormat) -> Self {
        Self {
            width,
            height,
            format,
            min_filter: TextureFilter::Nearest,
            mag_filter: TextureFilter::Nearest,
        }
    }
}
