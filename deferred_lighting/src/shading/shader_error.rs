/// Shader channel errors

use std::fmt;

/// Result type of shader compiler operations
pub type ShaderResult<T> = std::result::Result<T, ShaderError>;

/// What went wrong on the shader channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderErrorKind {
    /// Compilation or linking failed; a listing is usually attached
    Compiler,
    /// No usable profile for the requested stage
    UnsupportedProfile,
    /// The shader source artifact could not be read
    FileNotFound,
    /// The artifact has no program with the requested name
    UnknownProgram,
    /// Backend failure unrelated to the source (handle generation, ...)
    Backend,
}

/// Shader channel error
///
/// `situation` names the setup step ("Creating Vertex Program", ...); it is
/// filled in by the setup sequence, compilers leave it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderError {
    pub situation: String,
    pub kind: ShaderErrorKind,
    pub message: String,
    pub listing: Option<String>,
}

impl ShaderError {
    /// Error without situation or listing
    pub fn new(kind: ShaderErrorKind, message: impl Into<String>) -> Self {
        Self {
            situation: String::new(),
            kind,
            message: message.into(),
            listing: None,
        }
    }

    /// Attach the compiler listing
    pub fn with_listing(mut self, listing: impl Into<String>) -> Self {
        self.listing = Some(listing.into());
        self
    }

    /// Tag with the setup step that failed
    pub fn in_situation(mut self, situation: &str) -> Self {
        self.situation = situation.to_string();
        self
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.situation.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} : {}", self.situation, self.message)
        }
    }
}

impl std::error::Error for ShaderError {}
