/// ShaderCompiler trait - the shading-language services a backend provides

use std::fmt;
use std::num::NonZeroU32;

use super::ShaderResult;

/// Programmable pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// Compilation profile: stage plus shading language version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderProfile {
    /// Stage the profile compiles for
    pub stage: ShaderStage,
    /// Language version as an integer (e.g. 330, 460)
    pub version: u32,
    /// Embedded (ES) dialect
    pub es: bool,
}

impl ShaderProfile {
    /// `#version` directive prepended to sources compiled with this profile
    pub fn directive(&self) -> String {
        if self.es && self.version >= 300 {
            format!("#version {} es", self.version)
        } else if self.es {
            // GLSL ES 1.00 takes no profile suffix
            "#version 100".to_string()
        } else if self.version >= 150 {
            format!("#version {} core", self.version)
        } else {
            format!("#version {}", self.version)
        }
    }

    /// Parse a driver language version string
    ///
    /// Accepts forms like `"4.60 NVIDIA 535.104"`, `"3.30"` and
    /// `"OpenGL ES GLSL ES 3.00"`. Returns `(version, es)`.
    pub fn parse_version(text: &str) -> Option<(u32, bool)> {
        let es = text.contains(" ES ") || text.starts_with("OpenGL ES");
        let number = text
            .split_whitespace()
            .find(|token| token.chars().next().is_some_and(|c| c.is_ascii_digit()))?;
        let mut parts = number.split('.');
        let major: u32 = parts.next()?.parse().ok()?;
        let minor_text: String = parts
            .next()
            .unwrap_or("0")
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let minor: u32 = if minor_text.is_empty() { 0 } else { minor_text.parse().ok()? };
        let minor = if minor_text.len() == 1 { minor * 10 } else { minor };
        let version = major.checked_mul(100)?.checked_add(minor)?;
        Some((version, es))
    }
}

impl fmt::Display for ShaderProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self.stage, self.directive())
    }
}

/// Compiled program handle issued by a shader compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId(pub NonZeroU32);

/// Shading-language compiler of a backend
///
/// Implemented by backend-specific compilers (e.g. `GlShaderCompiler`) and
/// by the test mock.
pub trait ShaderCompiler {
    /// Best profile available for `stage`
    fn latest_profile(&mut self, stage: ShaderStage) -> ShaderResult<ShaderProfile>;

    /// Compile program `name` from `source` with `profile`
    ///
    /// # Errors
    ///
    /// `ShaderErrorKind::Compiler` with the compiler listing attached when
    /// the source does not compile.
    fn create_program(
        &mut self,
        profile: ShaderProfile,
        name: &str,
        source: &str,
    ) -> ShaderResult<ProgramId>;

    /// Link a vertex and a fragment program into a usable pipeline program
    fn link_programs(&mut self, vertex: ProgramId, fragment: ProgramId) -> ShaderResult<ProgramId>;

    /// Delete a program or pipeline program
    fn delete_program(&mut self, program: ProgramId);
}

#[cfg(test)]
#[path = "shader_compiler_tests.rs"]
mod tests;
