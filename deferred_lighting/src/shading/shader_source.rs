/// Shader source artifact
///
/// One file holds every program of the demo. Each program starts at a
/// marker line `//! program: <name>` and runs until the next marker. Lines
/// before the first marker form a prelude shared by all programs.

use std::path::Path;

use rustc_hash::FxHashMap;

use super::{ShaderError, ShaderErrorKind, ShaderResult};

/// Marker introducing a named program
pub const PROGRAM_MARKER: &str = "//! program:";

/// Named programs read from a shader source artifact
#[derive(Debug, Clone)]
pub struct ShaderSource {
    origin: String,
    programs: FxHashMap<String, String>,
}

impl ShaderSource {
    /// Split `text` into named programs; `origin` only appears in messages
    pub fn parse(origin: &str, text: &str) -> Self {
        let mut prelude = String::new();
        let mut programs: FxHashMap<String, String> = FxHashMap::default();
        let mut current: Option<(String, String)> = None;

        for line in text.lines() {
            if let Some(name) = line.trim_start().strip_prefix(PROGRAM_MARKER) {
                if let Some((name, body)) = current.take() {
                    Self::insert(origin, &mut programs, name, body);
                }
                current = Some((name.trim().to_string(), prelude.clone()));
                continue;
            }
            let target = match current.as_mut() {
                Some((_, body)) => body,
                None => &mut prelude,
            };
            target.push_str(line);
            target.push('\n');
        }
        if let Some((name, body)) = current.take() {
            Self::insert(origin, &mut programs, name, body);
        }

        Self {
            origin: origin.to_string(),
            programs,
        }
    }

    fn insert(origin: &str, programs: &mut FxHashMap<String, String>, name: String, body: String) {
        if programs.insert(name.clone(), body).is_some() {
            crate::dl_warn!(
                "deferred::ShaderSource",
                "{}: program '{}' defined twice, keeping the last one",
                origin,
                name
            );
        }
    }

    /// Read and split the artifact at `path`
    ///
    /// # Errors
    ///
    /// `ShaderErrorKind::FileNotFound` when the file cannot be read.
    pub fn load(path: &Path) -> ShaderResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            ShaderError::new(
                ShaderErrorKind::FileNotFound,
                format!("cannot read {}: {}", path.display(), err),
            )
        })?;
        Ok(Self::parse(&path.display().to_string(), &text))
    }

    /// Source of the program called `name` (prelude included)
    ///
    /// # Errors
    ///
    /// `ShaderErrorKind::UnknownProgram` when no such program exists. The
    /// message lists the programs the artifact does define.
    pub fn program(&self, name: &str) -> ShaderResult<&str> {
        self.programs.get(name).map(String::as_str).ok_or_else(|| {
            ShaderError::new(
                ShaderErrorKind::UnknownProgram,
                format!(
                    "{} has no program named '{}' (defined: {})",
                    self.origin,
                    name,
                    self.program_names().join(", ")
                ),
            )
        })
    }

    /// Program names, sorted
    pub fn program_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.programs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Where the source came from
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

#[cfg(test)]
#[path = "shader_source_tests.rs"]
mod tests;
