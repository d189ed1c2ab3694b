/// Shader program setup sequence
///
/// Reads the artifact, then for each stage selects the latest profile and
/// compiles the named program, and finally links both. Failures are
/// reported on the shader channel (title, situation, message, listing for
/// compiler errors), the operator is asked to acknowledge, and the error
/// is handed back to the caller.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::app::DemoConfig;
use crate::error::{Error, Result};
use super::{
    ProgramId, ShaderCompiler, ShaderError, ShaderErrorKind, ShaderProfile, ShaderResult,
    ShaderSource, ShaderStage,
};

const SOURCE: &str = "deferred::ShaderSetup";

/// Situation tags reported with shader errors
pub mod situations {
    pub const LOAD_SOURCE: &str = "Loading Shader Source";
    pub const SELECT_VERTEX_PROFILE: &str = "Selecting Vertex Profile";
    pub const CREATE_VERTEX_PROGRAM: &str = "Creating Vertex Program";
    pub const SELECT_FRAGMENT_PROFILE: &str = "Selecting Fragment Profile";
    pub const CREATE_FRAGMENT_PROGRAM: &str = "Creating Fragment Program";
    pub const LINK_PROGRAMS: &str = "Linking Programs";
}

// ============================================================================
// Operator acknowledgement
// ============================================================================

/// Waits for the operator after a shader error was reported
pub trait Acknowledge {
    fn acknowledge(&mut self, error: &ShaderError);
}

/// Console acknowledgement: prompt on stderr, wait for a line on stdin
pub struct PressEnterToContinue;

impl Acknowledge for PressEnterToContinue {
    fn acknowledge(&mut self, _error: &ShaderError) {
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "Press Enter to continue...");
        let _ = stderr.flush();
        let mut line = String::new();
        let _ = std::io::stdin().lock().read_line(&mut line);
    }
}

/// Log a shader error and wait for the operator
///
/// The listing is only printed for compiler errors.
pub fn report_shader_error<A: Acknowledge + ?Sized>(
    title: &str,
    error: &ShaderError,
    acknowledge: &mut A,
) {
    crate::dl_error!(SOURCE, "{} : {} : {}", title, error.situation, error.message);
    if error.kind == ShaderErrorKind::Compiler {
        if let Some(listing) = &error.listing {
            crate::dl_error!(SOURCE, "{}", listing);
        }
    }
    acknowledge.acknowledge(error);
}

// ============================================================================
// Programs
// ============================================================================

/// Programs produced by a successful setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderPrograms {
    pub vertex: ProgramId,
    pub fragment: ProgramId,
    pub pipeline: ProgramId,
    pub vertex_profile: ShaderProfile,
    pub fragment_profile: ShaderProfile,
}

impl ShaderPrograms {
    /// Delete the pipeline program, then both stage programs
    pub fn destroy<C: ShaderCompiler + ?Sized>(self, compiler: &mut C) {
        compiler.delete_program(self.pipeline);
        compiler.delete_program(self.vertex);
        compiler.delete_program(self.fragment);
    }
}

// ============================================================================
// Setup
// ============================================================================

/// Which programs to build and from where
#[derive(Debug, Clone)]
pub struct ShaderSetup {
    pub title: String,
    pub source_path: PathBuf,
    pub vertex_program: String,
    pub fragment_program: String,
}

impl ShaderSetup {
    /// Setup for the programs named in `config`
    pub fn from_config(config: &DemoConfig) -> Self {
        Self {
            title: config.title.clone(),
            source_path: config.shader_path.clone(),
            vertex_program: config.vertex_program.clone(),
            fragment_program: config.fragment_program.clone(),
        }
    }

    /// Load the artifact from `source_path` and build the programs
    ///
    /// # Errors
    ///
    /// `Error::Shader` after the failure was reported and acknowledged.
    pub fn run<C, A>(&self, compiler: &mut C, acknowledge: &mut A) -> Result<ShaderPrograms>
    where
        C: ShaderCompiler + ?Sized,
        A: Acknowledge + ?Sized,
    {
        match Self::load(&self.source_path) {
            Ok(source) => self.run_with_source(&source, compiler, acknowledge),
            Err(err) => Err(self.fail(err, acknowledge)),
        }
    }

    /// Build the programs from an already parsed artifact
    ///
    /// # Errors
    ///
    /// `Error::Shader` after the failure was reported and acknowledged.
    pub fn run_with_source<C, A>(
        &self,
        source: &ShaderSource,
        compiler: &mut C,
        acknowledge: &mut A,
    ) -> Result<ShaderPrograms>
    where
        C: ShaderCompiler + ?Sized,
        A: Acknowledge + ?Sized,
    {
        match self.build(source, compiler) {
            Ok(programs) => {
                crate::dl_info!(
                    SOURCE,
                    "Shader programs ready: {} [{}], {} [{}]",
                    self.vertex_program,
                    programs.vertex_profile,
                    self.fragment_program,
                    programs.fragment_profile
                );
                Ok(programs)
            }
            Err(err) => Err(self.fail(err, acknowledge)),
        }
    }

    fn load(path: &Path) -> ShaderResult<ShaderSource> {
        let source =
            ShaderSource::load(path).map_err(|err| err.in_situation(situations::LOAD_SOURCE))?;
        crate::dl_debug!(
            SOURCE,
            "Loaded {} programs from {}: {}",
            source.program_names().len(),
            source.origin(),
            source.program_names().join(", ")
        );
        Ok(source)
    }

    fn fail<A: Acknowledge + ?Sized>(&self, err: ShaderError, acknowledge: &mut A) -> Error {
        report_shader_error(&self.title, &err, acknowledge);
        Error::Shader(err)
    }

    fn build<C: ShaderCompiler + ?Sized>(
        &self,
        source: &ShaderSource,
        compiler: &mut C,
    ) -> ShaderResult<ShaderPrograms> {
        let vertex_profile = compiler
            .latest_profile(ShaderStage::Vertex)
            .map_err(|err| err.in_situation(situations::SELECT_VERTEX_PROFILE))?;
        let vertex = source
            .program(&self.vertex_program)
            .and_then(|text| compiler.create_program(vertex_profile, &self.vertex_program, text))
            .map_err(|err| err.in_situation(situations::CREATE_VERTEX_PROGRAM))?;

        // The fragment program gets its own profile, never the vertex one.
        let fragment_profile = match compiler.latest_profile(ShaderStage::Fragment) {
            Ok(profile) => profile,
            Err(err) => {
                compiler.delete_program(vertex);
                return Err(err.in_situation(situations::SELECT_FRAGMENT_PROFILE));
            }
        };
        let fragment_name = &self.fragment_program;
        let fragment = match source
            .program(fragment_name)
            .and_then(|text| compiler.create_program(fragment_profile, fragment_name, text))
        {
            Ok(program) => program,
            Err(err) => {
                compiler.delete_program(vertex);
                return Err(err.in_situation(situations::CREATE_FRAGMENT_PROGRAM));
            }
        };

        let pipeline = match compiler.link_programs(vertex, fragment) {
            Ok(program) => program,
            Err(err) => {
                compiler.delete_program(vertex);
                compiler.delete_program(fragment);
                return Err(err.in_situation(situations::LINK_PROGRAMS));
            }
        };

        Ok(ShaderPrograms {
            vertex,
            fragment,
            pipeline,
            vertex_profile,
            fragment_profile,
        })
    }
}

#[cfg(test)]
#[path = "shader_setup_tests.rs"]
mod tests;
