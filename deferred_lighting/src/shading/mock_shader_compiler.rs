/// Mock ShaderCompiler for unit tests (no GPU required)
///
/// Records every compiled program with its profile and source, and lets a
/// test script profile, compile or link failures.

use std::num::NonZeroU32;

use rustc_hash::FxHashMap;

use super::{
    ProgramId, ShaderCompiler, ShaderError, ShaderErrorKind, ShaderProfile, ShaderResult,
    ShaderStage,
};

/// Program recorded by the mock
#[derive(Debug, Clone)]
pub struct MockProgram {
    pub name: String,
    pub profile: Option<ShaderProfile>,
    pub source: String,
    pub linked_from: Option<(ProgramId, ProgramId)>,
}

#[derive(Debug)]
pub struct MockShaderCompiler {
    next_handle: u32,
    /// Live programs
    pub programs: FxHashMap<ProgramId, MockProgram>,
    /// Programs deleted so far
    pub deleted: Vec<ProgramId>,
    /// Stages whose profile query fails
    pub unsupported_stages: Vec<ShaderStage>,
    /// Program names that fail to compile, with the listing to report
    pub failing_programs: FxHashMap<String, String>,
    /// Link fails when set
    pub link_failure: Option<String>,
    version: u32,
}

impl MockShaderCompiler {
    /// Mock offering version 330 for both stages
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            programs: FxHashMap::default(),
            deleted: Vec::new(),
            unsupported_stages: Vec::new(),
            failing_programs: FxHashMap::default(),
            link_failure: None,
            version: 330,
        }
    }

    /// Make compilation of `name` fail with `listing`
    pub fn fail_program(&mut self, name: &str, listing: &str) {
        self.failing_programs.insert(name.to_string(), listing.to_string());
    }

    /// Program recorded under `name`, if still alive
    pub fn program_named(&self, name: &str) -> Option<&MockProgram> {
        self.programs.values().find(|program| program.name == name)
    }

    pub fn live_program_count(&self) -> usize {
        self.programs.len()
    }

    fn issue(&mut self) -> ProgramId {
        let id = ProgramId(NonZeroU32::new(self.next_handle).unwrap_or(NonZeroU32::MIN));
        self.next_handle += 1;
        id
    }
}

impl ShaderCompiler for MockShaderCompiler {
    fn latest_profile(&mut self, stage: ShaderStage) -> ShaderResult<ShaderProfile> {
        if self.unsupported_stages.contains(&stage) {
            return Err(ShaderError::new(
                ShaderErrorKind::UnsupportedProfile,
                format!("no {:?} profile available", stage),
            ));
        }
        Ok(ShaderProfile {
            stage,
            version: self.version,
            es: false,
        })
    }

    fn create_program(
        &mut self,
        profile: ShaderProfile,
        name: &str,
        source: &str,
    ) -> ShaderResult<ProgramId> {
        if let Some(listing) = self.failing_programs.get(name) {
            return Err(ShaderError::new(
                ShaderErrorKind::Compiler,
                format!("program '{}' failed to compile", name),
            )
            .with_listing(listing.clone()));
        }
        let id = self.issue();
        self.programs.insert(
            id,
            MockProgram {
                name: name.to_string(),
                profile: Some(profile),
                source: source.to_string(),
                linked_from: None,
            },
        );
        Ok(id)
    }

    fn link_programs(&mut self, vertex: ProgramId, fragment: ProgramId) -> ShaderResult<ProgramId> {
        if let Some(log) = &self.link_failure {
            return Err(
                ShaderError::new(ShaderErrorKind::Compiler, "link failed").with_listing(log.clone())
            );
        }
        if !self.programs.contains_key(&vertex) || !self.programs.contains_key(&fragment) {
            return Err(ShaderError::new(ShaderErrorKind::Backend, "link of unknown program"));
        }
        let id = self.issue();
        self.programs.insert(
            id,
            MockProgram {
                name: "pipeline".to_string(),
                profile: None,
                source: String::new(),
                linked_from: Some((vertex, fragment)),
            },
        );
        Ok(id)
    }

    fn delete_program(&mut self, program: ProgramId) {
        if self.programs.remove(&program).is_some() {
            self.deleted.push(program);
        }
    }
}
