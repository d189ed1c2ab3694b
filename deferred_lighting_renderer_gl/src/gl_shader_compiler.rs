/// ShaderCompiler - GLSL implementation
///
/// Stage programs are GL shader objects, the pipeline is the linked program
/// object. Shader and program names share one namespace in GL, so a single
/// table tells `delete_program` which kind of object a handle is.

use std::rc::Rc;

use deferred_lighting::deferred::shading::{
    ProgramId, ShaderCompiler, ShaderError, ShaderErrorKind, ShaderProfile, ShaderResult,
    ShaderStage,
};
use glow::HasContext;
use rustc_hash::FxHashMap;

const SOURCE: &str = "deferred::gl::ShaderCompiler";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GlObject {
    Shader,
    Program,
}

/// GLSL compiler on the current GL context
pub struct GlShaderCompiler {
    gl: Rc<glow::Context>,
    objects: FxHashMap<ProgramId, GlObject>,
}

impl GlShaderCompiler {
    pub fn new(gl: Rc<glow::Context>) -> Self {
        Self {
            gl,
            objects: FxHashMap::default(),
        }
    }
}

pub(crate) fn shader_stage_to_gl(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

/// Full source handed to the driver: version directive, then the program
pub(crate) fn versioned_source(profile: ShaderProfile, source: &str) -> String {
    format!("{}\n{}", profile.directive(), source)
}

/// Profile for `stage` from a driver language version string
///
/// The G-Buffer depth upload and the `core` directive need desktop GL, so
/// GLSL ES versions are refused.
pub(crate) fn desktop_profile(stage: ShaderStage, text: &str) -> ShaderResult<ShaderProfile> {
    let (version, es) = ShaderProfile::parse_version(text).ok_or_else(|| {
        ShaderError::new(
            ShaderErrorKind::UnsupportedProfile,
            format!("unrecognized shading language version '{}'", text),
        )
    })?;
    if es {
        return Err(ShaderError::new(
            ShaderErrorKind::UnsupportedProfile,
            format!("GLSL ES contexts are not supported ('{}')", text),
        ));
    }
    Ok(ShaderProfile { stage, version, es })
}

impl ShaderCompiler for GlShaderCompiler {
    fn latest_profile(&mut self, stage: ShaderStage) -> ShaderResult<ShaderProfile> {
        let text = unsafe { self.gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION) };
        let profile = desktop_profile(stage, &text)?;
        deferred_lighting::dl_debug!(SOURCE, "Latest profile for '{}': {}", text, profile);
        Ok(profile)
    }

    fn create_program(
        &mut self,
        profile: ShaderProfile,
        name: &str,
        source: &str,
    ) -> ShaderResult<ProgramId> {
        unsafe {
            let shader = self
                .gl
                .create_shader(shader_stage_to_gl(profile.stage))
                .map_err(|err| ShaderError::new(ShaderErrorKind::Backend, err))?;
            self.gl.shader_source(shader, &versioned_source(profile, source));
            self.gl.compile_shader(shader);

            if !self.gl.get_shader_compile_status(shader) {
                let listing = self.gl.get_shader_info_log(shader);
                self.gl.delete_shader(shader);
                return Err(ShaderError::new(
                    ShaderErrorKind::Compiler,
                    format!("program '{}' failed to compile", name),
                )
                .with_listing(listing));
            }

            let id = ProgramId(shader.0);
            self.objects.insert(id, GlObject::Shader);
            Ok(id)
        }
    }

    fn link_programs(&mut self, vertex: ProgramId, fragment: ProgramId) -> ShaderResult<ProgramId> {
        unsafe {
            let program = self
                .gl
                .create_program()
                .map_err(|err| ShaderError::new(ShaderErrorKind::Backend, err))?;
            let shaders = [glow::NativeShader(vertex.0), glow::NativeShader(fragment.0)];
            for shader in shaders {
                self.gl.attach_shader(program, shader);
            }
            self.gl.link_program(program);
            for shader in shaders {
                self.gl.detach_shader(program, shader);
            }

            if !self.gl.get_program_link_status(program) {
                let listing = self.gl.get_program_info_log(program);
                self.gl.delete_program(program);
                return Err(ShaderError::new(ShaderErrorKind::Compiler, "programs failed to link")
                    .with_listing(listing));
            }

            let id = ProgramId(program.0);
            self.objects.insert(id, GlObject::Program);
            Ok(id)
        }
    }

    fn delete_program(&mut self, program: ProgramId) {
        match self.objects.remove(&program) {
            Some(GlObject::Shader) => unsafe {
                self.gl.delete_shader(glow::NativeShader(program.0))
            },
            Some(GlObject::Program) => unsafe {
                self.gl.delete_program(glow::NativeProgram(program.0))
            },
            None => deferred_lighting::dl_warn!(SOURCE, "delete of unknown program {:?}", program),
        }
    }
}
