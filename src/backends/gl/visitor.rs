use std::ffi;
use std::ptr;

use gl;
use gl::types::*;

use super::super::Visitor;
use crate::errors::{Error, Result};
use crate::shader::ShaderStage;
use crate::uniform::UniformVariable;

/// Describes the version of the underlying context.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl Version {
    /// Obtains the version of the current context using the loaded
    /// functions.
    ///
    /// # Unsafe
    ///
    /// You must ensure that the functions belong to the current context,
    /// otherwise you will get an undefined behavior.
    pub unsafe fn parse() -> Result<Version> {
        let desc = gl::GetString(gl::VERSION);
        if desc.is_null() {
            return Err(Error::Backend(
                "[GL] No version string. Is a context current on this thread?".into(),
            ));
        }

        let desc = String::from_utf8_lossy(ffi::CStr::from_ptr(desc as *const _).to_bytes())
            .into_owned();

        let (es, desc) = if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else if desc.starts_with("OpenGL ES-") {
            (true, &desc[13..])
        } else {
            (false, &desc[..])
        };

        let desc = desc.split(' ').next().unwrap_or("");
        let mut iter = desc.split('.');
        let major = iter.next().and_then(|v| v.parse().ok());
        let minor = iter.next().and_then(|v| v.parse().ok());

        match (major, minor) {
            (Some(major), Some(minor)) => {
                if es {
                    Ok(Version::ES(major, minor))
                } else {
                    Ok(Version::GL(major, minor))
                }
            }
            _ => Err(Error::Backend(format!(
                "[GL] Can not parse version string {:?}.",
                desc
            ))),
        }
    }
}

/// Visitor implementation over a live OpenGL context. The context must be
/// current on the calling thread for the whole lifetime of the visitor.
pub struct GLVisitor {
    version: Version,
}

impl GLVisitor {
    pub unsafe fn new() -> Result<Self> {
        let version = Version::parse()?;

        let supported = match version {
            Version::GL(major, _) => major >= 2,
            Version::ES(major, _) => major >= 2,
        };
        if !supported {
            return Err(Error::Backend(format!(
                "[GL] The OpenGL implementation {:?} does not support shader objects.",
                version
            )));
        }

        info!("GLVisitor {:?}", version);
        Ok(GLVisitor { version })
    }

    pub fn version(&self) -> Version {
        self.version
    }
}

impl Visitor for GLVisitor {
    unsafe fn create_shader(&mut self, stage: ShaderStage) -> Result<u32> {
        let id = gl::CreateShader(stage.into());
        check()?;
        Ok(id)
    }

    unsafe fn shader_source(&mut self, id: u32, source: &str) -> Result<()> {
        let source = ffi::CString::new(source.as_bytes()).map_err(|_| {
            Error::Backend("[GL] Shader source contains an interior nul byte.".into())
        })?;

        gl::ShaderSource(id, 1, &source.as_ptr(), ptr::null());
        check()
    }

    unsafe fn compile_shader(&mut self, id: u32) -> Result<()> {
        gl::CompileShader(id);
        check()
    }

    unsafe fn shader_compile_status(&mut self, id: u32) -> Result<bool> {
        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut status);
        check()?;
        Ok(status == GLint::from(gl::TRUE))
    }

    unsafe fn shader_compile_log(&mut self, id: u32) -> Result<String> {
        let mut len = 0;
        gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
        check()?;

        if len <= 0 {
            return Ok(String::new());
        }

        let mut buf = vec![0u8; len as usize];
        let mut written = 0;
        gl::GetShaderInfoLog(id, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
        check()?;

        buf.truncate(written.max(0) as usize);
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    unsafe fn shader_source_text(&mut self, id: u32) -> Result<String> {
        let mut len = 0;
        gl::GetShaderiv(id, gl::SHADER_SOURCE_LENGTH, &mut len);
        check()?;

        if len <= 0 {
            return Ok(String::new());
        }

        let mut buf = vec![0u8; len as usize];
        let mut written = 0;
        gl::GetShaderSource(id, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
        check()?;

        buf.truncate(written.max(0) as usize);
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    unsafe fn delete_shader(&mut self, id: u32) -> Result<()> {
        gl::DeleteShader(id);
        check()
    }

    unsafe fn create_program(&mut self) -> Result<u32> {
        let id = gl::CreateProgram();
        check()?;
        Ok(id)
    }

    unsafe fn attach_shader(&mut self, program: u32, shader: u32) -> Result<()> {
        gl::AttachShader(program, shader);
        check()
    }

    unsafe fn detach_shader(&mut self, program: u32, shader: u32) -> Result<()> {
        gl::DetachShader(program, shader);
        check()
    }

    unsafe fn link_program(&mut self, program: u32) -> Result<()> {
        gl::LinkProgram(program);
        check()
    }

    unsafe fn program_link_status(&mut self, program: u32) -> Result<bool> {
        let mut status = GLint::from(gl::FALSE);
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
        check()?;
        Ok(status == GLint::from(gl::TRUE))
    }

    unsafe fn program_link_log(&mut self, program: u32) -> Result<String> {
        let mut len = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        check()?;

        if len <= 0 {
            return Ok(String::new());
        }

        let mut buf = vec![0u8; len as usize];
        let mut written = 0;
        gl::GetProgramInfoLog(program, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
        check()?;

        buf.truncate(written.max(0) as usize);
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    unsafe fn delete_program(&mut self, program: u32) -> Result<()> {
        gl::DeleteProgram(program);
        check()
    }

    unsafe fn use_program(&mut self, program: Option<u32>) -> Result<()> {
        gl::UseProgram(program.unwrap_or(0));
        check()
    }

    unsafe fn uniform_location(&mut self, program: u32, name: &str) -> Result<Option<i32>> {
        let name = ffi::CString::new(name.as_bytes()).map_err(|_| {
            Error::Backend("[GL] Uniform name contains an interior nul byte.".into())
        })?;

        let location = gl::GetUniformLocation(program, name.as_ptr());
        check()?;

        if location == -1 {
            Ok(None)
        } else {
            Ok(Some(location))
        }
    }

    unsafe fn set_uniform(&mut self, location: i32, variable: &UniformVariable) -> Result<()> {
        match *variable {
            UniformVariable::I32(v) => gl::Uniform1i(location, v),
            UniformVariable::U32(v) => gl::Uniform1ui(location, v),
            UniformVariable::F32(v) => gl::Uniform1f(location, v),
            UniformVariable::F64(v) => gl::Uniform1d(location, v),
            UniformVariable::Vector2f(v) => gl::Uniform2f(location, v[0], v[1]),
            UniformVariable::Vector3f(v) => gl::Uniform3f(location, v[0], v[1], v[2]),
            UniformVariable::Vector4f(v) => gl::Uniform4f(location, v[0], v[1], v[2], v[3]),
            UniformVariable::Vector2d(v) => gl::Uniform2d(location, v[0], v[1]),
            UniformVariable::Vector3d(v) => gl::Uniform3d(location, v[0], v[1], v[2]),
            UniformVariable::Vector4d(v) => gl::Uniform4d(location, v[0], v[1], v[2], v[3]),
            UniformVariable::Vector2i(v) => gl::Uniform2i(location, v[0], v[1]),
            UniformVariable::Vector3i(v) => gl::Uniform3i(location, v[0], v[1], v[2]),
            UniformVariable::Vector4i(v) => gl::Uniform4i(location, v[0], v[1], v[2], v[3]),
            UniformVariable::Vector2u(v) => gl::Uniform2ui(location, v[0], v[1]),
            UniformVariable::Vector3u(v) => gl::Uniform3ui(location, v[0], v[1], v[2]),
            UniformVariable::Vector4u(v) => gl::Uniform4ui(location, v[0], v[1], v[2], v[3]),
            UniformVariable::Matrix2f(v, transpose) => {
                let transpose = if transpose { gl::TRUE } else { gl::FALSE };
                gl::UniformMatrix2fv(location, 1, transpose, v[0].as_ptr())
            }
            UniformVariable::Matrix3f(v, transpose) => {
                let transpose = if transpose { gl::TRUE } else { gl::FALSE };
                gl::UniformMatrix3fv(location, 1, transpose, v[0].as_ptr())
            }
            UniformVariable::Matrix4f(v, transpose) => {
                let transpose = if transpose { gl::TRUE } else { gl::FALSE };
                gl::UniformMatrix4fv(location, 1, transpose, v[0].as_ptr())
            }
            UniformVariable::Matrix2d(v, transpose) => {
                let transpose = if transpose { gl::TRUE } else { gl::FALSE };
                gl::UniformMatrix2dv(location, 1, transpose, v[0].as_ptr())
            }
            UniformVariable::Matrix3d(v, transpose) => {
                let transpose = if transpose { gl::TRUE } else { gl::FALSE };
                gl::UniformMatrix3dv(location, 1, transpose, v[0].as_ptr())
            }
            UniformVariable::Matrix4d(v, transpose) => {
                let transpose = if transpose { gl::TRUE } else { gl::FALSE };
                gl::UniformMatrix4dv(location, 1, transpose, v[0].as_ptr())
            }
        }

        check()
    }
}

unsafe fn check() -> Result<()> {
    match gl::GetError() {
        gl::NO_ERROR => Ok(()),

        gl::INVALID_ENUM => Err(Error::Backend(
            "[GL] An unacceptable value is specified for an enumerated argument.".into(),
        )),

        gl::INVALID_VALUE => Err(Error::Backend("[GL] A numeric argument is out of range.".into())),

        gl::INVALID_OPERATION => Err(Error::Backend(
            "[GL] The specified operation is not allowed in the current state.".into(),
        )),

        gl::INVALID_FRAMEBUFFER_OPERATION => Err(Error::Backend(
            "[GL] The command is trying to render to or read from the framebuffer while the \
             currently bound framebuffer is not framebuffer complete."
                .into(),
        )),

        gl::OUT_OF_MEMORY => Err(Error::Backend(
            "[GL] There is not enough memory left to execute the command.".into(),
        )),

        _ => Err(Error::Backend("[GL] Oops, Unknown OpenGL error.".into())),
    }
}
