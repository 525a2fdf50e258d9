//! Error taxonomy of the shader pipeline wrapper.
//!
//! Compile and link failures carry the backend's info log verbatim, so the
//! diagnostics a driver reports end up in the error a caller inspects.

use std::path::PathBuf;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Could not allocate {}.", _0)]
    AllocationFailure(&'static str),
    #[fail(display = "Could not read shader source from {:?}. {}", _0, _1)]
    FileReadFailure(PathBuf, String),
    #[fail(display = "Failed to compile shader, errors:\n{}", _0)]
    CompileFailure(String),
    #[fail(display = "Failed to link shader program, errors:\n{}", _0)]
    LinkFailure(String),
    #[fail(display = "Shader program is not linked.")]
    NotLinked,
    #[fail(display = "Shader program is not the currently bound program.")]
    NotBound,
    #[fail(display = "Uniform({:?}) is undefined in shader sources.", _0)]
    UniformUndefined(String),
    #[fail(display = "Can not parse shader stage from str {:?}.", _0)]
    StageParseFailure(String),
    #[fail(display = "Can not load shaders from an empty list of files.")]
    EmptyFileList,
    #[fail(display = "Backend: {}", _0)]
    Backend(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;
