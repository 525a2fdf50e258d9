//! Shader stage descriptors and the RAII shader object.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;

use crate::backends::VisitorRef;
use crate::errors::{Error, Result};

/// The pipeline stage a shader unit targets.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
    TessControl,
    TessEvaluation,
    Compute,
}

impl Into<&'static str> for ShaderStage {
    fn into(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "Vertex",
            ShaderStage::Fragment => "Fragment",
            ShaderStage::Geometry => "Geometry",
            ShaderStage::TessControl => "TessControl",
            ShaderStage::TessEvaluation => "TessEvaluation",
            ShaderStage::Compute => "Compute",
        }
    }
}

impl FromStr for ShaderStage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Vertex" => Ok(ShaderStage::Vertex),
            "Fragment" => Ok(ShaderStage::Fragment),
            "Geometry" => Ok(ShaderStage::Geometry),
            "TessControl" => Ok(ShaderStage::TessControl),
            "TessEvaluation" => Ok(ShaderStage::TessEvaluation),
            "Compute" => Ok(ShaderStage::Compute),
            _ => Err(Error::StageParseFailure(s.into())),
        }
    }
}

/// Pairs a shader stage with a source file on disk. Descriptors are plain
/// values, the referenced file is only read when a `ShaderObject` is
/// constructed from them.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct ShaderFile {
    pub stage: ShaderStage,
    pub path: PathBuf,
}

impl ShaderFile {
    pub fn new<P: Into<PathBuf>>(stage: ShaderStage, path: P) -> Self {
        ShaderFile {
            stage,
            path: path.into(),
        }
    }
}

/// Pairs a shader stage with in-memory source text.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct ShaderSource {
    pub stage: ShaderStage,
    pub source: String,
}

impl ShaderSource {
    pub fn new<T: Into<String>>(stage: ShaderStage, source: T) -> Self {
        ShaderSource {
            stage,
            source: source.into(),
        }
    }
}

/// One compiled-or-compilable shader unit. The wrapped handle is released
/// when the object is dropped.
pub struct ShaderObject {
    visitor: VisitorRef,
    id: u32,
    stage: ShaderStage,
    origin: String,
}

impl ShaderObject {
    fn new(
        visitor: &VisitorRef,
        stage: ShaderStage,
        source: &str,
        origin: String,
    ) -> Result<Self> {
        let id = {
            let mut v = visitor.borrow_mut();
            let id = unsafe { v.create_shader(stage)? };
            if id == 0 {
                return Err(Error::AllocationFailure("shader object"));
            }

            if let Err(err) = unsafe { v.shader_source(id, source) } {
                let _ = unsafe { v.delete_shader(id) };
                return Err(err);
            }

            id
        };

        Ok(ShaderObject {
            visitor: Rc::clone(visitor),
            id,
            stage,
            origin,
        })
    }

    /// Constructs a shader object from in-memory source text. The origin
    /// of the object is reported as `"memory"`.
    pub fn from_source(visitor: &VisitorRef, desc: &ShaderSource) -> Result<Self> {
        Self::new(visitor, desc.stage, &desc.source, "memory".to_owned())
    }

    /// Constructs a shader object from the contents of `desc.path`.
    pub fn from_file(visitor: &VisitorRef, desc: &ShaderFile) -> Result<Self> {
        let source = fs::read_to_string(&desc.path)
            .map_err(|err| Error::FileReadFailure(desc.path.clone(), err.to_string()))?;
        Self::new(visitor, desc.stage, &source, desc.path.display().to_string())
    }

    /// Invokes the backend's compile step and reads the result back.
    /// Re-compiling is permitted, later compiles overwrite earlier status.
    pub fn compile(&self) -> Result<()> {
        unsafe {
            self.visitor.borrow_mut().compile_shader(self.id)?;
        }

        let (successful, log) = self.compile_errors()?;
        if successful {
            Ok(())
        } else {
            Err(Error::CompileFailure(log))
        }
    }

    /// Returns the compile status the backend reports for this object,
    /// along with its info log. The log is empty when the most recent
    /// compile succeeded.
    pub fn compile_errors(&self) -> Result<(bool, String)> {
        let mut v = self.visitor.borrow_mut();
        unsafe {
            let status = v.shader_compile_status(self.id)?;
            let log = if status {
                String::new()
            } else {
                v.shader_compile_log(self.id)?
            };
            Ok((status, log))
        }
    }

    /// Reads back the source text currently registered with the handle.
    pub fn source(&self) -> Result<String> {
        unsafe { self.visitor.borrow_mut().shader_source_text(self.id) }
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// A human readable description of where the source text came from,
    /// the file path or `"memory"`.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The raw handle naming this object in the backend.
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Debug for ShaderObject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ShaderObject")
            .field("id", &self.id)
            .field("stage", &self.stage)
            .field("origin", &self.origin)
            .finish()
    }
}

impl Drop for ShaderObject {
    fn drop(&mut self) {
        let result = unsafe { self.visitor.borrow_mut().delete_shader(self.id) };
        if let Err(err) = result {
            warn!("Failed to release shader object {}. {}", self.id, err);
        }
    }
}
