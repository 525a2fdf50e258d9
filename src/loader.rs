//! Batch loading of shader source files into a linked program.

use crate::backends::VisitorRef;
use crate::errors::{Error, Result};
use crate::program::ShaderProgram;
use crate::shader::{ShaderFile, ShaderObject};

/// Loads every shader of `files`, compiles them, attaches them to a fresh
/// program and links it.
///
/// Construction failures (unreadable files, refused allocations) fail
/// fast. Compile failures do not: every shader of the batch is attempted
/// so that one pass reports all broken sources, each failure is logged and
/// the aggregated report is carried in the resulting error. A link failure
/// propagates as is.
pub fn load_shaders(visitor: &VisitorRef, files: &[ShaderFile]) -> Result<ShaderProgram> {
    if files.is_empty() {
        return Err(Error::EmptyFileList);
    }

    let mut objects = Vec::with_capacity(files.len());
    for file in files {
        objects.push(ShaderObject::from_file(visitor, file)?);
    }

    compile_all(&objects)?;

    let mut program = ShaderProgram::with_objects(visitor, objects)?;
    program.link()?;
    Ok(program)
}

fn compile_all(objects: &[ShaderObject]) -> Result<()> {
    let mut report = String::new();
    for object in objects {
        match object.compile() {
            Ok(()) => {}
            Err(Error::CompileFailure(log)) => {
                error!("Failed to compile shader from {}.\n{}", object.origin(), log);

                if !report.is_empty() {
                    report.push('\n');
                }
                report.push_str(object.origin());
                report.push_str(":\n");
                report.push_str(&log);
            }
            Err(err) => return Err(err),
        }
    }

    if report.is_empty() {
        Ok(())
    } else {
        Err(Error::CompileFailure(report))
    }
}
