//! The backend of the wrapper, which is responsible for only one thing:
//! performing raw resource operations against the underlying graphics
//! API.

pub mod gl;
pub mod headless;

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::Result;
use crate::shader::ShaderStage;
use crate::uniform::UniformVariable;

/// Shared handle to a backend visitor. Every wrapper object keeps one so
/// that its raw handle can be released on drop. `Rc` keeps the whole
/// pipeline single threaded, which matches the one-context-one-thread
/// usage model of the underlying API.
pub type VisitorRef = Rc<RefCell<dyn Visitor>>;

/// Raw resource operations over opaque integer handles. `0` is never a
/// valid handle.
///
/// The methods are unsafe since implementations are free to assume a live
/// graphics context on the calling thread.
pub trait Visitor {
    unsafe fn create_shader(&mut self, stage: ShaderStage) -> Result<u32>;
    unsafe fn shader_source(&mut self, id: u32, source: &str) -> Result<()>;
    unsafe fn compile_shader(&mut self, id: u32) -> Result<()>;
    unsafe fn shader_compile_status(&mut self, id: u32) -> Result<bool>;
    unsafe fn shader_compile_log(&mut self, id: u32) -> Result<String>;
    unsafe fn shader_source_text(&mut self, id: u32) -> Result<String>;
    unsafe fn delete_shader(&mut self, id: u32) -> Result<()>;

    unsafe fn create_program(&mut self) -> Result<u32>;
    unsafe fn attach_shader(&mut self, program: u32, shader: u32) -> Result<()>;
    unsafe fn detach_shader(&mut self, program: u32, shader: u32) -> Result<()>;
    unsafe fn link_program(&mut self, program: u32) -> Result<()>;
    unsafe fn program_link_status(&mut self, program: u32) -> Result<bool>;
    unsafe fn program_link_log(&mut self, program: u32) -> Result<String>;
    unsafe fn delete_program(&mut self, program: u32) -> Result<()>;

    unsafe fn use_program(&mut self, program: Option<u32>) -> Result<()>;
    unsafe fn uniform_location(&mut self, program: u32, name: &str) -> Result<Option<i32>>;
    unsafe fn set_uniform(&mut self, location: i32, variable: &UniformVariable) -> Result<()>;
}

/// Creates the OpenGL backend. The current thread must hold a live OpenGL
/// context with its symbols loaded.
pub fn new() -> Result<VisitorRef> {
    let visitor = unsafe { self::gl::visitor::GLVisitor::new()? };
    Ok(Rc::new(RefCell::new(visitor)))
}

/// Creates a headless backend which never touches a real device. Handy
/// for tests and environments without a windowing system.
pub fn new_headless() -> VisitorRef {
    Rc::new(RefCell::new(self::headless::HeadlessVisitor::new()))
}
