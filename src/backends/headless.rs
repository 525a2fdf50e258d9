use std::collections::HashMap;

use super::Visitor;
use crate::errors::Result;
use crate::shader::ShaderStage;
use crate::uniform::UniformVariable;

/// A visitor that accepts every operation without touching a real device.
/// Handles come from a plain counter and registered sources are kept
/// around so that queries still round-trip; every compile and link is
/// reported as successful.
pub struct HeadlessVisitor {
    next_id: u32,
    sources: HashMap<u32, String>,
}

impl HeadlessVisitor {
    pub fn new() -> Self {
        HeadlessVisitor {
            next_id: 1,
            sources: HashMap::new(),
        }
    }

    fn allocate(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for HeadlessVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for HeadlessVisitor {
    unsafe fn create_shader(&mut self, _: ShaderStage) -> Result<u32> {
        Ok(self.allocate())
    }

    unsafe fn shader_source(&mut self, id: u32, source: &str) -> Result<()> {
        self.sources.insert(id, source.to_owned());
        Ok(())
    }

    unsafe fn compile_shader(&mut self, _: u32) -> Result<()> {
        Ok(())
    }

    unsafe fn shader_compile_status(&mut self, _: u32) -> Result<bool> {
        Ok(true)
    }

    unsafe fn shader_compile_log(&mut self, _: u32) -> Result<String> {
        Ok(String::new())
    }

    unsafe fn shader_source_text(&mut self, id: u32) -> Result<String> {
        Ok(self.sources.get(&id).cloned().unwrap_or_default())
    }

    unsafe fn delete_shader(&mut self, id: u32) -> Result<()> {
        self.sources.remove(&id);
        Ok(())
    }

    unsafe fn create_program(&mut self) -> Result<u32> {
        Ok(self.allocate())
    }

    unsafe fn attach_shader(&mut self, _: u32, _: u32) -> Result<()> {
        Ok(())
    }

    unsafe fn detach_shader(&mut self, _: u32, _: u32) -> Result<()> {
        Ok(())
    }

    unsafe fn link_program(&mut self, _: u32) -> Result<()> {
        Ok(())
    }

    unsafe fn program_link_status(&mut self, _: u32) -> Result<bool> {
        Ok(true)
    }

    unsafe fn program_link_log(&mut self, _: u32) -> Result<String> {
        Ok(String::new())
    }

    unsafe fn delete_program(&mut self, _: u32) -> Result<()> {
        Ok(())
    }

    unsafe fn use_program(&mut self, _: Option<u32>) -> Result<()> {
        Ok(())
    }

    unsafe fn uniform_location(&mut self, _: u32, _: &str) -> Result<Option<i32>> {
        Ok(Some(0))
    }

    unsafe fn set_uniform(&mut self, _: i32, _: &UniformVariable) -> Result<()> {
        Ok(())
    }
}
