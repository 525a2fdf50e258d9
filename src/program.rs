//! The shader program object, its attachment bookkeeping and the binding
//! context.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::backends::VisitorRef;
use crate::errors::{Error, Result};
use crate::shader::ShaderObject;
use crate::uniform::UniformVariable;

/// Shared reference to a shader object held inside a program's attachment
/// collection. The object stays alive as long as either the program or an
/// external holder keeps a reference.
pub type ObjectRef = Rc<ShaderObject>;

/// A linked-or-unlinked program object owning a mutable set of attached
/// shader objects. The wrapped handle is released when the program is
/// dropped; the attached objects' lifetimes are governed by their own
/// reference counts.
pub struct ShaderProgram {
    visitor: VisitorRef,
    id: u32,
    objects: SmallVec<[ObjectRef; 4]>,
    linked: bool,
    locations: RefCell<HashMap<String, i32>>,
}

impl ShaderProgram {
    pub fn new(visitor: &VisitorRef) -> Result<Self> {
        let id = unsafe { visitor.borrow_mut().create_program()? };
        if id == 0 {
            return Err(Error::AllocationFailure("shader program"));
        }

        Ok(ShaderProgram {
            visitor: Rc::clone(visitor),
            id,
            objects: SmallVec::new(),
            linked: false,
            locations: RefCell::new(HashMap::new()),
        })
    }

    /// Creates a program and attaches every object of `objects` to it.
    pub fn with_objects<I>(visitor: &VisitorRef, objects: I) -> Result<Self>
    where
        I: IntoIterator<Item = ShaderObject>,
    {
        let mut program = Self::new(visitor)?;
        for v in objects {
            program.attach(v)?;
        }
        Ok(program)
    }

    /// Takes ownership of a freshly constructed shader object, registers
    /// the attachment and returns the shared reference under which the
    /// object is tracked from now on.
    pub fn attach(&mut self, object: ShaderObject) -> Result<ObjectRef> {
        let object = Rc::new(object);
        self.attach_shared(&object)?;
        Ok(object)
    }

    /// Attaches an already shared shader object unless it is present
    /// already. De-duplication is by identity, not by content.
    pub fn attach_shared(&mut self, object: &ObjectRef) -> Result<()> {
        if self.objects.iter().any(|v| Rc::ptr_eq(v, object)) {
            return Ok(());
        }

        unsafe {
            self.visitor
                .borrow_mut()
                .attach_shader(self.id, object.id())?;
        }

        self.objects.push(Rc::clone(object));
        self.linked = false;
        Ok(())
    }

    /// Detaches the object if present. Detaching an object that was never
    /// attached is not an error.
    pub fn detach(&mut self, object: &ObjectRef) -> Result<()> {
        let position = self.objects.iter().position(|v| Rc::ptr_eq(v, object));
        if let Some(position) = position {
            unsafe {
                self.visitor
                    .borrow_mut()
                    .detach_shader(self.id, object.id())?;
            }

            self.objects.remove(position);
            self.linked = false;
        }

        Ok(())
    }

    /// Detaches every currently attached shader object.
    pub fn detach_all(&mut self) -> Result<()> {
        for v in &self.objects {
            unsafe {
                self.visitor.borrow_mut().detach_shader(self.id, v.id())?;
            }
        }

        self.objects.clear();
        self.linked = false;
        Ok(())
    }

    /// Links the attached shader objects into an executable program. On
    /// failure the linked flag stays false and the backend's link log is
    /// carried in the error.
    pub fn link(&mut self) -> Result<()> {
        self.linked = false;
        unsafe {
            self.visitor.borrow_mut().link_program(self.id)?;
        }

        let (successful, log) = self.link_errors()?;
        if !successful {
            return Err(Error::LinkFailure(log));
        }

        // Locations resolved against an earlier link are stale now.
        self.locations.borrow_mut().clear();
        self.linked = true;
        Ok(())
    }

    /// Returns the link status the backend reports for this program, along
    /// with its info log. The log is empty when the most recent link
    /// succeeded.
    pub fn link_errors(&self) -> Result<(bool, String)> {
        let mut v = self.visitor.borrow_mut();
        unsafe {
            let status = v.program_link_status(self.id)?;
            let log = if status {
                String::new()
            } else {
                v.program_link_log(self.id)?
            };
            Ok((status, log))
        }
    }

    /// True once the most recent `link` succeeded. Attaching or detaching
    /// resets the flag until the next successful link.
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// The attachment collection in insertion order.
    pub fn attached_objects(&self) -> &[ObjectRef] {
        &self.objects
    }

    /// The raw handle naming this program in the backend.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// True iff this program is the one currently marked bound in
    /// `binding`.
    pub fn bound(&self, binding: &Binding) -> bool {
        binding.bound_id() == Some(self.id)
    }

    /// Writes a uniform variable of the program. The program must be the
    /// currently bound one and `name` must resolve to a location at the
    /// most recent link.
    pub fn set_uniform<T>(&self, binding: &Binding, name: &str, variable: T) -> Result<()>
    where
        T: Into<UniformVariable>,
    {
        if !self.bound(binding) {
            return Err(Error::NotBound);
        }

        let location = self.uniform_location(name)?;
        unsafe {
            self.visitor
                .borrow_mut()
                .set_uniform(location, &variable.into())
        }
    }

    fn uniform_location(&self, name: &str) -> Result<i32> {
        let mut locations = self.locations.borrow_mut();
        if let Some(&location) = locations.get(name) {
            return Ok(location);
        }

        let location = unsafe { self.visitor.borrow_mut().uniform_location(self.id, name)? };
        match location {
            Some(location) => {
                locations.insert(name.to_owned(), location);
                Ok(location)
            }
            None => Err(Error::UniformUndefined(name.to_owned())),
        }
    }
}

impl fmt::Debug for ShaderProgram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("id", &self.id)
            .field("objects", &self.objects)
            .field("linked", &self.linked)
            .finish()
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        let result = unsafe { self.visitor.borrow_mut().delete_program(self.id) };
        if let Err(err) = result {
            warn!("Failed to release shader program {}. {}", self.id, err);
        }
    }
}

/// Tracks which program is currently bound. The underlying graphics API
/// keeps one active program per context, this type makes that piece of
/// state an explicit value instead of a hidden global. Create exactly one
/// per context and thread all bind-dependent calls through it.
pub struct Binding {
    visitor: VisitorRef,
    bound: Option<u32>,
}

impl Binding {
    pub fn new(visitor: &VisitorRef) -> Self {
        Binding {
            visitor: Rc::clone(visitor),
            bound: None,
        }
    }

    /// Makes `program` the currently bound program. Fails with `NotLinked`
    /// unless the program's most recent link succeeded.
    pub fn bind(&mut self, program: &ShaderProgram) -> Result<()> {
        if !program.is_linked() {
            return Err(Error::NotLinked);
        }

        unsafe {
            self.visitor.borrow_mut().use_program(Some(program.id()))?;
        }

        self.bound = Some(program.id());
        Ok(())
    }

    /// Clears the current binding to none.
    pub fn unbind(&mut self) -> Result<()> {
        unsafe {
            self.visitor.borrow_mut().use_program(None)?;
        }

        self.bound = None;
        Ok(())
    }

    /// The handle of the currently bound program, if any.
    pub fn bound_id(&self) -> Option<u32> {
        self.bound
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Binding").field("bound", &self.bound).finish()
    }
}
