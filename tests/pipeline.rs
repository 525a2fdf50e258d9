extern crate glint;

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::rc::Rc;

use glint::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[derive(Clone)]
struct Counters {
    created: Rc<Cell<usize>>,
    compiled: Rc<Cell<usize>>,
    deleted: Rc<Cell<usize>>,
}

/// Scripted stand-in for a real device. Behaves like the headless backend,
/// except that it fails compilation of any source carrying an `#error`
/// directive and only resolves the uniform names it was given.
struct ScriptedVisitor {
    next_id: u32,
    sources: HashMap<u32, String>,
    uniforms: HashSet<String>,
    counters: Counters,
}

fn scripted(uniforms: &[&str]) -> (VisitorRef, Counters) {
    let counters = Counters {
        created: Rc::new(Cell::new(0)),
        compiled: Rc::new(Cell::new(0)),
        deleted: Rc::new(Cell::new(0)),
    };

    let visitor = ScriptedVisitor {
        next_id: 1,
        sources: HashMap::new(),
        uniforms: uniforms.iter().map(|v| v.to_string()).collect(),
        counters: counters.clone(),
    };

    (Rc::new(RefCell::new(visitor)), counters)
}

impl ScriptedVisitor {
    fn compiles(&self, id: u32) -> bool {
        self.sources
            .get(&id)
            .map(|v| !v.contains("#error"))
            .unwrap_or(true)
    }
}

impl Visitor for ScriptedVisitor {
    unsafe fn create_shader(&mut self, _: ShaderStage) -> Result<u32> {
        self.counters.created.set(self.counters.created.get() + 1);
        let id = self.next_id;
        self.next_id += 1;
        Ok(id)
    }

    unsafe fn shader_source(&mut self, id: u32, source: &str) -> Result<()> {
        self.sources.insert(id, source.to_owned());
        Ok(())
    }

    unsafe fn compile_shader(&mut self, _: u32) -> Result<()> {
        self.counters.compiled.set(self.counters.compiled.get() + 1);
        Ok(())
    }

    unsafe fn shader_compile_status(&mut self, id: u32) -> Result<bool> {
        Ok(self.compiles(id))
    }

    unsafe fn shader_compile_log(&mut self, id: u32) -> Result<String> {
        if self.compiles(id) {
            Ok(String::new())
        } else {
            Ok("ERROR: 0:3: '#error' : deliberately broken".to_owned())
        }
    }

    unsafe fn shader_source_text(&mut self, id: u32) -> Result<String> {
        Ok(self.sources.get(&id).cloned().unwrap_or_default())
    }

    unsafe fn delete_shader(&mut self, id: u32) -> Result<()> {
        self.counters.deleted.set(self.counters.deleted.get() + 1);
        self.sources.remove(&id);
        Ok(())
    }

    unsafe fn create_program(&mut self) -> Result<u32> {
        let id = self.next_id;
        self.next_id += 1;
        Ok(id)
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

    unsafe fn uniform_location(&mut self, _: u32, name: &str) -> Result<Option<i32>> {
        if self.uniforms.contains(name) {
            Ok(Some(1))
        } else {
            Ok(None)
        }
    }

    unsafe fn set_uniform(&mut self, _: i32, _: &UniformVariable) -> Result<()> {
        Ok(())
    }
}

#[test]
fn source_round_trip() {
    let video = backends::new_headless();

    let src = "#version 330 core\nvoid main() {}\n";
    let object =
        ShaderObject::from_source(&video, &ShaderSource::new(ShaderStage::Vertex, src)).unwrap();

    assert_eq!(object.source().unwrap(), src);
    assert_eq!(object.stage(), ShaderStage::Vertex);
    assert_eq!(object.origin(), "memory");
}

#[test]
fn compile_reports_status_and_log() {
    let (video, _) = scripted(&[]);

    let good =
        ShaderObject::from_source(&video, &ShaderSource::new(ShaderStage::Vertex, "void main() {}"))
            .unwrap();
    good.compile().unwrap();
    assert_eq!(good.compile_errors().unwrap(), (true, String::new()));

    let bad = ShaderObject::from_source(
        &video,
        &ShaderSource::new(ShaderStage::Fragment, "#error nope"),
    )
    .unwrap();

    match bad.compile() {
        Err(Error::CompileFailure(log)) => assert!(!log.is_empty()),
        other => panic!("unexpected result {:?}", other.map(|_| ())),
    }

    let (status, log) = bad.compile_errors().unwrap();
    assert!(!status);
    assert!(!log.is_empty());
}

#[test]
fn unreadable_file_fails_construction() {
    let video = backends::new_headless();

    let desc = ShaderFile::new(ShaderStage::Vertex, fixture("missing.vert"));
    match ShaderObject::from_file(&video, &desc) {
        Err(Error::FileReadFailure(path, _)) => assert_eq!(path, desc.path),
        other => panic!("unexpected result {:?}", other.map(|_| ())),
    }
}

#[test]
fn loader_rejects_empty_list_without_allocating() {
    let (video, counters) = scripted(&[]);

    match load_shaders(&video, &[]) {
        Err(Error::EmptyFileList) => {}
        other => panic!("unexpected result {:?}", other.map(|_| ())),
    }

    assert_eq!(counters.created.get(), 0);
}

#[test]
fn loader_aggregates_compile_failures() {
    let (video, counters) = scripted(&[]);

    let files = [
        ShaderFile::new(ShaderStage::Vertex, fixture("triangle.vert")),
        ShaderFile::new(ShaderStage::Fragment, fixture("broken.frag")),
        ShaderFile::new(ShaderStage::Fragment, fixture("triangle.frag")),
    ];

    let report = match load_shaders(&video, &files) {
        Err(Error::CompileFailure(report)) => report,
        other => panic!("unexpected result {:?}", other.map(|_| ())),
    };

    // Every shader of the batch is attempted before the loader fails, and
    // only the broken one ends up in the report.
    assert_eq!(counters.compiled.get(), 3);
    assert!(report.contains("broken.frag"));
    assert!(!report.contains("triangle.vert"));
    assert!(!report.contains("triangle.frag"));

    // No program came out of the failing batch, every shader object has
    // been released again.
    assert_eq!(counters.deleted.get(), counters.created.get());
}

#[test]
fn loader_returns_linked_unbound_program() {
    let video = backends::new_headless();

    let files = [
        ShaderFile::new(ShaderStage::Vertex, fixture("triangle.vert")),
        ShaderFile::new(ShaderStage::Fragment, fixture("triangle.frag")),
    ];

    let program = load_shaders(&video, &files).unwrap();
    assert!(program.is_linked());
    assert_eq!(program.attached_objects().len(), 2);
    assert_eq!(program.link_errors().unwrap(), (true, String::new()));

    let mut binding = Binding::new(&video);
    assert!(!program.bound(&binding));

    binding.bind(&program).unwrap();
    assert!(program.bound(&binding));
    assert_eq!(binding.bound_id(), Some(program.id()));

    binding.unbind().unwrap();
    assert!(!program.bound(&binding));
    assert_eq!(binding.bound_id(), None);
}

#[test]
fn binding_refuses_unlinked_program() {
    let video = backends::new_headless();

    let program = ShaderProgram::new(&video).unwrap();
    let mut binding = Binding::new(&video);

    match binding.bind(&program) {
        Err(Error::NotLinked) => {}
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn set_uniform_requires_binding() {
    let video = backends::new_headless();

    let files = [
        ShaderFile::new(ShaderStage::Vertex, fixture("triangle.vert")),
        ShaderFile::new(ShaderStage::Fragment, fixture("triangle.frag")),
    ];

    let program = load_shaders(&video, &files).unwrap();
    let mut binding = Binding::new(&video);

    // Not bound yet, the uniform name does not even get resolved.
    match program.set_uniform(&binding, "u_color", [0.0f32, 0.0, 0.0, 1.0]) {
        Err(Error::NotBound) => {}
        other => panic!("unexpected result {:?}", other),
    }

    binding.bind(&program).unwrap();
    program
        .set_uniform(&binding, "u_color", [0.0f32, 0.0, 0.0, 1.0])
        .unwrap();
}

#[test]
fn set_uniform_rejects_unknown_names() {
    let (video, _) = scripted(&["u_mvp", "u_color"]);

    let files = [
        ShaderFile::new(ShaderStage::Vertex, fixture("triangle.vert")),
        ShaderFile::new(ShaderStage::Fragment, fixture("triangle.frag")),
    ];

    let program = load_shaders(&video, &files).unwrap();
    let mut binding = Binding::new(&video);
    binding.bind(&program).unwrap();

    let identity = [
        [1.0f32, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];
    program.set_uniform(&binding, "u_mvp", identity).unwrap();

    match program.set_uniform(&binding, "u_missing", 1.0f32) {
        Err(Error::UniformUndefined(name)) => assert_eq!(name, "u_missing"),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn attach_deduplicates_by_identity() {
    let video = backends::new_headless();

    let mut program = ShaderProgram::new(&video).unwrap();
    let object = ShaderObject::from_source(
        &video,
        &ShaderSource::new(ShaderStage::Vertex, "void main() {}"),
    )
    .unwrap();

    let shared = program.attach(object).unwrap();
    assert_eq!(program.attached_objects().len(), 1);

    // Same identity, attach is a no-op.
    program.attach_shared(&shared).unwrap();
    assert_eq!(program.attached_objects().len(), 1);

    // Same source text but a different object, this one counts.
    let other = program
        .attach(
            ShaderObject::from_source(
                &video,
                &ShaderSource::new(ShaderStage::Vertex, "void main() {}"),
            )
            .unwrap(),
        )
        .unwrap();
    assert_eq!(program.attached_objects().len(), 2);
    assert!(!Rc::ptr_eq(&shared, &other));
}

#[test]
fn detach_is_identity_based_and_tolerates_absence() {
    let video = backends::new_headless();

    let mut program = ShaderProgram::new(&video).unwrap();
    let first = program
        .attach(
            ShaderObject::from_source(
                &video,
                &ShaderSource::new(ShaderStage::Vertex, "void main() {}"),
            )
            .unwrap(),
        )
        .unwrap();
    let second = program
        .attach(
            ShaderObject::from_source(
                &video,
                &ShaderSource::new(ShaderStage::Fragment, "void main() {}"),
            )
            .unwrap(),
        )
        .unwrap();

    program.link().unwrap();
    assert!(program.is_linked());

    program.detach(&first).unwrap();
    assert_eq!(program.attached_objects().len(), 1);
    assert!(Rc::ptr_eq(&program.attached_objects()[0], &second));

    // Attachment state changed, the previous link is not trustworthy
    // anymore.
    assert!(!program.is_linked());

    // Detaching an object that is not attached is a no-op.
    program.detach(&first).unwrap();
    assert_eq!(program.attached_objects().len(), 1);

    program.link().unwrap();
    assert!(program.is_linked());

    program.detach_all().unwrap();
    assert!(program.attached_objects().is_empty());
    assert!(!program.is_linked());
}

#[test]
fn dropping_the_program_releases_exclusively_owned_objects() {
    let (video, counters) = scripted(&[]);

    {
        let files = [
            ShaderFile::new(ShaderStage::Vertex, fixture("triangle.vert")),
            ShaderFile::new(ShaderStage::Fragment, fixture("triangle.frag")),
        ];
        let program = load_shaders(&video, &files).unwrap();
        assert_eq!(counters.created.get(), 2);
        assert_eq!(counters.deleted.get(), 0);
        drop(program);
    }

    assert_eq!(counters.deleted.get(), counters.created.get());
}

#[test]
fn shared_objects_outlive_the_program() {
    let (video, counters) = scripted(&[]);

    let object = ShaderObject::from_source(
        &video,
        &ShaderSource::new(ShaderStage::Vertex, "void main() {}"),
    )
    .unwrap();
    object.compile().unwrap();

    let shared = {
        let mut program = ShaderProgram::new(&video).unwrap();
        let shared = program.attach(object).unwrap();
        drop(program);
        shared
    };

    // The program is gone, the object is not.
    assert_eq!(counters.deleted.get(), 0);
    assert_eq!(shared.stage(), ShaderStage::Vertex);

    drop(shared);
    assert_eq!(counters.deleted.get(), 1);
}
