//! A small RAII wrapper around the OpenGL shader pipeline.
//!
//! `glint` compiles shader source into [`ShaderObject`]s, links them into a
//! [`ShaderProgram`], binds the program through an explicit [`Binding`]
//! context and writes typed uniform variables. Every wrapped handle is
//! released when its owner goes out of scope.
//!
//! All resource operations are routed through a backend [`Visitor`], so the
//! same pipeline code runs against a live OpenGL context
//! ([`backends::new`]) or against the headless backend
//! ([`backends::new_headless`]) in tests and on machines without a
//! windowing system.
//!
//! ```rust,no_run
//! use glint::prelude::*;
//!
//! fn run() -> Result<()> {
//!     // Requires a live OpenGL context on the current thread.
//!     let video = glint::backends::new()?;
//!
//!     let program = load_shaders(
//!         &video,
//!         &[
//!             ShaderFile::new(ShaderStage::Vertex, "assets/blit.vert"),
//!             ShaderFile::new(ShaderStage::Fragment, "assets/blit.frag"),
//!         ],
//!     )?;
//!
//!     let mut binding = Binding::new(&video);
//!     binding.bind(&program)?;
//!     program.set_uniform(&binding, "u_scale", 0.5f32)?;
//!     binding.unbind()?;
//!     Ok(())
//! }
//! ```
//!
//! [`ShaderObject`]: shader/struct.ShaderObject.html
//! [`ShaderProgram`]: program/struct.ShaderProgram.html
//! [`Binding`]: program/struct.Binding.html
//! [`Visitor`]: backends/trait.Visitor.html
//! [`backends::new`]: backends/fn.new.html
//! [`backends::new_headless`]: backends/fn.new_headless.html

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub mod backends;
pub mod errors;
pub mod loader;
pub mod prelude;
pub mod program;
pub mod shader;
pub mod uniform;

pub use self::errors::{Error, Result};
pub use self::loader::load_shaders;
pub use self::program::{Binding, ObjectRef, ShaderProgram};
pub use self::shader::{ShaderFile, ShaderObject, ShaderSource, ShaderStage};
pub use self::uniform::{UniformVariable, UniformVariableType};
