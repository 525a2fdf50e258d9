pub use crate::backends;
pub use crate::backends::{Visitor, VisitorRef};

pub use crate::errors::{Error, Result};
pub use crate::loader::load_shaders;
pub use crate::program::{Binding, ObjectRef, ShaderProgram};
pub use crate::shader::{ShaderFile, ShaderObject, ShaderSource, ShaderStage};
pub use crate::uniform::{UniformVariable, UniformVariableType};
