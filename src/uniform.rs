//! Typed uniform variables and the conversions that feed them.
//!
//! Matrix variants are assumed to be supplied in column major order with an
//! optional transpose flag.

use cgmath::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// Uniform variable type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UniformVariableType {
    I32,
    U32,
    F32,
    F64,
    Vector2f,
    Vector3f,
    Vector4f,
    Vector2d,
    Vector3d,
    Vector4d,
    Vector2i,
    Vector3i,
    Vector4i,
    Vector2u,
    Vector3u,
    Vector4u,
    Matrix2f,
    Matrix3f,
    Matrix4f,
    Matrix2d,
    Matrix3d,
    Matrix4d,
}

/// Uniform variable for a shader program object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformVariable {
    I32(i32),
    U32(u32),
    F32(f32),
    F64(f64),
    Vector2f([f32; 2]),
    Vector3f([f32; 3]),
    Vector4f([f32; 4]),
    Vector2d([f64; 2]),
    Vector3d([f64; 3]),
    Vector4d([f64; 4]),
    Vector2i([i32; 2]),
    Vector3i([i32; 3]),
    Vector4i([i32; 4]),
    Vector2u([u32; 2]),
    Vector3u([u32; 3]),
    Vector4u([u32; 4]),
    Matrix2f([[f32; 2]; 2], bool),
    Matrix3f([[f32; 3]; 3], bool),
    Matrix4f([[f32; 4]; 4], bool),
    Matrix2d([[f64; 2]; 2], bool),
    Matrix3d([[f64; 3]; 3], bool),
    Matrix4d([[f64; 4]; 4], bool),
}

impl UniformVariable {
    pub fn variable_type(&self) -> UniformVariableType {
        match *self {
            UniformVariable::I32(_) => UniformVariableType::I32,
            UniformVariable::U32(_) => UniformVariableType::U32,
            UniformVariable::F32(_) => UniformVariableType::F32,
            UniformVariable::F64(_) => UniformVariableType::F64,
            UniformVariable::Vector2f(_) => UniformVariableType::Vector2f,
            UniformVariable::Vector3f(_) => UniformVariableType::Vector3f,
            UniformVariable::Vector4f(_) => UniformVariableType::Vector4f,
            UniformVariable::Vector2d(_) => UniformVariableType::Vector2d,
            UniformVariable::Vector3d(_) => UniformVariableType::Vector3d,
            UniformVariable::Vector4d(_) => UniformVariableType::Vector4d,
            UniformVariable::Vector2i(_) => UniformVariableType::Vector2i,
            UniformVariable::Vector3i(_) => UniformVariableType::Vector3i,
            UniformVariable::Vector4i(_) => UniformVariableType::Vector4i,
            UniformVariable::Vector2u(_) => UniformVariableType::Vector2u,
            UniformVariable::Vector3u(_) => UniformVariableType::Vector3u,
            UniformVariable::Vector4u(_) => UniformVariableType::Vector4u,
            UniformVariable::Matrix2f(_, _) => UniformVariableType::Matrix2f,
            UniformVariable::Matrix3f(_, _) => UniformVariableType::Matrix3f,
            UniformVariable::Matrix4f(_, _) => UniformVariableType::Matrix4f,
            UniformVariable::Matrix2d(_, _) => UniformVariableType::Matrix2d,
            UniformVariable::Matrix3d(_, _) => UniformVariableType::Matrix3d,
            UniformVariable::Matrix4d(_, _) => UniformVariableType::Matrix4d,
        }
    }
}

impl Into<UniformVariable> for i32 {
    fn into(self) -> UniformVariable {
        UniformVariable::I32(self)
    }
}

impl Into<UniformVariable> for u32 {
    fn into(self) -> UniformVariable {
        UniformVariable::U32(self)
    }
}

impl Into<UniformVariable> for f32 {
    fn into(self) -> UniformVariable {
        UniformVariable::F32(self)
    }
}

impl Into<UniformVariable> for f64 {
    fn into(self) -> UniformVariable {
        UniformVariable::F64(self)
    }
}

impl Into<UniformVariable> for [f32; 2] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector2f(self)
    }
}

impl Into<UniformVariable> for [f32; 3] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector3f(self)
    }
}

impl Into<UniformVariable> for [f32; 4] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector4f(self)
    }
}

impl Into<UniformVariable> for [f64; 2] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector2d(self)
    }
}

impl Into<UniformVariable> for [f64; 3] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector3d(self)
    }
}

impl Into<UniformVariable> for [f64; 4] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector4d(self)
    }
}

impl Into<UniformVariable> for [i32; 2] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector2i(self)
    }
}

impl Into<UniformVariable> for [i32; 3] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector3i(self)
    }
}

impl Into<UniformVariable> for [i32; 4] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector4i(self)
    }
}

impl Into<UniformVariable> for [u32; 2] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector2u(self)
    }
}

impl Into<UniformVariable> for [u32; 3] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector3u(self)
    }
}

impl Into<UniformVariable> for [u32; 4] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector4u(self)
    }
}

impl Into<UniformVariable> for Vector2<f32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector2f(*self.as_ref())
    }
}

impl Into<UniformVariable> for Vector3<f32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector3f(*self.as_ref())
    }
}

impl Into<UniformVariable> for Vector4<f32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector4f(*self.as_ref())
    }
}

impl Into<UniformVariable> for Vector2<f64> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector2d(*self.as_ref())
    }
}

impl Into<UniformVariable> for Vector3<f64> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector3d(*self.as_ref())
    }
}

impl Into<UniformVariable> for Vector4<f64> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector4d(*self.as_ref())
    }
}

impl Into<UniformVariable> for Vector2<i32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector2i(*self.as_ref())
    }
}

impl Into<UniformVariable> for Vector3<i32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector3i(*self.as_ref())
    }
}

impl Into<UniformVariable> for Vector4<i32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector4i(*self.as_ref())
    }
}

impl Into<UniformVariable> for Vector2<u32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector2u(*self.as_ref())
    }
}

impl Into<UniformVariable> for Vector3<u32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector3u(*self.as_ref())
    }
}

impl Into<UniformVariable> for Vector4<u32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector4u(*self.as_ref())
    }
}

impl Into<UniformVariable> for Matrix2<f32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix2f(*self.as_ref(), false)
    }
}

impl Into<UniformVariable> for Matrix3<f32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix3f(*self.as_ref(), false)
    }
}

impl Into<UniformVariable> for Matrix4<f32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix4f(*self.as_ref(), false)
    }
}

impl Into<UniformVariable> for Matrix2<f64> {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix2d(*self.as_ref(), false)
    }
}

impl Into<UniformVariable> for Matrix3<f64> {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix3d(*self.as_ref(), false)
    }
}

impl Into<UniformVariable> for Matrix4<f64> {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix4d(*self.as_ref(), false)
    }
}

impl Into<UniformVariable> for [[f32; 2]; 2] {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix2f(self, false)
    }
}

impl Into<UniformVariable> for [[f32; 3]; 3] {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix3f(self, false)
    }
}

impl Into<UniformVariable> for [[f32; 4]; 4] {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix4f(self, false)
    }
}

impl Into<UniformVariable> for [[f64; 2]; 2] {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix2d(self, false)
    }
}

impl Into<UniformVariable> for [[f64; 3]; 3] {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix3d(self, false)
    }
}

impl Into<UniformVariable> for [[f64; 4]; 4] {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix4d(self, false)
    }
}
