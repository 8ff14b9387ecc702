use glam::{Mat4, Vec3};

use crate::types::SceneUniform;

/// Uniform name for the world-to-eye matrix
pub const VIEW_UNIFORM: &str = "view";
/// Uniform name for the eye-to-clip matrix
pub const PROJECTION_UNIFORM: &str = "projection";
/// Uniform name for the camera world position
pub const VIEW_POSITION_UNIFORM: &str = "viewPosition";

/// Named-uniform receiver. The view controller publishes exactly three
/// uniforms per frame: view matrix, projection matrix, view position.
pub trait ShaderSink {
    fn set_mat4(&mut self, name: &str, value: Mat4);
    fn set_vec3(&mut self, name: &str, value: Vec3);
}

/// CPU-side sink that stages the recognized uniforms into a POD block
/// ready for a GPU buffer upload. Unrecognized names are dropped.
#[derive(Debug, Default)]
pub struct UniformStage {
    uniform: SceneUniform,
}

impl UniformStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Staged uniform block for the renderer to upload
    pub fn uniform(&self) -> &SceneUniform {
        &self.uniform
    }
}

impl ShaderSink for UniformStage {
    fn set_mat4(&mut self, name: &str, value: Mat4) {
        match name {
            VIEW_UNIFORM => self.uniform.view = value.to_cols_array_2d(),
            PROJECTION_UNIFORM => self.uniform.projection = value.to_cols_array_2d(),
            _ => log::warn!("ignoring unknown mat4 uniform '{name}'"),
        }
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        match name {
            VIEW_POSITION_UNIFORM => self.uniform.view_position = value.to_array(),
            _ => log::warn!("ignoring unknown vec3 uniform '{name}'"),
        }
    }
}
