use glam::{DVec3, EulerRot, Mat4};

use super::animate::Animator;
use super::{MaterialId, MeshId};

/// Position / rotation / scale of a node.
///
/// Stored as `f64` so accumulated per-tick increments keep their precision
/// over long runs; narrowed to an `f32` matrix only at the GPU boundary.
/// Rotation is XYZ Euler angles in radians.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: DVec3,
    pub rotation: DVec3,
    pub scale: DVec3,
}

impl Transform {
    /// Model matrix for the globals/model uniform, `f32` for upload.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position.as_vec3())
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x as f32,
                self.rotation.y as f32,
                self.rotation.z as f32,
            )
            * Mat4::from_scale(self.scale.as_vec3())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }
}

/// A renderable: one mesh drawn with one material at one transform.
#[derive(Debug, Copy, Clone)]
pub struct Node {
    pub mesh: MeshId,
    pub material: MaterialId,
    pub transform: Transform,
    pub animator: Option<Animator>,
}

impl Node {
    /// Creates a node at the identity transform with no animator.
    pub fn new(mesh: MeshId, material: MaterialId) -> Self {
        Self {
            mesh,
            material,
            transform: Transform::default(),
            animator: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn identity_transform_is_identity_matrix() {
        let t = Transform::default();
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn translation_lands_in_last_column() {
        let t = Transform {
            position: DVec3::new(-2.0, 0.5, 3.0),
            ..Transform::default()
        };
        assert_eq!(t.matrix().col(3), Vec4::new(-2.0, 0.5, 3.0, 1.0));
    }

    #[test]
    fn scale_is_applied_before_translation() {
        let t = Transform {
            position: DVec3::new(1.0, 0.0, 0.0),
            scale: DVec3::splat(2.0),
            ..Transform::default()
        };
        let p = t.matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((p.x - 3.0).abs() < 1e-6);
    }
}
