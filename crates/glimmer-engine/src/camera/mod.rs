//! Perspective camera.
//!
//! CPU-side only: produces the view-projection matrix uploaded to the
//! globals uniform. Resize handling is a pure aspect-ratio recomputation,
//! independent of the animation clocks.

use glam::{Mat4, Vec3};

/// Perspective camera looking at a fixed target.
#[derive(Debug, Copy, Clone)]
pub struct Camera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Camera {
    /// Creates a camera at `position` looking at the origin.
    ///
    /// Defaults match the demos: 75° vertical fov, near 0.1, far 1000.
    pub fn new(position: Vec3, aspect: f32) -> Self {
        Self {
            fov_y: 75f32.to_radians(),
            aspect,
            z_near: 0.1,
            z_far: 1000.0,
            position,
            target: Vec3::ZERO,
        }
    }

    /// Recomputes the aspect ratio from a viewport size.
    ///
    /// Aspect is exactly `width / height`. Non-positive sizes (a minimized
    /// window reports 0x0) leave the previous aspect in place.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far);
        let view = Mat4::look_at_rh(self.position, self.target, Vec3::Y);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_is_exact_ratio() {
        let mut cam = Camera::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
        cam.set_viewport(1920.0, 1080.0);
        assert_eq!(cam.aspect, 1920.0 / 1080.0);
        assert!((cam.aspect - 1.7778).abs() < 1e-3);
    }

    #[test]
    fn zero_size_viewport_keeps_previous_aspect() {
        let mut cam = Camera::new(Vec3::new(0.0, 0.0, 5.0), 4.0 / 3.0);
        cam.set_viewport(0.0, 1080.0);
        cam.set_viewport(1920.0, 0.0);
        assert_eq!(cam.aspect, 4.0 / 3.0);
    }

    #[test]
    fn set_viewport_is_idempotent() {
        let mut cam = Camera::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
        cam.set_viewport(800.0, 600.0);
        let first = cam.aspect;
        cam.set_viewport(800.0, 600.0);
        assert_eq!(cam.aspect, first);
    }

    #[test]
    fn view_proj_is_finite() {
        let cam = Camera::new(Vec3::new(0.0, 0.0, 5.0), 16.0 / 9.0);
        let m = cam.view_proj();
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
