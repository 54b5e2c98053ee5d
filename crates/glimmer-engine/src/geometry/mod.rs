//! CPU-side mesh data.
//!
//! Meshes are built on the CPU (cube, extruded glyphs) and uploaded once by
//! the renderer. Vertex layout is fixed: position + normal.

mod cube;

pub use cube::cube;

use bytemuck::{Pod, Zeroable};

/// GPU-ready mesh vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a quad as two triangles.
    ///
    /// `corners` must be in counter-clockwise order when viewed from the
    /// side the `normal` points toward (the renderer culls back faces).
    pub fn push_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3]) {
        let base = self.vertices.len() as u32;
        for position in corners {
            self.vertices.push(Vertex { position, normal });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Translates every vertex position by `(dx, dy, dz)`.
    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        for v in &mut self.vertices {
            v.position[0] += dx;
            v.position[1] += dy;
            v.position[2] += dz;
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_quad_appends_four_vertices_six_indices() {
        let mut mesh = MeshData::new();
        mesh.push_quad(
            [
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            [0.0, 0.0, 1.0],
        );
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn indices_stay_valid_across_multiple_quads() {
        let mut mesh = MeshData::new();
        let q = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        mesh.push_quad(q, [0.0, 0.0, 1.0]);
        mesh.push_quad(q, [0.0, 0.0, 1.0]);
        assert_eq!(mesh.vertices.len(), 8);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn translate_moves_positions_only() {
        let mut mesh = MeshData::new();
        mesh.push_quad(
            [
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            [0.0, 0.0, 1.0],
        );
        mesh.translate(-0.5, 1.0, 2.0);
        assert_eq!(mesh.vertices[0].position, [-0.5, 1.0, 2.0]);
        assert_eq!(mesh.vertices[0].normal, [0.0, 0.0, 1.0]);
    }
}
