//! Shared GPU types used by the mesh renderer.

use bytemuck::{Pod, Zeroable};

use crate::geometry::Vertex;
use crate::scene::MaterialParams;

// ── globals uniform (group 0) ─────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct GlobalsUniform {
    pub view_proj: [[f32; 4]; 4],
}

// ── material uniform (group 1) ────────────────────────────────────────────

/// GPU layout of the per-material uniform bindings.
///
/// Field order matches the WGSL `Material` struct in every shader: vec3 +
/// f32 pairs pack into two 16-byte rows.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct MaterialUniform {
    pub base_color: [f32; 3],
    pub time: f32,
    pub light_pos: [f32; 3],
    pub _pad: f32,
}

impl From<MaterialParams> for MaterialUniform {
    fn from(p: MaterialParams) -> Self {
        Self {
            base_color: p.base_color.to_array(),
            time: p.time,
            light_pos: p.light_pos.to_array(),
            _pad: 0.0,
        }
    }
}

// ── model uniform (group 2) ───────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

// ── vertex layout ─────────────────────────────────────────────────────────

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x3, // position
    1 => Float32x3  // normal
];

pub(super) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

// ── UBO binding sizes ─────────────────────────────────────────────────────

/// Minimum binding size for a uniform buffer holding one `T`.
///
/// All uniform structs here are non-empty by construction; centralising
/// this avoids `.unwrap()` at each pipeline-creation site.
pub(super) fn ubo_min_binding_size<T>() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<T>() as u64)
        .expect("uniform struct has non-zero size by construction")
}
