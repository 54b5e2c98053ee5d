//! GPU rendering subsystem.
//!
//! The renderer consumes `scene` data and issues GPU commands via wgpu.
//! It owns all GPU resources (pipelines, buffers, bind groups) and creates
//! them lazily on first use.
//!
//! Convention:
//! - CPU geometry is in world units, +Y up, right-handed.
//! - Shaders receive matrices and uniform bindings through three groups:
//!   globals (camera), material, model.

mod common;
mod ctx;
mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
