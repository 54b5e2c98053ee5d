//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single demo window, and wires them to
//! the GPU layer. Redraws are requested continuously; each `RedrawRequested`
//! is one tick of the frame update loop.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
