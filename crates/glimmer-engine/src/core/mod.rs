//! Core engine-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and
//! the demo applications: a per-frame context object instead of ambient
//! globals, so everything the frame callback touches is explicit.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
