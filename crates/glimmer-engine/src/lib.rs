//! Glimmer engine crate.
//!
//! Owns the platform + GPU runtime pieces and the animation core used by the
//! demo binaries. The animation core (`time`, `scene`, `camera`) has no
//! rendering dependency and is testable without a display surface.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod camera;
pub mod geometry;
pub mod text;
pub mod asset;
pub mod scene;
pub mod render;
