//! Time subsystem.
//!
//! Two clocks with deliberately different semantics:
//! - `FrameClock` measures wall-clock time between presented frames and is
//!   owned by the runtime (one per window loop).
//! - `AnimationClock` is a fixed-step accumulator owned by each material;
//!   it advances by the same amount every tick regardless of frame rate.
//!
//! Neither couples to the runtime, so both are testable headlessly.

mod animation;
mod frame_clock;

pub use animation::AnimationClock;
pub use frame_clock::{FrameClock, FrameTime};
