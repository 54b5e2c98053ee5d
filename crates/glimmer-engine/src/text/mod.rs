//! 3D text.
//!
//! Responsibilities:
//! - parse TTF/OTF fonts (fontdue) and hand out stable font handles
//! - turn a glyph's coverage bitmap into an extruded 3D prism mesh
//!
//! The extrusion step is a pure function over a coverage grid, so mesh
//! generation is testable without a font file.

mod font;
mod mesh;

pub use font::{FontError, FontId, Fonts};
pub use mesh::{extrude_coverage, ExtrudeOptions};
