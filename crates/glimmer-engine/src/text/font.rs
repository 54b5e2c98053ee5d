use std::fmt;

use crate::geometry::MeshData;

use super::mesh::{self, ExtrudeOptions};

/// Error returned by [`Fonts::load`].
#[derive(Debug, Clone)]
pub struct FontError(pub String);

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font error: {}", self.0)
    }
}

impl std::error::Error for FontError {}

/// Opaque handle to a font loaded into a [`Fonts`] store.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(usize);

/// Rasterization size for glyph meshing, in pixels.
///
/// Large enough that thresholded coverage keeps letterform detail, small
/// enough that the extruded cell grid stays in the low thousands of quads.
const RASTER_PX: f32 = 48.0;

/// Coverage threshold for a cell to count as inside the glyph.
const COVERAGE_THRESHOLD: u8 = 128;

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. Glyph meshes are built on demand and
/// owned by the caller (the demos build each mesh exactly once, when the
/// font bytes finish loading).
#[derive(Default)]
pub struct Fonts {
    fonts: Vec<fontdue::Font>,
}

impl Fonts {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load(&mut self, bytes: &[u8]) -> Result<FontId, FontError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Builds an extruded 3D mesh for a single glyph.
    ///
    /// `size` is the approximate world-space glyph height and `depth` the
    /// extrusion thickness. The mesh is centered on the origin. Returns
    /// `None` for an unknown font id; whitespace or zero-coverage glyphs
    /// produce an empty mesh.
    pub fn glyph_mesh(&self, id: FontId, ch: char, size: f32, depth: f32) -> Option<MeshData> {
        let font = self.fonts.get(id.0)?;
        let (metrics, coverage) = font.rasterize(ch, RASTER_PX);

        if metrics.width == 0 || metrics.height == 0 {
            return Some(MeshData::new());
        }

        let cell = size / RASTER_PX;
        let mut out = mesh::extrude_coverage(
            &coverage,
            metrics.width,
            metrics.height,
            ExtrudeOptions {
                cell,
                depth,
                threshold: COVERAGE_THRESHOLD,
            },
        );

        // Center the glyph on the origin; placement is the node's job.
        out.translate(
            -(metrics.width as f32) * cell * 0.5,
            -(metrics.height as f32) * cell * 0.5,
            0.0,
        );

        Some(out)
    }
}
