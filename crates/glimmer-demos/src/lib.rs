//! Shared helpers for the demo binaries.

use anyhow::{Context, Result};

/// Common system font locations, most specific first.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Reads the first system font that exists.
///
/// Runs on the asset loader thread; the update loop keeps rendering while
/// this probes the filesystem.
pub fn find_system_font() -> Result<Vec<u8>> {
    FONT_CANDIDATES
        .iter()
        .find_map(|p| std::fs::read(p).ok())
        .with_context(|| format!("no usable font found ({} paths tried)", FONT_CANDIDATES.len()))
}
