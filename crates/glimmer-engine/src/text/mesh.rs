//! Glyph coverage extrusion.
//!
//! Converts a rasterized coverage bitmap (row 0 = top) into a closed prism
//! mesh: front and back faces for every filled cell, side faces only where
//! a filled cell borders an empty one (or the bitmap edge). Winding matches
//! `geometry::cube` so the same back-face culling applies.

use crate::geometry::MeshData;

/// Parameters for [`extrude_coverage`].
#[derive(Debug, Copy, Clone)]
pub struct ExtrudeOptions {
    /// World-space edge length of one coverage cell.
    pub cell: f32,
    /// Extrusion thickness along Z; the mesh spans `-depth/2 .. +depth/2`.
    pub depth: f32,
    /// Minimum coverage value for a cell to count as filled.
    pub threshold: u8,
}

/// Extrudes the filled cells of a coverage bitmap into a triangle mesh.
///
/// The output spans `[0, width*cell] x [0, height*cell]` in X/Y with the
/// bitmap's top row at the top (+Y up), centered on Z.
pub fn extrude_coverage(
    coverage: &[u8],
    width: usize,
    height: usize,
    opts: ExtrudeOptions,
) -> MeshData {
    debug_assert!(coverage.len() >= width * height);

    let filled = |x: isize, y: isize| -> bool {
        if x < 0 || y < 0 || x >= width as isize || y >= height as isize {
            return false;
        }
        coverage[y as usize * width + x as usize] >= opts.threshold
    };

    let s = opts.cell;
    let z1 = opts.depth * 0.5;
    let z0 = -z1;

    let mut mesh = MeshData::new();

    for y in 0..height as isize {
        for x in 0..width as isize {
            if !filled(x, y) {
                continue;
            }

            let x0 = x as f32 * s;
            let x1 = x0 + s;
            // Bitmap row 0 is the top of the glyph; flip into +Y-up space.
            let y0 = (height as isize - 1 - y) as f32 * s;
            let y1 = y0 + s;

            // Front / back are always visible on a uniform-depth prism.
            mesh.push_quad(
                [[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]],
                [0.0, 0.0, 1.0],
            );
            mesh.push_quad(
                [[x1, y0, z0], [x0, y0, z0], [x0, y1, z0], [x1, y1, z0]],
                [0.0, 0.0, -1.0],
            );

            // Side faces only at silhouette edges.
            if !filled(x + 1, y) {
                mesh.push_quad(
                    [[x1, y0, z1], [x1, y0, z0], [x1, y1, z0], [x1, y1, z1]],
                    [1.0, 0.0, 0.0],
                );
            }
            if !filled(x - 1, y) {
                mesh.push_quad(
                    [[x0, y0, z0], [x0, y0, z1], [x0, y1, z1], [x0, y1, z0]],
                    [-1.0, 0.0, 0.0],
                );
            }
            // Bitmap y-1 is above in world space.
            if !filled(x, y - 1) {
                mesh.push_quad(
                    [[x0, y1, z1], [x1, y1, z1], [x1, y1, z0], [x0, y1, z0]],
                    [0.0, 1.0, 0.0],
                );
            }
            if !filled(x, y + 1) {
                mesh.push_quad(
                    [[x0, y0, z0], [x1, y0, z0], [x1, y0, z1], [x0, y0, z1]],
                    [0.0, -1.0, 0.0],
                );
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ExtrudeOptions {
        ExtrudeOptions {
            cell: 1.0,
            depth: 0.2,
            threshold: 128,
        }
    }

    // ── cell counting ─────────────────────────────────────────────────────

    #[test]
    fn single_cell_is_a_closed_box() {
        let mesh = extrude_coverage(&[255], 1, 1, opts());
        // 6 quads: front, back, 4 sides.
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
    }

    #[test]
    fn adjacent_cells_cull_shared_sides() {
        // Two cells side by side: the interior wall must not be emitted.
        // front 2 + back 2 + left 1 + right 1 + top 2 + bottom 2 = 10 quads.
        let mesh = extrude_coverage(&[255, 255], 2, 1, opts());
        assert_eq!(mesh.vertices.len(), 40);
        assert_eq!(mesh.indices.len(), 60);
    }

    #[test]
    fn below_threshold_cells_are_empty_space() {
        let mesh = extrude_coverage(&[100], 1, 1, opts());
        assert!(mesh.is_empty());
    }

    #[test]
    fn empty_bitmap_yields_empty_mesh() {
        let mesh = extrude_coverage(&[0, 0, 0, 0], 2, 2, opts());
        assert!(mesh.is_empty());
    }

    // ── coordinate space ──────────────────────────────────────────────────

    #[test]
    fn top_bitmap_row_maps_to_highest_y() {
        // Column bitmap: top cell filled, bottom cell empty.
        let mesh = extrude_coverage(&[255, 0], 1, 2, opts());
        let max_y = mesh
            .vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MIN, f32::max);
        // Two rows of cell 1.0: the filled top cell spans y 1.0..2.0.
        assert!((max_y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn mesh_is_centered_on_z() {
        let mesh = extrude_coverage(&[255], 1, 1, opts());
        let (min_z, max_z) = mesh.vertices.iter().fold((f32::MAX, f32::MIN), |(lo, hi), v| {
            (lo.min(v.position[2]), hi.max(v.position[2]))
        });
        assert!((min_z + 0.1).abs() < 1e-6);
        assert!((max_z - 0.1).abs() < 1e-6);
    }

    #[test]
    fn indices_are_in_bounds() {
        let bitmap = [255, 0, 255, 255, 255, 0, 0, 255, 255];
        let mesh = extrude_coverage(&bitmap, 3, 3, opts());
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }
}
