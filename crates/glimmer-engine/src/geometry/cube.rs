use super::MeshData;

/// Builds an axis-aligned cube centered at the origin with edge length
/// `size`. 24 vertices (4 per face, so normals stay flat), 36 indices,
/// counter-clockwise winding viewed from outside.
pub fn cube(size: f32) -> MeshData {
    let h = size * 0.5;
    let mut mesh = MeshData::new();

    // +Z
    mesh.push_quad(
        [[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]],
        [0.0, 0.0, 1.0],
    );
    // -Z
    mesh.push_quad(
        [[h, -h, -h], [-h, -h, -h], [-h, h, -h], [h, h, -h]],
        [0.0, 0.0, -1.0],
    );
    // +X
    mesh.push_quad(
        [[h, -h, h], [h, -h, -h], [h, h, -h], [h, h, h]],
        [1.0, 0.0, 0.0],
    );
    // -X
    mesh.push_quad(
        [[-h, -h, -h], [-h, -h, h], [-h, h, h], [-h, h, -h]],
        [-1.0, 0.0, 0.0],
    );
    // +Y
    mesh.push_quad(
        [[-h, h, h], [h, h, h], [h, h, -h], [-h, h, -h]],
        [0.0, 1.0, 0.0],
    );
    // -Y
    mesh.push_quad(
        [[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]],
        [0.0, -1.0, 0.0],
    );

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_24_vertices_36_indices() {
        let mesh = cube(1.0);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
    }

    #[test]
    fn normals_are_unit_axis_aligned() {
        let mesh = cube(2.0);
        for v in &mesh.vertices {
            let [x, y, z] = v.normal;
            let len = (x * x + y * y + z * z).sqrt();
            assert!((len - 1.0).abs() < 1e-6);
            // Exactly one component is non-zero.
            let nonzero = [x, y, z].iter().filter(|c| c.abs() > 0.5).count();
            assert_eq!(nonzero, 1);
        }
    }

    #[test]
    fn positions_lie_on_half_extent() {
        let mesh = cube(2.0);
        for v in &mesh.vertices {
            for c in v.position {
                assert!((c.abs() - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn vertices_sit_on_their_face_plane() {
        // Each vertex's position along its normal axis equals +half extent.
        let mesh = cube(1.0);
        for v in &mesh.vertices {
            let dot = v.position[0] * v.normal[0]
                + v.position[1] * v.normal[1]
                + v.position[2] * v.normal[2];
            assert!((dot - 0.5).abs() < 1e-6);
        }
    }
}
