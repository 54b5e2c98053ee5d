//! Scene data and the per-tick update contract.
//!
//! Responsibilities:
//! - store meshes, materials (uniform bindings) and nodes (transforms)
//! - advance all animation state exactly once per tick, in a fixed order
//!
//! `Scene` has no rendering dependency; the renderer reads it after `tick`
//! returns. There is exactly one mutator (the tick) and one reader (the
//! draw issued in the same tick), so uniform values and transforms are
//! always consistent with the same tick.

mod animate;
mod material;
mod node;

pub use animate::{orbit_offset, Animator};
pub use material::{Material, MaterialKind, MaterialParams};
pub use node::{Node, Transform};

use crate::geometry::MeshData;
use crate::time::FrameTime;

/// Handle to a mesh stored in a [`Scene`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MeshId(pub(crate) usize);

/// Handle to a material stored in a [`Scene`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MaterialId(pub(crate) usize);

/// Handle to a node stored in a [`Scene`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A populated (or still-empty) collection of renderables.
///
/// Meshes are immutable once added; materials and node transforms are
/// mutated by [`tick`](Scene::tick). Assets that never finish loading
/// simply never add their nodes, and the tick skips nothing that exists.
#[derive(Default)]
pub struct Scene {
    meshes: Vec<MeshData>,
    materials: Vec<Material>,
    nodes: Vec<Node>,
    light: Option<NodeId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mesh(&mut self, mesh: MeshData) -> MeshId {
        let id = MeshId(self.meshes.len());
        self.meshes.push(mesh);
        id
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len());
        self.materials.push(material);
        id
    }

    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Marks `node` as the light emitter whose position feeds the
    /// `light_pos` uniform of every lit material.
    pub fn set_light(&mut self, node: NodeId) {
        self.light = Some(node);
    }

    #[inline]
    pub fn meshes(&self) -> &[MeshData] {
        &self.meshes
    }

    #[inline]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn material_mut(&mut self, id: MaterialId) -> &mut Material {
        &mut self.materials[id.0]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Advances all animation state by one tick.
    ///
    /// Order is part of the contract:
    /// 1. each material's clock advances by its own step → `time` uniform
    /// 2. animators recompute time-derived transforms
    /// 3. the light node's position is copied into every lit material's
    ///    `light_pos` — same tick, never stale
    ///
    /// The subsequent draw call reads the result; no partial update is
    /// observable outside this method.
    pub fn tick(&mut self, time: &FrameTime) {
        for material in &mut self.materials {
            material.advance_clock();
        }

        for node in &mut self.nodes {
            if let Some(animator) = node.animator {
                animator.apply(&mut node.transform, time.elapsed);
            }
        }

        if let Some(NodeId(light)) = self.light {
            if let Some(node) = self.nodes.get(light) {
                let light_pos = node.transform.position.as_vec3();
                for material in &mut self.materials {
                    if material.kind == MaterialKind::Lit {
                        material.params.light_pos = light_pos;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec2, DVec3, Vec3};

    fn frame(elapsed: f64) -> FrameTime {
        FrameTime {
            dt: 1.0 / 60.0,
            elapsed,
            frame_index: 0,
        }
    }

    fn unit_quad() -> MeshData {
        let mut mesh = MeshData::new();
        mesh.push_quad(
            [
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            [0.0, 0.0, 1.0],
        );
        mesh
    }

    // ── material clocks ───────────────────────────────────────────────────

    #[test]
    fn materials_advance_by_their_own_steps() {
        let mut scene = Scene::new();
        let fast = scene.add_material(Material::new(MaterialKind::Wave, Vec3::ONE, 0.05));
        let slow = scene.add_material(Material::new(MaterialKind::Lit, Vec3::ONE, 0.02));

        for _ in 0..100 {
            scene.tick(&frame(0.0));
        }

        assert!((scene.materials()[fast.0].params.time - 5.0).abs() < 1e-3);
        assert!((scene.materials()[slow.0].params.time - 2.0).abs() < 1e-3);
    }

    // ── light propagation ─────────────────────────────────────────────────

    #[test]
    fn light_position_propagates_to_lit_materials_same_tick() {
        let mut scene = Scene::new();
        let mesh = scene.add_mesh(unit_quad());
        let lit = scene.add_material(Material::new(MaterialKind::Lit, Vec3::ONE, 0.02));
        let unlit = scene.add_material(Material::new(MaterialKind::Unlit, Vec3::ONE, 0.02));

        let mut marker = Node::new(mesh, unlit);
        marker.animator = Some(Animator::Orbit {
            center: DVec3::new(0.0, 0.0, 2.0),
            amplitude: DVec2::new(0.5, 0.3),
        });
        let marker_id = scene.add_node(marker);
        scene.set_light(marker_id);

        scene.tick(&frame(1.25));

        let expected = scene.nodes()[marker_id.0].transform.position.as_vec3();
        assert_ne!(expected, Vec3::ZERO);
        assert_eq!(scene.materials()[lit.0].params.light_pos, expected);
    }

    #[test]
    fn light_position_skips_non_lit_materials() {
        let mut scene = Scene::new();
        let mesh = scene.add_mesh(unit_quad());
        let wave = scene.add_material(Material::new(MaterialKind::Wave, Vec3::ONE, 0.05));

        let mut marker = Node::new(mesh, wave);
        marker.transform.position = DVec3::new(3.0, 4.0, 5.0);
        let marker_id = scene.add_node(marker);
        scene.set_light(marker_id);

        scene.tick(&frame(0.5));

        assert_eq!(scene.materials()[wave.0].params.light_pos, Vec3::ZERO);
    }

    #[test]
    fn no_light_leaves_light_pos_untouched() {
        let mut scene = Scene::new();
        let lit = scene.add_material(Material::new(MaterialKind::Lit, Vec3::ONE, 0.02));
        scene.tick(&frame(1.0));
        assert_eq!(scene.materials()[lit.0].params.light_pos, Vec3::ZERO);
    }

    // ── degenerate scenes ─────────────────────────────────────────────────

    #[test]
    fn empty_scene_ticks_safely() {
        let mut scene = Scene::new();
        scene.tick(&frame(0.0));
        scene.tick(&frame(1.0));
        assert!(scene.is_empty());
    }

    #[test]
    fn nodes_without_animators_keep_their_transform() {
        let mut scene = Scene::new();
        let mesh = scene.add_mesh(unit_quad());
        let mat = scene.add_material(Material::new(MaterialKind::Unlit, Vec3::ONE, 0.02));
        let mut node = Node::new(mesh, mat);
        node.transform.position = DVec3::new(-2.0, 0.0, 0.0);
        let id = scene.add_node(node);

        scene.tick(&frame(7.0));

        assert_eq!(scene.nodes()[id.0].transform.position, DVec3::new(-2.0, 0.0, 0.0));
    }
}
