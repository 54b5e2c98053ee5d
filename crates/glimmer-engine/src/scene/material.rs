use glam::Vec3;

use crate::time::AnimationClock;

/// Which shader pipeline a material selects.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MaterialKind {
    /// Vertex positions displaced by `sin(time + x)`; flat base color.
    Wave,
    /// Lambert diffuse from `light_pos` plus a sinusoidal emissive pulse.
    Lit,
    /// Flat base color; ignores `time` and `light_pos`.
    Unlit,
}

/// Current values of the shader uniform inputs, one set per material.
///
/// Mutated once per tick by `Scene::tick`, read by the GPU during the draw
/// issued the same tick. `time` is the material's own animation clock;
/// `light_pos` is refreshed from the scene's light node for lit materials.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaterialParams {
    pub time: f32,
    pub light_pos: Vec3,
    pub base_color: Vec3,
}

/// A material: shader selection + uniform bindings + its own clock.
#[derive(Debug, Copy, Clone)]
pub struct Material {
    pub kind: MaterialKind,
    pub params: MaterialParams,
    clock: AnimationClock,
}

impl Material {
    /// Creates a material whose clock advances by `time_step` per tick.
    pub fn new(kind: MaterialKind, base_color: Vec3, time_step: f64) -> Self {
        Self {
            kind,
            params: MaterialParams {
                time: 0.0,
                light_pos: Vec3::ZERO,
                base_color,
            },
            clock: AnimationClock::new(time_step),
        }
    }

    /// Advances the clock one step and refreshes the `time` binding.
    pub(crate) fn advance_clock(&mut self) {
        self.params.time = self.clock.advance() as f32;
    }

    #[inline]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }
}
