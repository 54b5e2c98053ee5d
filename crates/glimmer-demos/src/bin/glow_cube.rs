//! Glowing cube demo.
//!
//! A lit cube spins by a fixed increment each tick while a small unlit
//! marker cube orbits it as the light emitter. Every tick the marker's
//! position is copied into the lit material's `light_pos` uniform, and the
//! fragment shader pulses the cube's emissive term with the material clock
//! (step 0.02).

use anyhow::Result;
use glam::{DVec2, DVec3, Vec3};
use winit::event::WindowEvent;
use winit::window::WindowId;

use glimmer_engine::camera::Camera;
use glimmer_engine::core::{App, AppControl, FrameCtx};
use glimmer_engine::device::GpuInit;
use glimmer_engine::geometry;
use glimmer_engine::render::MeshRenderer;
use glimmer_engine::scene::{Animator, Material, MaterialKind, Node, Scene};
use glimmer_engine::window::{Runtime, RuntimeConfig};

const CUBE_TIME_STEP: f64 = 0.02;
const CUBE_COLOR: Vec3 = Vec3::new(0.25, 0.55, 0.9);
const MARKER_COLOR: Vec3 = Vec3::new(1.0, 0.9, 0.6);

/// Per-tick spin of the cube, radians.
const SPIN_RATE: DVec3 = DVec3::new(0.01, 0.01, 0.0);

/// Orbit amplitude of the light marker.
const ORBIT_AMPLITUDE: DVec2 = DVec2::new(0.5, 0.3);

const CLEAR: wgpu::Color = wgpu::Color {
    r: 0.01,
    g: 0.01,
    b: 0.02,
    a: 1.0,
};

struct GlowCube {
    camera: Camera,
    scene: Scene,
    renderer: MeshRenderer,
}

impl GlowCube {
    fn new() -> Self {
        Self {
            camera: Camera::new(Vec3::new(0.0, 0.0, 5.0), 16.0 / 9.0),
            scene: build_scene(),
            renderer: MeshRenderer::new(),
        }
    }
}

/// No assets to wait for here; the scene exists from the first frame.
fn build_scene() -> Scene {
    let mut scene = Scene::new();

    let cube_mesh = scene.add_mesh(geometry::cube(1.5));
    let marker_mesh = scene.add_mesh(geometry::cube(0.15));

    let lit = scene.add_material(Material::new(MaterialKind::Lit, CUBE_COLOR, CUBE_TIME_STEP));
    let unlit = scene.add_material(Material::new(
        MaterialKind::Unlit,
        MARKER_COLOR,
        CUBE_TIME_STEP,
    ));

    let mut cube = Node::new(cube_mesh, lit);
    cube.animator = Some(Animator::Spin { rate: SPIN_RATE });
    scene.add_node(cube);

    let mut marker = Node::new(marker_mesh, unlit);
    marker.animator = Some(Animator::Orbit {
        center: DVec3::new(0.0, 0.0, 1.8),
        amplitude: ORBIT_AMPLITUDE,
    });
    let marker_id = scene.add_node(marker);

    scene.set_light(marker_id);

    scene
}

impl App for GlowCube {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if let WindowEvent::Resized(size) = event {
            self.camera.set_viewport(size.width as f32, size.height as f32);
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.scene.tick(&ctx.time);

        let (scene, renderer, camera) = (&self.scene, &mut self.renderer, &self.camera);
        ctx.render(CLEAR, |rctx, target| {
            renderer.render(rctx, target, scene, camera);
        })
    }
}

fn main() -> Result<()> {
    glimmer_engine::logging::init(None);

    Runtime::run(
        RuntimeConfig {
            title: "glimmer · glow cube".to_string(),
            ..RuntimeConfig::default()
        },
        GpuInit::default(),
        GlowCube::new(),
    )
}
