//! Animated 3D text demo.
//!
//! Loads a system font in the background, extrudes the glyphs 'l' and '0'
//! into meshes, and renders them with the wave material: each tick the
//! material clock advances by 0.05 and the vertex shader displaces
//! `pos.y += sin(time + pos.x) * 0.1`.

use anyhow::Result;
use glam::{DVec3, Vec3};
use winit::event::WindowEvent;
use winit::window::WindowId;

use glimmer_engine::asset::{self, AssetLoad, LoadState};
use glimmer_engine::camera::Camera;
use glimmer_engine::core::{App, AppControl, FrameCtx};
use glimmer_engine::device::GpuInit;
use glimmer_engine::render::MeshRenderer;
use glimmer_engine::scene::{Material, MaterialKind, Node, Scene};
use glimmer_engine::text::Fonts;
use glimmer_engine::window::{Runtime, RuntimeConfig};

const TEXT_TIME_STEP: f64 = 0.05;
const TEXT_COLOR: Vec3 = Vec3::new(0.7, 0.2, 0.3);
const GLYPH_SIZE: f32 = 1.0;
const GLYPH_DEPTH: f32 = 0.2;

const CLEAR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.03,
    a: 1.0,
};

struct TextWave {
    camera: Camera,
    scene: Scene,
    renderer: MeshRenderer,
    fonts: Fonts,
    font_load: Option<AssetLoad<Vec<u8>>>,
}

impl TextWave {
    fn new() -> Self {
        Self {
            camera: Camera::new(Vec3::new(0.0, 0.0, 5.0), 16.0 / 9.0),
            scene: Scene::new(),
            renderer: MeshRenderer::new(),
            fonts: Fonts::new(),
            font_load: Some(asset::spawn("demo font", glimmer_demos::find_system_font)),
        }
    }

    /// Polls the in-flight font load; populates the scene exactly once.
    ///
    /// On failure the letters simply never appear and the loop goes on.
    fn poll_font(&mut self) {
        let Some(load) = self.font_load.as_mut() else {
            return;
        };

        match load.poll() {
            LoadState::Pending => {}
            LoadState::Ready(bytes) => {
                self.font_load = None;
                if let Err(e) = self.populate(&bytes) {
                    log::warn!("text meshes unavailable: {e:#}");
                }
            }
            LoadState::Failed(e) => {
                self.font_load = None;
                log::warn!("font load failed: {e:#}");
            }
        }
    }

    fn populate(&mut self, font_bytes: &[u8]) -> Result<()> {
        let font = self.fonts.load(font_bytes)?;

        // One shared material: both letters ride the same clock, exactly
        // like sharing a shader material between meshes.
        let material =
            self.scene
                .add_material(Material::new(MaterialKind::Wave, TEXT_COLOR, TEXT_TIME_STEP));

        for (ch, x) in [('l', -2.0), ('0', 2.0)] {
            let Some(mesh) = self.fonts.glyph_mesh(font, ch, GLYPH_SIZE, GLYPH_DEPTH) else {
                continue;
            };
            let mesh = self.scene.add_mesh(mesh);
            let mut node = Node::new(mesh, material);
            node.transform.position = DVec3::new(x, 0.0, 0.0);
            self.scene.add_node(node);
        }

        log::info!("text scene populated");
        Ok(())
    }
}

impl App for TextWave {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if let WindowEvent::Resized(size) = event {
            self.camera.set_viewport(size.width as f32, size.height as f32);
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.poll_font();
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
            title: "glimmer · text wave".to_string(),
            ..RuntimeConfig::default()
        },
        GpuInit::default(),
        TextWave::new(),
    )
}
