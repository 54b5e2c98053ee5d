use wgpu::util::DeviceExt;

use crate::camera::Camera;
use crate::scene::{MaterialKind, Scene};

use super::common::{
    ubo_min_binding_size, vertex_layout, GlobalsUniform, MaterialUniform, ModelUniform,
};
use super::{RenderCtx, RenderTarget};

/// Mesh renderer for a `Scene`.
///
/// One pipeline per material kind, all sharing the same bind group layouts:
/// - group(0): globals (view-projection)
/// - group(1): material (base color, time, light position)
/// - group(2): model (per-node transform)
///
/// GPU resources are created lazily and cached by scene id: meshes are
/// uploaded once (scene meshes are immutable after adding), material and
/// model UBOs are rewritten every frame from the post-tick scene state.
/// One renderer serves one scene for the process lifetime.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipelines: Option<Pipelines>,

    globals_bgl: Option<wgpu::BindGroupLayout>,
    material_bgl: Option<wgpu::BindGroupLayout>,
    model_bgl: Option<wgpu::BindGroupLayout>,

    globals_ubo: Option<wgpu::Buffer>,
    globals_bind_group: Option<wgpu::BindGroup>,

    mesh_slots: Vec<Option<GpuMesh>>,
    material_slots: Vec<Option<GpuUniformSlot>>,
    node_slots: Vec<Option<GpuUniformSlot>>,
}

struct Pipelines {
    wave: wgpu::RenderPipeline,
    lit: wgpu::RenderPipeline,
    unlit: wgpu::RenderPipeline,
}

struct GpuMesh {
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
    index_count: u32,
}

struct GpuUniformSlot {
    ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `scene` as seen by `camera` into `target`.
    ///
    /// Assumes the color and depth attachments were cleared earlier in the
    /// frame. Nodes whose mesh is empty (e.g. a whitespace glyph) are
    /// skipped; an empty scene issues no draw calls.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        scene: &Scene,
        camera: &Camera,
    ) {
        self.ensure_pipelines(ctx);
        self.ensure_globals(ctx);

        // Mutating uploads happen before the pass borrows anything.
        self.write_globals(ctx, camera);
        self.ensure_meshes(ctx, scene);
        self.write_materials(ctx, scene);
        self.write_models(ctx, scene);

        let Some(pipelines) = self.pipelines.as_ref() else { return };
        let Some(globals_bind_group) = self.globals_bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("glimmer mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_bind_group(0, globals_bind_group, &[]);

        for (node_index, node) in scene.nodes().iter().enumerate() {
            let Some(mesh) = self.mesh_slots.get(node.mesh.0).and_then(Option::as_ref) else {
                continue;
            };
            let Some(material) = self
                .material_slots
                .get(node.material.0)
                .and_then(Option::as_ref)
            else {
                continue;
            };
            let Some(model) = self.node_slots.get(node_index).and_then(Option::as_ref) else {
                continue;
            };

            let pipeline = match scene.materials()[node.material.0].kind {
                MaterialKind::Wave => &pipelines.wave,
                MaterialKind::Lit => &pipelines.lit,
                MaterialKind::Unlit => &pipelines.unlit,
            };

            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(1, &material.bind_group, &[]);
            rpass.set_bind_group(2, &model.bind_group, &[]);
            rpass.set_vertex_buffer(0, mesh.vbo.slice(..));
            rpass.set_index_buffer(mesh.ibo.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipelines.is_some() {
            return;
        }

        let globals_bgl = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("glimmer globals bgl"),
                entries: &[uniform_entry::<GlobalsUniform>(0, wgpu::ShaderStages::VERTEX)],
            });

        let material_bgl = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("glimmer material bgl"),
                entries: &[uniform_entry::<MaterialUniform>(
                    0,
                    wgpu::ShaderStages::VERTEX_FRAGMENT,
                )],
            });

        let model_bgl = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("glimmer model bgl"),
                entries: &[uniform_entry::<ModelUniform>(0, wgpu::ShaderStages::VERTEX)],
            });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("glimmer mesh pipeline layout"),
                bind_group_layouts: &[&globals_bgl, &material_bgl, &model_bgl],
                immediate_size: 0,
            });

        let wave = self.build_pipeline(
            ctx,
            &pipeline_layout,
            "glimmer wave",
            include_str!("shaders/wave.wgsl"),
        );
        let lit = self.build_pipeline(
            ctx,
            &pipeline_layout,
            "glimmer lit",
            include_str!("shaders/lit.wgsl"),
        );
        let unlit = self.build_pipeline(
            ctx,
            &pipeline_layout,
            "glimmer unlit",
            include_str!("shaders/unlit.wgsl"),
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipelines = Some(Pipelines { wave, lit, unlit });
        self.globals_bgl = Some(globals_bgl);
        self.material_bgl = Some(material_bgl);
        self.model_bgl = Some(model_bgl);

        // Bind groups reference the old layouts; rebuild them lazily.
        self.globals_ubo = None;
        self.globals_bind_group = None;
        self.material_slots.clear();
        self.node_slots.clear();
    }

    fn build_pipeline(
        &self,
        ctx: &RenderCtx<'_>,
        layout: &wgpu::PipelineLayout,
        label: &str,
        shader_src: &str,
    ) -> wgpu::RenderPipeline {
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        ctx.device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[vertex_layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: Some(wgpu::DepthStencilState {
                    format: ctx.depth_format,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),

                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
    }

    fn ensure_globals(&mut self, ctx: &RenderCtx<'_>) {
        if self.globals_ubo.is_some() && self.globals_bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.globals_bgl.as_ref() else { return };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("glimmer globals ubo"),
            size: std::mem::size_of::<GlobalsUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glimmer globals bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.globals_ubo = Some(ubo);
        self.globals_bind_group = Some(bind_group);
    }

    fn write_globals(&mut self, ctx: &RenderCtx<'_>, camera: &Camera) {
        let Some(ubo) = self.globals_ubo.as_ref() else { return };
        let u = GlobalsUniform {
            view_proj: camera.view_proj().to_cols_array_2d(),
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    /// Uploads any scene meshes not yet on the GPU. Empty meshes stay
    /// unuploaded and their nodes are skipped at draw time.
    fn ensure_meshes(&mut self, ctx: &RenderCtx<'_>, scene: &Scene) {
        let meshes = scene.meshes();
        if self.mesh_slots.len() < meshes.len() {
            self.mesh_slots.resize_with(meshes.len(), || None);
        }

        for (i, mesh) in meshes.iter().enumerate() {
            if self.mesh_slots[i].is_some() || mesh.is_empty() {
                continue;
            }

            let vbo = ctx
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("glimmer mesh vbo"),
                    contents: bytemuck::cast_slice(&mesh.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
            let ibo = ctx
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("glimmer mesh ibo"),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });

            self.mesh_slots[i] = Some(GpuMesh {
                vbo,
                ibo,
                index_count: mesh.indices.len() as u32,
            });
        }
    }

    fn write_materials(&mut self, ctx: &RenderCtx<'_>, scene: &Scene) {
        // Split borrows: the layout is read while slots are grown in place.
        let (slots, bgl) = (&mut self.material_slots, self.material_bgl.as_ref());
        let Some(bgl) = bgl else { return };

        let materials = scene.materials();
        if slots.len() < materials.len() {
            slots.resize_with(materials.len(), || None);
        }

        for (i, material) in materials.iter().enumerate() {
            let slot = slots[i].get_or_insert_with(|| {
                make_uniform_slot::<MaterialUniform>(ctx, bgl, "glimmer material")
            });
            let u = MaterialUniform::from(material.params);
            ctx.queue.write_buffer(&slot.ubo, 0, bytemuck::bytes_of(&u));
        }
    }

    fn write_models(&mut self, ctx: &RenderCtx<'_>, scene: &Scene) {
        let (slots, bgl) = (&mut self.node_slots, self.model_bgl.as_ref());
        let Some(bgl) = bgl else { return };

        let nodes = scene.nodes();
        if slots.len() < nodes.len() {
            slots.resize_with(nodes.len(), || None);
        }

        for (i, node) in nodes.iter().enumerate() {
            let slot = slots[i]
                .get_or_insert_with(|| make_uniform_slot::<ModelUniform>(ctx, bgl, "glimmer model"));
            let u = ModelUniform {
                model: node.transform.matrix().to_cols_array_2d(),
            };
            ctx.queue.write_buffer(&slot.ubo, 0, bytemuck::bytes_of(&u));
        }
    }
}

fn uniform_entry<T>(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: Some(ubo_min_binding_size::<T>()),
        },
        count: None,
    }
}

fn make_uniform_slot<T>(
    ctx: &RenderCtx<'_>,
    layout: &wgpu::BindGroupLayout,
    label: &str,
) -> GpuUniformSlot {
    let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<T>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: ubo.as_entire_binding(),
        }],
    });

    GpuUniformSlot { ubo, bind_group }
}
