use crate::constants::*;
use glam::Mat4;
use tree_core::{Camera, Category, RibbonStrip};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
mod instances;
pub mod mesh;
mod ribbon;

pub use instances::SceneInstances;
use instances::InstanceRaw;
use mesh::{Mesh, Vertex};
use ribbon::{create_ribbon_resources, RibbonResources};

pub(crate) static INSTANCED_WGSL: &str = include_str!("../shaders/instanced.wgsl");
pub(crate) static RIBBON_WGSL: &str = include_str!("../shaders/ribbon.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    scene: [[f32; 4]; 4],
    // xyz direction, w ambient
    light: [f32; 4],
    // xyz camera position, for the ribbon rim
    eye: [f32; 4],
    // x time
    params: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// One instanced draw: a shared mesh and one instance per entity.
struct MeshBatch {
    category: Category,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
}

fn mesh_for(category: Category) -> Mesh {
    match category {
        Category::Particle => mesh::octahedron(),
        Category::Bauble => mesh::sphere(12, 18),
        Category::Gift => mesh::cube(),
        Category::Star => mesh::star(5, 1.0, 0.45, 0.35),
    }
}

fn create_batch(device: &wgpu::Device, category: Category, instances: &[InstanceRaw]) -> MeshBatch {
    let mesh = mesh_for(category);
    let label = category.label();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(instances),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    });
    MeshBatch {
        category,
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
        instance_buffer,
        instance_count: instances.len() as u32,
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    mesh_pipeline: wgpu::RenderPipeline,
    batches: Vec<MeshBatch>,
    ribbon: RibbonResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        instances: &SceneInstances,
        strip: &RibbonStrip,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth_view = helpers::create_depth_view(&device, width, height);

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("instanced_shader"),
            source: wgpu::ShaderSource::Wgsl(INSTANCED_WGSL.into()),
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("instanced_pl"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });
        let buffers = [Vertex::layout(), InstanceRaw::layout()];
        let mesh_pipeline = helpers::make_scene_pipeline(
            &device,
            helpers::PipelineSpec {
                label: "instanced_pipeline",
                layout: &pl,
                shader: &shader,
                buffers: &buffers,
                color_format: format,
                cull_mode: Some(wgpu::Face::Back),
            },
        );

        let batches = Category::ALL
            .iter()
            .map(|&c| create_batch(&device, c, instances.batch(c)))
            .collect();
        let ribbon = create_ribbon_resources(&device, &globals_bgl, format, strip);
        log::info!("[render] surface {width}x{height} format={format:?}");

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            globals_buffer,
            globals_bg,
            mesh_pipeline,
            batches,
            ribbon,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = helpers::create_depth_view(&self.device, width, height);
        }
    }

    pub fn render(
        &mut self,
        instances: &SceneInstances,
        camera: &Camera,
        scene: Mat4,
        time: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        let globals = Globals {
            view_proj: camera.view_projection().to_cols_array_2d(),
            scene: scene.to_cols_array_2d(),
            light: [KEY_LIGHT_DIR[0], KEY_LIGHT_DIR[1], KEY_LIGHT_DIR[2], AMBIENT_LIGHT],
            eye: camera.eye.extend(1.0).to_array(),
            params: [time, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        for batch in &self.batches {
            let data = instances.batch(batch.category);
            self.queue
                .write_buffer(&batch.instance_buffer, 0, bytemuck::cast_slice(data));
        }
        self.ribbon.write(&self.queue, instances.ribbon, time);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            for batch in &self.batches {
                if batch.instance_count == 0 {
                    continue;
                }
                rpass.set_vertex_buffer(0, batch.vertex_buffer.slice(..));
                rpass.set_vertex_buffer(1, batch.instance_buffer.slice(..));
                rpass.set_index_buffer(batch.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..batch.index_count, 0, 0..batch.instance_count);
            }
            self.ribbon.draw(&mut rpass, &self.globals_bg);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
