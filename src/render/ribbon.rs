use super::helpers::{self, PipelineSpec};
use tree_core::{RibbonStrip, RibbonUniforms};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct RibbonVertex {
    position: [f32; 3],
    normal: [f32; 3],
    uv: [f32; 2],
}

impl RibbonVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RibbonVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct RibbonParams {
    growth: f32,
    shimmer: f32,
    presence: f32,
    time: f32,
}

pub(crate) struct RibbonResources {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub(crate) fn create_ribbon_resources(
    device: &wgpu::Device,
    globals_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    strip: &RibbonStrip,
) -> RibbonResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("ribbon_shader"),
        source: wgpu::ShaderSource::Wgsl(super::RIBBON_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("ribbon_bgl"),
        entries: &[helpers::uniform_layout_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("ribbon_pl"),
        bind_group_layouts: &[globals_bgl, &bgl],
        push_constant_ranges: &[],
    });
    let buffers = [RibbonVertex::layout()];
    let pipeline = helpers::make_scene_pipeline(
        device,
        PipelineSpec {
            label: "ribbon_pipeline",
            layout: &pl,
            shader: &shader,
            buffers: &buffers,
            color_format,
            // the strip is seen from both sides while the camera orbits
            cull_mode: None,
        },
    );

    let vertices: Vec<RibbonVertex> = (0..strip.vertex_count())
        .map(|i| RibbonVertex {
            position: strip.positions[i],
            normal: strip.normals[i],
            uv: strip.uvs[i],
        })
        .collect();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("ribbon_vb"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("ribbon_ib"),
        contents: bytemuck::cast_slice(&strip.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("ribbon_uniforms"),
        size: std::mem::size_of::<RibbonParams>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("ribbon_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    RibbonResources {
        pipeline,
        vertex_buffer,
        index_buffer,
        index_count: strip.indices.len() as u32,
        uniform_buffer,
        bind_group,
    }
}

impl RibbonResources {
    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: RibbonUniforms, time: f32) {
        let params = RibbonParams {
            growth: uniforms.growth,
            shimmer: uniforms.shimmer,
            presence: uniforms.presence,
            time,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&params));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, globals: &wgpu::BindGroup) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, globals, &[]);
        rpass.set_bind_group(1, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
