use glam::Mat4;
use tree_core::{Category, EntityRecord, RibbonUniforms, SceneDataset};

/// Per-instance vertex data: model matrix columns plus colour, with the entity
/// seed carried in alpha for the shader's twinkle.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

impl InstanceRaw {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    fn from_record(record: &EntityRecord) -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: record.color.extend(record.seed).to_array(),
        }
    }
}

#[inline]
fn slot(category: Category) -> usize {
    match category {
        Category::Particle => 0,
        Category::Bauble => 1,
        Category::Gift => 2,
        Category::Star => 3,
    }
}

/// CPU side of the instance buffers, filled by the scene every frame.
pub struct SceneInstances {
    batches: [Vec<InstanceRaw>; 4],
    pub(crate) ribbon: RibbonUniforms,
}

impl SceneInstances {
    pub fn from_dataset(dataset: &SceneDataset) -> Self {
        let build = |c: Category| -> Vec<InstanceRaw> {
            dataset
                .records(c)
                .iter()
                .map(InstanceRaw::from_record)
                .collect()
        };
        Self {
            batches: Category::ALL.map(build),
            ribbon: RibbonUniforms::default(),
        }
    }

    #[inline]
    pub fn set(&mut self, category: Category, index: usize, transform: Mat4) {
        if let Some(inst) = self.batches[slot(category)].get_mut(index) {
            inst.model = transform.to_cols_array_2d();
        }
    }

    pub(crate) fn batch(&self, category: Category) -> &[InstanceRaw] {
        &self.batches[slot(category)]
    }
}
