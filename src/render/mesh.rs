// Procedural meshes for the instanced categories. No wgpu types in here so the
// host tests can include this file directly.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    fn push(&mut self, position: Vec3, normal: Vec3) -> u16 {
        let index = self.vertices.len() as u16;
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        });
        index
    }

    /// Flat-shaded triangle with its own vertices.
    fn facet(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let normal = (b - a).cross(c - a);
        let ia = self.push(a, normal);
        let ib = self.push(b, normal);
        let ic = self.push(c, normal);
        self.indices.extend_from_slice(&[ia, ib, ic]);
    }
}

/// Unit UV sphere for baubles.
pub fn sphere(rings: u16, sectors: u16) -> Mesh {
    let rings = rings.max(2);
    let sectors = sectors.max(3);
    let mut mesh = Mesh::default();
    for r in 0..=rings {
        let phi = PI * r as f32 / rings as f32;
        for s in 0..=sectors {
            let theta = TAU * s as f32 / sectors as f32;
            let p = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            mesh.push(p, p);
        }
    }
    let stride = sectors + 1;
    for r in 0..rings {
        for s in 0..sectors {
            let a = r * stride + s;
            let b = a + stride;
            mesh.indices
                .extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }
    mesh
}

/// Unit cube (edge 1) for gifts.
pub fn cube() -> Mesh {
    let mut mesh = Mesh::default();
    let faces = [Vec3::X, -Vec3::X, Vec3::Y, -Vec3::Y, Vec3::Z, -Vec3::Z];
    for n in faces {
        // two axes spanning the face, ordered so the winding faces outward
        let u = if n.y.abs() > 0.5 { Vec3::X } else { Vec3::Y };
        let v = n.cross(u);
        let c = n * 0.5;
        let corners = [
            c - u * 0.5 - v * 0.5,
            c + u * 0.5 - v * 0.5,
            c + u * 0.5 + v * 0.5,
            c - u * 0.5 + v * 0.5,
        ];
        let base = mesh.vertices.len() as u16;
        for p in corners {
            mesh.push(p, n);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Extruded five-point star facing +Z.
pub fn star(points: usize, outer: f32, inner: f32, depth: f32) -> Mesh {
    let points = points.max(3);
    let mut mesh = Mesh::default();
    let rim: Vec<Vec3> = (0..points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let a = PI / 2.0 + PI * i as f32 / points as f32;
            Vec3::new(a.cos() * r, a.sin() * r, 0.0)
        })
        .collect();
    let front = Vec3::Z * depth * 0.5;
    let back = -front;
    for i in 0..rim.len() {
        let a = rim[i];
        let b = rim[(i + 1) % rim.len()];
        // bevelled faces meet at the centre front and back
        mesh.facet(a, b, front);
        mesh.facet(b, a, back);
    }
    mesh
}

/// Small octahedron standing in for a foliage point.
pub fn octahedron() -> Mesh {
    let mut mesh = Mesh::default();
    let ys = [Vec3::Y, -Vec3::Y];
    let ring = [Vec3::X, Vec3::Z, -Vec3::X, -Vec3::Z];
    for y in ys {
        for i in 0..4 {
            let a = ring[i];
            let b = ring[(i + 1) % 4];
            if y.y > 0.0 {
                mesh.facet(a, y, b);
            } else {
                mesh.facet(a, b, y);
            }
        }
    }
    mesh
}
