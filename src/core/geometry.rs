// Triangle meshes for the eyeball spheres and the shadow plane.

use std::f32::consts::PI;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

/// UV sphere centered at the origin, counter-clockwise winding seen from outside.
///
/// `u` runs around the Y axis starting at -X, `v` runs from the north pole
/// (v = 1) to the south pole (v = 0). Pole rows emit a single triangle per
/// quad, so the mesh has `2 * w * h - 2 * w` triangles.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);

    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let theta = v * PI;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let phi = u * 2.0 * PI;
            let normal = [-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin()];
            vertices.push(MeshVertex {
                position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
                normal,
                uv: [u, 1.0 - v],
            });
        }
    }

    let row = w + 1;
    let mut indices = Vec::with_capacity((6 * w * (h - 1)) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    Mesh { vertices, indices }
}

/// Single-quad plane in the XY plane facing +Z.
pub fn plane(size: f32) -> Mesh {
    let half = size * 0.5;
    let normal = [0.0, 0.0, 1.0];
    let vertex = |x: f32, y: f32, u: f32, v: f32| MeshVertex {
        position: [x, y, 0.0],
        normal,
        uv: [u, v],
    };
    Mesh {
        vertices: vec![
            vertex(-half, half, 0.0, 1.0),
            vertex(half, half, 1.0, 1.0),
            vertex(-half, -half, 0.0, 0.0),
            vertex(half, -half, 1.0, 0.0),
        ],
        indices: vec![0, 2, 1, 2, 3, 1],
    }
}
