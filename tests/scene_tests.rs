// Host-side tests for the scene graph, meshes, shadow bitmap and uniform layouts.

mod common;

use common::eye::config::{Rgb, VizConfig};
use common::eye::constants::*;
use common::eye::geometry::{plane, uv_sphere, Mesh};
use common::eye::interaction::Viewport;
use common::eye::params::ShaderParams;
use common::eye::scene::{EyeScene, Transform};
use common::eye::shadow::radial_gradient;
use common::eye::uniforms::{EyeUniforms, ShadowUniforms, ShellUniforms};
use glam::{Mat4, Vec3};

fn scene() -> EyeScene {
    EyeScene::new(&VizConfig::default(), &Viewport::new(1200.0, 800.0))
}

fn triangle(mesh: &Mesh, t: usize) -> [Vec3; 3] {
    let p = |i: usize| Vec3::from_array(mesh.vertices[mesh.indices[3 * t + i] as usize].position);
    [p(0), p(1), p(2)]
}

#[test]
fn sphere_matches_expected_counts() {
    let mesh = uv_sphere(EYE_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS);
    assert_eq!(mesh.vertices.len(), 33 * 33);
    assert_eq!(mesh.indices.len(), 5952);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
}

#[test]
fn sphere_vertices_lie_on_surface() {
    let mesh = uv_sphere(2.0, 12, 8);
    for v in &mesh.vertices {
        let n = Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-5);
        assert!((Vec3::from_array(v.position) - n * 2.0).length() < 1e-5);
        assert!((0.0..=1.0).contains(&v.uv[0]) && (0.0..=1.0).contains(&v.uv[1]));
    }
}

#[test]
fn sphere_triangles_wind_outwards() {
    let mesh = uv_sphere(EYE_RADIUS, 16, 12);
    for t in 0..mesh.indices.len() / 3 {
        let [a, b, c] = triangle(&mesh, t);
        let face = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(face.dot(centroid) > 0.0, "triangle {t} faces inwards");
    }
}

#[test]
fn plane_faces_positive_z() {
    let mesh = plane(10.0);
    assert_eq!(mesh.vertices.len(), 4);
    for t in 0..2 {
        let [a, b, c] = triangle(&mesh, t);
        assert!((b - a).cross(c - a).z > 0.0);
    }
    let max_x = mesh.vertices.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
    assert_eq!(max_x, 5.0);
}

#[test]
fn gradient_is_dark_in_center_and_white_at_edges() {
    let size = (EYE_RADIUS * SHADOW_SIZE_FACTOR) as u32;
    let image = radial_gradient(size);
    assert_eq!(image.rgba.len(), (size * size * 4) as usize);

    let mid = size / 2;
    assert_eq!(image.pixel(mid, mid), [210, 210, 210, 255]);
    assert_eq!(image.pixel(0, 0), [255, 255, 255, 255]);
    assert_eq!(image.pixel(size - 1, mid), [255, 255, 255, 255]);

    // brightens monotonically from center to edge along a row
    let mut prev = 0;
    for x in mid..size {
        let r = image.pixel(x, mid)[0];
        assert!(r >= prev);
        prev = r;
    }
}

#[test]
fn scene_starts_with_camera_at_zoom_level() {
    let s = scene();
    assert_eq!(s.camera.position, Vec3::new(0.0, 0.0, 600.0));
    assert_eq!(s.camera.aspect, 1.5);
    assert!((s.inner_radius() - 29.9).abs() < 1e-5);
    assert_eq!(s.shadow_size(), 75.0);
    assert_eq!(s.shadow.position.y, -60.0);
}

#[test]
fn narrow_scene_lifts_camera() {
    let s = EyeScene::new(&VizConfig::default(), &Viewport::new(390.0, 844.0));
    assert_eq!(s.camera.position.y, NARROW_VIEWPORT_OFFSET_Y);
}

#[test]
fn transform_applies_scale_rotation_then_translation() {
    let t = Transform {
        position: Vec3::new(0.0, 10.0, 0.0),
        rotation: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
        scale: Vec3::splat(2.0),
    };
    let p = t.matrix().transform_point3(Vec3::X);
    assert!((p - Vec3::new(0.0, 10.0, -2.0)).length() < 1e-5);
}

#[test]
fn inner_sphere_pupil_faces_camera() {
    let s = scene();
    let pupil = s.inner_world().transform_vector3(Vec3::X);
    assert!((pupil - Vec3::Z).length() < 1e-5);
}

#[test]
fn shadow_plane_lies_almost_flat() {
    let s = scene();
    let up = s.shadow_world().transform_vector3(Vec3::Z).normalize();
    assert!(up.y > 0.99);
}

#[test]
fn uniform_blocks_have_wgsl_sizes() {
    assert_eq!(std::mem::size_of::<EyeUniforms>(), 128);
    assert_eq!(std::mem::size_of::<ShellUniforms>(), 240);
    assert_eq!(std::mem::size_of::<ShadowUniforms>(), 64);
}

#[test]
fn eye_uniforms_pack_shading_values() {
    let params = ShaderParams {
        shrink: -0.4,
        ..ShaderParams::default()
    };
    let u = EyeUniforms::new(Mat4::IDENTITY, &params);
    assert_eq!(u.shading, [-0.4, 0.65, 0.6, 0.5]);
    assert_eq!(u.mid_color, Rgb::from_u32(0xf2aa00).to_vec4(1.0));
    assert_eq!(u.mvp, Mat4::IDENTITY.to_cols_array_2d());
}

#[test]
fn shell_uniforms_carry_material() {
    let u = ShellUniforms::new(&scene());
    assert_eq!(u.diffuse[3], SHELL_OPACITY);
    assert_eq!(u.specular[3], SHELL_SHININESS);
    assert_eq!(u.camera_pos, [0.0, 0.0, 600.0, 1.0]);
    let dir = Vec3::new(u.light_dir[0], u.light_dir[1], u.light_dir[2]);
    assert!((dir.length() - 1.0).abs() < 1e-5);
    assert!((u.ambient[0] - 0.6 * AMBIENT_INTENSITY).abs() < 1e-6);
}
