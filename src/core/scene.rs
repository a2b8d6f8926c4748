// Fixed scene graph: one group holding both eyeball spheres, plus a shadow
// plane at the root. World matrices are composed on demand.

use glam::{Mat4, Vec3};

use super::config::{Rgb, VizConfig};
use super::constants::*;
use super::interaction::{camera_offset_y, Viewport};

/// Position, Euler rotation (radians, X then Y then Z) and scale of a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let rotation = Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z);
        Mat4::from_translation(self.position) * rotation * Mat4::from_scale(self.scale)
    }
}

/// Perspective camera looking down -Z from `position`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Light colors are premultiplied by their intensity.
#[derive(Clone, Copy, Debug)]
pub struct Lighting {
    pub ambient: Rgb,
    pub directional: Rgb,
    /// Unit vector pointing from the scene towards the light.
    pub direction: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: Rgb::from_u32(AMBIENT_COLOR).scaled(AMBIENT_INTENSITY),
            directional: Rgb::from_u32(DIRECTIONAL_COLOR).scaled(DIRECTIONAL_INTENSITY),
            direction: Vec3::from_array(DIRECTIONAL_POSITION).normalize(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EyeScene {
    pub camera: Camera,
    pub lighting: Lighting,
    pub background: Rgb,
    pub radius: f32,
    /// Parent of `shell` and `inner`; animated and pointer-driven.
    pub group: Transform,
    pub shell: Transform,
    pub inner: Transform,
    pub shadow: Transform,
}

impl EyeScene {
    pub fn new(config: &VizConfig, viewport: &Viewport) -> Self {
        let radius = EYE_RADIUS;
        let camera = Camera {
            position: Vec3::new(0.0, camera_offset_y(viewport.width), config.clamp_zoom(config.zoom_level)),
            aspect: viewport.aspect(),
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        };
        let inner = Transform {
            rotation: Vec3::new(0.0, -std::f32::consts::FRAC_PI_2, 0.0),
            ..Default::default()
        };
        let shadow = Transform {
            position: Vec3::new(0.0, -SHADOW_DROP_FACTOR * radius, 0.0),
            rotation: Vec3::new(-std::f32::consts::PI / SHADOW_TILT_DIVISOR, 0.0, 0.0),
            ..Default::default()
        };
        Self {
            camera,
            lighting: Lighting::default(),
            background: Rgb::from_u32(BACKGROUND_COLOR),
            radius,
            group: Transform::default(),
            shell: Transform::default(),
            inner,
            shadow,
        }
    }

    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.radius - EYE_INNER_INSET
    }

    #[inline]
    pub fn shadow_size(&self) -> f32 {
        self.radius * SHADOW_SIZE_FACTOR
    }

    /// Move the camera to `distance` along Z and reapply the viewport's vertical offset.
    pub fn set_camera_distance(&mut self, distance: f32, viewport: &Viewport) {
        self.camera.position.z = distance;
        self.camera.position.y = camera_offset_y(viewport.width);
    }

    pub fn shell_world(&self) -> Mat4 {
        self.group.matrix() * self.shell.matrix()
    }

    pub fn inner_world(&self) -> Mat4 {
        self.group.matrix() * self.inner.matrix()
    }

    pub fn shadow_world(&self) -> Mat4 {
        self.shadow.matrix()
    }
}
