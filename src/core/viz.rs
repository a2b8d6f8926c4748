use super::animations::{self, Channel};
use super::config::VizConfig;
use super::constants::ROTATION_DAMPING;
use super::interaction::{damp_towards, PointerState, Viewport, Zoom};
use super::params::ShaderParams;
use super::scene::EyeScene;
use super::timeline::{Playback, Timeline};

/// What changed during one [`Visualization::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameUpdate {
    /// The shrink pulse wrote `params.shrink`; the panel should mirror it.
    pub shrink_animated: bool,
}

pub struct Visualization {
    pub config: VizConfig,
    pub scene: EyeScene,
    pub params: ShaderParams,
    pub pointer: PointerState,
    viewport: Viewport,
    zoom: Zoom,
    entrance: Timeline<Channel>,
    shrink_pulse: Timeline<Channel>,
}

impl Visualization {
    /// Build the scene at rest, then pose it at the first frame of the entrance.
    pub fn new(config: VizConfig, viewport: Viewport) -> Self {
        let scene = EyeScene::new(&config, &viewport);
        let params = ShaderParams::from_config(&config);
        let zoom = Zoom::new(config.zoom_level, config.zoom_bounds);
        let entrance = animations::entrance();
        let shrink_pulse = animations::shrink_pulse(config.shrink);
        let mut viz = Self {
            config,
            scene,
            params,
            pointer: PointerState::default(),
            viewport,
            zoom,
            entrance,
            shrink_pulse,
        };
        let Self {
            entrance,
            scene,
            params,
            ..
        } = &mut viz;
        entrance.render_start(|ch, v| apply_channel(scene, params, ch, v));
        viz
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom.level()
    }

    pub fn entrance(&self) -> &Timeline<Channel> {
        &self.entrance
    }

    pub fn shrink_pulse(&self) -> &Timeline<Channel> {
        &self.shrink_pulse
    }

    pub fn start_entrance(&mut self) {
        log::debug!("[anim] entrance start");
        self.entrance.play_from_start();
    }

    /// Pointer or first touch moved to viewport coordinates `(x, y)`.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = PointerState::from_client(x, y, &self.viewport);
    }

    /// Wheel scrolled by `delta_y`; the camera follows immediately.
    pub fn on_wheel(&mut self, delta_y: f32) -> f32 {
        let level = self.zoom.apply_wheel(delta_y);
        self.config.zoom_level = level;
        self.scene.set_camera_distance(level, &self.viewport);
        level
    }

    /// Click on the canvas: replay the shrink pulse from its first segment.
    ///
    /// The contraction starts from the live shrink value the first time the
    /// pulse plays; later restarts replay that same recorded curve.
    pub fn on_click(&mut self) {
        if self.shrink_pulse.state() == Playback::Paused {
            self.shrink_pulse = animations::shrink_pulse(self.params.shrink);
        }
        if self.shrink_pulse.is_playing() {
            log::debug!("[anim] shrink pulse interrupted at {:.2}s", self.shrink_pulse.elapsed());
        }
        self.shrink_pulse.play_from_start();
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.scene.camera.aspect = viewport.aspect();
        self.scene.set_camera_distance(self.zoom.level(), &viewport);
    }

    /// Advance both timelines, then damp the group rotation towards the pointer.
    pub fn tick(&mut self, dt_sec: f32) -> FrameUpdate {
        let Self {
            entrance,
            shrink_pulse,
            scene,
            params,
            pointer,
            ..
        } = self;
        entrance.advance(dt_sec, |ch, v| apply_channel(scene, params, ch, v));
        let shrink_animated = shrink_pulse.advance(dt_sec, |ch, v| apply_channel(scene, params, ch, v));

        let (target_x, target_y) = pointer.rotation_target();
        let rotation = &mut scene.group.rotation;
        rotation.x = damp_towards(rotation.x, target_x, ROTATION_DAMPING);
        rotation.y = damp_towards(rotation.y, target_y, ROTATION_DAMPING);

        FrameUpdate { shrink_animated }
    }
}

fn apply_channel(scene: &mut EyeScene, params: &mut ShaderParams, channel: Channel, value: f32) {
    match channel {
        Channel::GroupY => scene.group.position.y = value,
        Channel::GroupRotX => scene.group.rotation.x = value,
        Channel::GroupRotZ => scene.group.rotation.z = value,
        Channel::ShadowScaleX => scene.shadow.scale.x = value,
        Channel::Shrink => params.shrink = value,
    }
}
