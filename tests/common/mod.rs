// The main crate is wasm-only, so the pure-Rust core modules are included
// directly and compiled for the host.

#![allow(dead_code)]

pub mod eye {
    pub mod animations {
        include!("../../src/core/animations.rs");
    }
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod easing {
        include!("../../src/core/easing.rs");
    }
    pub mod geometry {
        include!("../../src/core/geometry.rs");
    }
    pub mod interaction {
        include!("../../src/core/interaction.rs");
    }
    pub mod params {
        include!("../../src/core/params.rs");
    }
    pub mod scene {
        include!("../../src/core/scene.rs");
    }
    pub mod settings {
        include!("../../src/core/settings.rs");
    }
    pub mod shadow {
        include!("../../src/core/shadow.rs");
    }
    pub mod timeline {
        include!("../../src/core/timeline.rs");
    }
    pub mod uniforms {
        include!("../../src/core/uniforms.rs");
    }
    pub mod viz {
        include!("../../src/core/viz.rs");
    }
}

/// Tick `viz` `ticks` times with a fixed step.
pub fn run_ticks(viz: &mut eye::viz::Visualization, ticks: usize, dt_sec: f32) {
    for _ in 0..ticks {
        viz.tick(dt_sec);
    }
}
