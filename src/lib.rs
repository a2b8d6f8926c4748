#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, CONTAINER_SELECTOR, EYE_TEXTURE_URL, PANEL_ID};
use crate::core::{VizConfig, Visualization};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod loader;
mod panel;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("eyeball-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = document
        .query_selector(CONTAINER_SELECTOR)
        .map_err(dom::js_error)?
        .ok_or_else(|| anyhow::anyhow!("missing {}", CONTAINER_SELECTOR))?;
    let canvas = dom::create_canvas(&document, &container, CANVAS_ID)?;

    let viewport = dom::viewport_size(&window);
    dom::sync_canvas_backing_size(&canvas, viewport);

    let viz = Visualization::new(VizConfig::default(), viewport);

    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = render::GpuState::new(leaked_canvas, &viz).await?;
    let viz = Rc::new(RefCell::new(viz));

    let panel = Rc::new(panel::SettingsPanel::mount(&document, PANEL_ID, viz.clone())?);

    let pending_texture: loader::PendingImage = Rc::new(RefCell::new(None));
    loader::spawn_texture_fetch(EYE_TEXTURE_URL, pending_texture.clone());

    events::wire_input_handlers(events::InputWiring {
        container: container.clone(),
        canvas: canvas.clone(),
        viz: viz.clone(),
    });
    events::wire_wheel(&container, viz.clone());
    events::wire_resize(&canvas, viz.clone());

    viz.borrow_mut().start_entrance();

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        viz,
        gpu,
        panel,
        pending_texture,
        canvas,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
