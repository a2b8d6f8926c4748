use crate::core::interaction::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn js_error(e: impl std::fmt::Debug) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Inner size of the browser window in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Viewport {
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32
    };
    Viewport::new(px(window.inner_width()), px(window.inner_height()))
}

/// Create the drawing canvas and append it to `container`.
pub fn create_canvas(
    document: &web::Document,
    container: &web::Element,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_error)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(js_error)?;
    canvas.set_id(id);
    container.append_child(&canvas).map_err(js_error)?;
    Ok(canvas)
}

/// Size the canvas to the viewport in CSS pixels and its backing store to
/// CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let w_px = (viewport.width as f64 * dpr) as u32;
    let h_px = (viewport.height as f64 * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    _ = canvas.set_attribute(
        "style",
        &format!(
            "display:block;width:{}px;height:{}px",
            viewport.width, viewport.height
        ),
    );
}
