//! Fire-and-forget fetch of the shell texture.
//!
//! The decoded pixels are parked in a shared slot; the frame loop uploads
//! them on its next tick. A failed fetch only logs: the shell keeps its
//! blank placeholder.

use crate::dom::js_error;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// RGBA8 pixels, rows top to bottom.
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub type PendingImage = Rc<RefCell<Option<DecodedImage>>>;

pub fn spawn_texture_fetch(url: &'static str, slot: PendingImage) {
    spawn_local(async move {
        match fetch_image(url).await {
            Ok(img) => {
                log::info!("[texture] loaded {} ({}x{})", url, img.width, img.height);
                *slot.borrow_mut() = Some(img);
            }
            Err(e) => log::warn!("[texture] {} unavailable: {:?}", url, e),
        }
    });
}

async fn fetch_image(url: &str) -> anyhow::Result<DecodedImage> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let request: js_sys::Promise = window.fetch_with_str(url);
    let response: web::Response = JsFuture::from(request)
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !response.ok() {
        anyhow::bail!("HTTP {}", response.status());
    }
    let blob: web::Blob = JsFuture::from(response.blob().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let bitmap: web::ImageBitmap =
        JsFuture::from(window.create_image_bitmap_with_blob(&blob).map_err(js_error)?)
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

    // Draw into a scratch 2D canvas to read the pixels back
    let (width, height) = (bitmap.width(), bitmap.height());
    let scratch: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    scratch.set_width(width);
    scratch.set_height(height);
    let ctx: web::CanvasRenderingContext2d = scratch
        .get_context("2d")
        .map_err(js_error)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(js_error)?;
    ctx.draw_image_with_image_bitmap(&bitmap, 0.0, 0.0)
        .map_err(js_error)?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(js_error)?;
    bitmap.close();

    Ok(DecodedImage {
        width,
        height,
        rgba: data.data().0,
    })
}
