use crate::core::Visualization;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel over the container moves the camera, clamped to the zoom bounds.
pub fn wire_wheel(container: &web::Element, viz: Rc<RefCell<Visualization>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let level = viz.borrow_mut().on_wheel(ev.delta_y() as f32);
        log::debug!("[wheel] zoom {:.1}", level);
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Window resize: resize the canvas backing store and refit the camera.
/// The surface itself is reconfigured by the frame loop when it sees the new size.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, viz: Rc<RefCell<Visualization>>) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            let viewport = dom::viewport_size(&window);
            dom::sync_canvas_backing_size(&canvas, viewport);
            viz.borrow_mut().on_resize(viewport);
            log::debug!("[resize] {}x{}", viewport.width, viewport.height);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
