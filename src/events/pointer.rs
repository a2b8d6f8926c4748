use crate::core::Visualization;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub container: web::Element,
    pub canvas: web::HtmlCanvasElement,
    pub viz: Rc<RefCell<Visualization>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mousemove(&w);
    wire_touchmove(&w);
    wire_click(&w);
}

fn wire_mousemove(w: &InputWiring) {
    let viz = w.viz.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        viz.borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);

    _ = w
        .container
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchmove(w: &InputWiring) {
    let viz = w.viz.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            viz.borrow_mut()
                .on_pointer_move(touch.page_x() as f32, touch.page_y() as f32);
        }
    }) as Box<dyn FnMut(_)>);

    _ = w
        .container
        .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let viz = w.viz.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        viz.borrow_mut().on_click();
        log::info!("[click] shrink pulse");
    }) as Box<dyn FnMut()>);

    _ = w
        .canvas
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
