use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::settings::SHRINK_CONTROL_ID;
use crate::core::Visualization;
use crate::loader::PendingImage;
use crate::panel::SettingsPanel;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub viz: Rc<RefCell<Visualization>>,
    pub gpu: render::GpuState<'a>,
    pub panel: Rc<SettingsPanel>,
    pub pending_texture: PendingImage,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        if let Some(image) = self.pending_texture.borrow_mut().take() {
            self.gpu.set_shell_texture(&image);
        }

        let update = self.viz.borrow_mut().tick(dt_sec);
        let viz = self.viz.borrow();
        if update.shrink_animated {
            self.panel.sync(SHRINK_CONTROL_ID, &viz.params);
        }

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(&viz) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
