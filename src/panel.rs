//! Floating settings panel: one `<input>` per control binding, writing
//! straight into the visualization's shader parameters.

use crate::core::settings::{self, ControlBinding, ControlKind};
use crate::core::{ShaderParams, Visualization};
use crate::dom::js_error;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_STYLE: &str = "position:fixed;top:0;right:16px;z-index:10;min-width:240px;\
padding:8px 10px;background:#1f1f1f;color:#ebebeb;font:11px sans-serif;\
display:grid;grid-template-columns:auto 1fr;gap:6px 10px;align-items:center";

pub struct SettingsPanel {
    inputs: Vec<(ControlBinding, web::HtmlInputElement)>,
}

impl SettingsPanel {
    pub fn mount(
        document: &web::Document,
        panel_id: &str,
        viz: Rc<RefCell<Visualization>>,
    ) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no document body"))?;
        let root = document.create_element("div").map_err(js_error)?;
        root.set_id(panel_id);
        _ = root.set_attribute("style", PANEL_STYLE);

        let mut inputs = Vec::new();
        for binding in settings::controls() {
            let input = create_input(document, &binding, &viz.borrow().params)?;
            let label = document.create_element("label").map_err(js_error)?;
            label.set_text_content(Some(binding.label));
            _ = label.set_attribute("for", &input_id(&binding));
            root.append_child(&label).map_err(js_error)?;
            root.append_child(&input).map_err(js_error)?;
            wire_input(&input, binding, viz.clone());
            inputs.push((binding, input));
        }
        body.append_child(&root).map_err(js_error)?;
        log::info!("[panel] mounted {} controls", inputs.len());
        Ok(Self { inputs })
    }

    /// Mirror the current value of control `id` into its widget.
    pub fn sync(&self, id: &str, params: &ShaderParams) {
        if let Some((binding, input)) = self.inputs.iter().find(|(b, _)| b.id == id) {
            input.set_value(&binding.format_value(params));
        }
    }
}

fn input_id(binding: &ControlBinding) -> String {
    format!("eye-control-{}", binding.id)
}

fn create_input(
    document: &web::Document,
    binding: &ControlBinding,
    params: &ShaderParams,
) -> anyhow::Result<web::HtmlInputElement> {
    let input: web::HtmlInputElement = document
        .create_element("input")
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    input.set_id(&input_id(binding));
    match binding.kind {
        ControlKind::Slider { min, max, step } => {
            input.set_type("range");
            input.set_min(&min.to_string());
            input.set_max(&max.to_string());
            input.set_step(&step.to_string());
        }
        ControlKind::Color => input.set_type("color"),
    }
    input.set_value(&binding.format_value(params));
    Ok(input)
}

fn wire_input(input: &web::HtmlInputElement, binding: ControlBinding, viz: Rc<RefCell<Visualization>>) {
    let source = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let raw = source.value();
        if let Err(e) = binding.apply_input(&mut viz.borrow_mut().params, &raw) {
            log::warn!("[panel] {}: {}", binding.label, e);
        }
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}
