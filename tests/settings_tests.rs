// Host-side tests for color parsing and the settings panel bindings.

mod common;

use common::eye::config::{ColorError, Rgb, VizConfig};
use common::eye::params::ShaderParams;
use common::eye::settings::*;

fn binding(id: &str) -> ControlBinding {
    controls()
        .into_iter()
        .find(|b| b.id == id)
        .unwrap_or_else(|| panic!("no control `{id}`"))
}

#[test]
fn hex_colors_parse_case_insensitively() {
    let c = Rgb::from_hex("#FF8000").unwrap();
    assert_eq!(c.r, 1.0);
    assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
    assert_eq!(c.b, 0.0);
    assert_eq!(Rgb::from_hex(" #03565c ").unwrap(), Rgb::from_u32(0x03565c));
}

#[test]
fn malformed_hex_colors_are_rejected() {
    assert!(matches!(Rgb::from_hex("03565c"), Err(ColorError::MissingHash(_))));
    assert!(matches!(Rgb::from_hex("#fff"), Err(ColorError::BadLength(_))));
    assert!(matches!(Rgb::from_hex("#12345g"), Err(ColorError::BadDigit(_))));
    assert!(matches!(Rgb::from_hex("#+12345"), Err(ColorError::BadDigit(_))));
}

#[test]
fn hex_output_matches_color_input_format() {
    let config = VizConfig::default();
    assert_eq!(config.base_color_1.to_hex(), "#03565c");
    assert_eq!(config.base_color_2.to_hex(), "#42cf44");
    assert_eq!(config.mid_color.to_hex(), "#f2aa00");
}

#[test]
fn default_config_keeps_zoom_inside_bounds() {
    let config = VizConfig::default();
    assert_eq!(config.clamp_zoom(config.zoom_level), config.zoom_level);
    assert_eq!(config.clamp_zoom(50.0), config.zoom_bounds[0]);
    assert_eq!(config.clamp_zoom(5000.0), config.zoom_bounds[1]);
}

#[test]
fn panel_lists_seven_controls_in_order() {
    let ids: Vec<_> = controls().iter().map(|b| b.id).collect();
    assert_eq!(
        ids,
        [SHRINK_CONTROL_ID, "base-color-1", "base-color-2", "mid-color", "vignette", "brightness", "darkness"]
    );
}

#[test]
fn slider_input_updates_its_field_only() {
    let mut params = ShaderParams::default();
    binding("vignette").apply_input(&mut params, "0.3").unwrap();
    assert_eq!(params.vignette, 0.3);
    assert_eq!(params.darkness, ShaderParams::default().darkness);
}

#[test]
fn slider_values_are_clamped_to_range() {
    let mut params = ShaderParams::default();
    let brightness = binding("brightness");
    brightness.apply(&mut params, ControlValue::Number(2.0)).unwrap();
    assert_eq!(params.brightness, 0.65);
    brightness.apply(&mut params, ControlValue::Number(-1.0)).unwrap();
    assert_eq!(params.brightness, 0.2);
}

#[test]
fn color_input_updates_color_field() {
    let mut params = ShaderParams::default();
    binding("mid-color").apply_input(&mut params, "#ff0000").unwrap();
    assert_eq!(params.mid_color, Rgb::from_u32(0xff0000));
    assert_eq!(binding("mid-color").format_value(&params), "#ff0000");
}

#[test]
fn bad_input_leaves_params_untouched() {
    let mut params = ShaderParams::default();
    let before = params;

    let err = binding("darkness").apply_input(&mut params, "dark").unwrap_err();
    assert_eq!(err, ControlError::BadNumber("dark".to_string()));

    let err = binding("base-color-2").apply_input(&mut params, "green").unwrap_err();
    assert_eq!(err, ControlError::Color(ColorError::MissingHash("green".to_string())));

    let err = binding("base-color-1")
        .apply(&mut params, ControlValue::Number(1.0))
        .unwrap_err();
    assert_eq!(err, ControlError::WrongKind("base-color-1", "number"));

    assert_eq!(params, before);
}

#[test]
fn shrink_value_round_trips_through_panel_text() {
    let mut params = ShaderParams::default();
    let shrink = binding(SHRINK_CONTROL_ID);
    assert_eq!(shrink.format_value(&params), "0");
    params.shrink = -0.45;
    let text = shrink.format_value(&params);
    let mut copy = ShaderParams::default();
    shrink.apply_input(&mut copy, &text).unwrap();
    assert_eq!(copy.shrink, -0.45);
}
