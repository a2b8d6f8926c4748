// Typed bindings between the settings panel and `ShaderParams`.

use thiserror::Error;

use super::config::{ColorError, Rgb};
use super::params::ShaderParams;

#[derive(Debug, Error, PartialEq)]
pub enum ControlError {
    #[error("`{0}` is not a number")]
    BadNumber(String),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("control `{0}` does not take a {1} value")]
    WrongKind(&'static str, &'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlKind {
    Slider { min: f32, max: f32, step: f32 },
    Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlValue {
    Number(f32),
    Color(Rgb),
}

#[derive(Clone, Copy)]
pub struct ControlBinding {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ControlKind,
    pub get: fn(&ShaderParams) -> ControlValue,
    pub set: fn(&mut ShaderParams, ControlValue),
}

impl std::fmt::Debug for ControlBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlBinding")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .finish()
    }
}

pub const SHRINK_CONTROL_ID: &str = "shrink";

impl ControlBinding {
    /// Apply a value, clamping sliders to their range.
    pub fn apply(&self, params: &mut ShaderParams, value: ControlValue) -> Result<(), ControlError> {
        let value = match (self.kind, value) {
            (ControlKind::Slider { min, max, .. }, ControlValue::Number(v)) => {
                ControlValue::Number(v.clamp(min, max))
            }
            (ControlKind::Color, v @ ControlValue::Color(_)) => v,
            (ControlKind::Slider { .. }, ControlValue::Color(_)) => {
                return Err(ControlError::WrongKind(self.id, "color"))
            }
            (ControlKind::Color, ControlValue::Number(_)) => {
                return Err(ControlError::WrongKind(self.id, "number"))
            }
        };
        (self.set)(params, value);
        Ok(())
    }

    /// Apply the raw string value of the panel's `<input>` element.
    pub fn apply_input(&self, params: &mut ShaderParams, raw: &str) -> Result<(), ControlError> {
        let value = match self.kind {
            ControlKind::Slider { .. } => ControlValue::Number(
                raw.trim()
                    .parse::<f32>()
                    .map_err(|_| ControlError::BadNumber(raw.to_string()))?,
            ),
            ControlKind::Color => ControlValue::Color(Rgb::from_hex(raw)?),
        };
        self.apply(params, value)
    }

    /// Current value formatted for the panel's `<input>` element.
    pub fn format_value(&self, params: &ShaderParams) -> String {
        match (self.get)(params) {
            ControlValue::Number(v) => format!("{v}"),
            ControlValue::Color(c) => c.to_hex(),
        }
    }
}

fn number(v: ControlValue) -> Option<f32> {
    match v {
        ControlValue::Number(n) => Some(n),
        ControlValue::Color(_) => None,
    }
}

fn color(v: ControlValue) -> Option<Rgb> {
    match v {
        ControlValue::Color(c) => Some(c),
        ControlValue::Number(_) => None,
    }
}

/// The seven controls of the settings panel, in display order.
pub fn controls() -> [ControlBinding; 7] {
    const STEP: f32 = 0.05;
    [
        ControlBinding {
            id: SHRINK_CONTROL_ID,
            label: "shrink",
            kind: ControlKind::Slider {
                min: -0.9,
                max: 0.3,
                step: STEP,
            },
            get: |p| ControlValue::Number(p.shrink),
            set: |p, v| {
                if let Some(n) = number(v) {
                    p.shrink = n;
                }
            },
        },
        ControlBinding {
            id: "base-color-1",
            label: "base color #1",
            kind: ControlKind::Color,
            get: |p| ControlValue::Color(p.base_color_1),
            set: |p, v| {
                if let Some(c) = color(v) {
                    p.base_color_1 = c;
                }
            },
        },
        ControlBinding {
            id: "base-color-2",
            label: "base color #2",
            kind: ControlKind::Color,
            get: |p| ControlValue::Color(p.base_color_2),
            set: |p, v| {
                if let Some(c) = color(v) {
                    p.base_color_2 = c;
                }
            },
        },
        ControlBinding {
            id: "mid-color",
            label: "middle color",
            kind: ControlKind::Color,
            get: |p| ControlValue::Color(p.mid_color),
            set: |p, v| {
                if let Some(c) = color(v) {
                    p.mid_color = c;
                }
            },
        },
        ControlBinding {
            id: "vignette",
            label: "vignette",
            kind: ControlKind::Slider {
                min: 0.0,
                max: 1.0,
                step: STEP,
            },
            get: |p| ControlValue::Number(p.vignette),
            set: |p, v| {
                if let Some(n) = number(v) {
                    p.vignette = n;
                }
            },
        },
        ControlBinding {
            id: "brightness",
            label: "brightness",
            kind: ControlKind::Slider {
                min: 0.2,
                max: 0.65,
                step: STEP,
            },
            get: |p| ControlValue::Number(p.brightness),
            set: |p, v| {
                if let Some(n) = number(v) {
                    p.brightness = n;
                }
            },
        },
        ControlBinding {
            id: "darkness",
            label: "darkness",
            kind: ControlKind::Slider {
                min: 0.0,
                max: 1.0,
                step: STEP,
            },
            get: |p| ControlValue::Number(p.darkness),
            set: |p, v| {
                if let Some(n) = number(v) {
                    p.darkness = n;
                }
            },
        },
    ]
}
