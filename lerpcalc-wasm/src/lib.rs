//! WASM bindings for the interpolation calculator.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p lerpcalc-wasm
//! ```

use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use lerpcalc::{Calculator, FieldState, RawFields};

fn calc() -> Calculator {
    Calculator::new()
}

fn to_js(e: lerpcalc::LerpError) -> JsError {
    JsError::new(&e.to_string())
}

// ── Keystroke validation ──

/// Returns `undefined` for an empty field, otherwise whether it holds a
/// finite number.
#[wasm_bindgen]
pub fn check_field(raw: &str) -> Option<bool> {
    match lerpcalc::check_field(raw) {
        FieldState::Empty => None,
        FieldState::Number(_) => Some(true),
        FieldState::Invalid => Some(false),
    }
}

/// Whether the calculate button should be enabled.
#[wasm_bindgen]
pub fn can_calculate(x1: &str, y1: &str, x2: &str, y2: &str, x_target: &str) -> bool {
    calc()
        .validate(&RawFields::new(x1, y1, x2, y2, x_target))
        .can_calculate()
}

/// Error to show beside the form while typing, if any.
#[wasm_bindgen]
pub fn inline_message(x1: &str, y1: &str, x2: &str, y2: &str, x_target: &str) -> Option<String> {
    calc()
        .validate(&RawFields::new(x1, y1, x2, y2, x_target))
        .inline_message()
}

// ── Calculation ──

/// Returns `{ value, slope, headline, coordinates, steps: [{ title, lines }] }`.
#[wasm_bindgen]
pub fn calculate(
    x1: &str,
    y1: &str,
    x2: &str,
    y2: &str,
    x_target: &str,
) -> Result<JsValue, JsError> {
    let calc = calc();
    let request = calc
        .validate(&RawFields::new(x1, y1, x2, y2, x_target))
        .into_result()
        .map_err(to_js)?;
    let result = calc.compute(&request).map_err(to_js)?;
    let report = calc.report(&request, &result);
    to_value(&report).map_err(|e| JsError::new(&e.to_string()))
}

/// Returns the interpolated value alone.
#[wasm_bindgen]
pub fn interpolate(x1: f64, y1: f64, x2: f64, y2: f64, x_target: f64) -> Result<f64, JsError> {
    let request = lerpcalc::InterpolationRequest::new(
        lerpcalc::Point::new(x1, y1),
        lerpcalc::Point::new(x2, y2),
        x_target,
    );
    calc().compute(&request).map(|r| r.value).map_err(to_js)
}

// ── Formatting ──

#[wasm_bindgen]
pub fn format_number(n: f64) -> String {
    lerpcalc::format_number(n)
}
