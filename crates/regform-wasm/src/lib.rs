//! regform WASM
//!
//! WebAssembly bindings for the registration form core.
//! Runs the same rules in the browser that the command-line checker uses.

use regform::events;
use regform::{
    controller, FeedbackEvent, FeedbackSink, FieldFeedback, FieldId, FormState, FormValues,
    RuleContext, StrengthMeter, SubmitOutcome,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_field(field: &str) -> Result<FieldId, JsValue> {
    field
        .parse::<FieldId>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

// Maps become plain objects so `perField.email` works on the JS side;
// `None` becomes `null` rather than `undefined`
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new()
        .serialize_maps_as_objects(true)
        .serialize_missing_as_null(true);
    value.serialize(&serializer).map_err(Into::into)
}

fn context(password: &Option<String>) -> RuleContext<'_> {
    RuleContext {
        password: password.as_deref(),
    }
}

/// Validate a single field value
///
/// # Arguments
/// * `field` - Field id as used in the markup (`"email"`, `"confirmPassword"`, ...)
/// * `value` - Raw input value
/// * `password` - Current password, required for `confirmPassword`
///
/// # Example (JavaScript)
/// ```javascript
/// const { valid, errorKind } = validateField('mobile', '9876543210');
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(
    field: &str,
    value: &str,
    password: Option<String>,
) -> Result<JsValue, JsValue> {
    let field = parse_field(field)?;
    to_js(&controller::validate_field(field, value, &context(&password)))
}

/// Validate a whole submission
///
/// `values` is an object keyed by field id:
/// `{ fullName, email, mobile, age, gender, password, confirmPassword }`
#[wasm_bindgen(js_name = validateAll)]
pub fn validate_all(values: JsValue) -> Result<JsValue, JsValue> {
    let values: FormValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))?;
    to_js(&controller::validate_all(&values))
}

#[wasm_bindgen(js_name = classifyStrength)]
pub fn classify_strength(password: &str) -> Result<JsValue, JsValue> {
    to_js(&controller::classify_strength(password))
}

/// Meter contents, or `null` when the password is empty
#[wasm_bindgen(js_name = strengthMeter)]
pub fn strength_meter(password: &str) -> Result<JsValue, JsValue> {
    to_js(&StrengthMeter::for_password(password))
}

/// Validate one field and return the cues to apply (class, glyph, color, message)
#[wasm_bindgen(js_name = fieldFeedback)]
pub fn field_feedback(
    field: &str,
    value: &str,
    password: Option<String>,
) -> Result<JsValue, JsValue> {
    let field = parse_field(field)?;
    let result = controller::validate_field(field, value, &context(&password));
    to_js(&FieldFeedback::for_result(field, &result))
}

/// Forwards feedback events to a JavaScript callback
///
/// The first failure (serialization or a throwing callback) is kept and
/// returned once the handler finishes; later ones go to the console.
struct JsSink<'a> {
    callback: &'a js_sys::Function,
    error: Option<JsValue>,
}

impl<'a> JsSink<'a> {
    fn new(callback: &'a js_sys::Function) -> Self {
        Self {
            callback,
            error: None,
        }
    }

    fn finish(self) -> Result<(), JsValue> {
        self.error.map_or(Ok(()), Err)
    }
}

impl FeedbackSink for JsSink<'_> {
    fn emit(&mut self, event: FeedbackEvent) {
        let delivered = to_js(&event).and_then(|js| self.callback.call1(&JsValue::NULL, &js));
        if let Err(err) = delivered {
            if self.error.is_some() {
                web_sys::console::warn_2(
                    &JsValue::from_str("regform: feedback callback failed"),
                    &err,
                );
            } else {
                self.error = Some(err);
            }
        }
    }
}

/// Live form state for one page session
///
/// # Example (JavaScript)
/// ```javascript
/// const form = new FormSession();
/// const render = (event) => { /* apply event.kind = field | strength | submitted */ };
/// emailInput.addEventListener('blur', () => form.blur('email', render));
/// passwordInput.addEventListener('input', (e) => form.input('password', e.target.value, render));
/// regForm.addEventListener('submit', (e) => { e.preventDefault(); form.submit(render); });
/// ```
#[wasm_bindgen]
pub struct FormSession {
    state: FormState,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl FormSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FormSession {
        FormSession {
            state: FormState::new(),
        }
    }

    pub fn input(
        &mut self,
        field: &str,
        value: &str,
        callback: &js_sys::Function,
    ) -> Result<(), JsValue> {
        let field = parse_field(field)?;
        let mut sink = JsSink::new(callback);
        events::on_input(&mut self.state, &mut sink, field, value);
        sink.finish()
    }

    /// Returns whether the field is now valid
    pub fn blur(&mut self, field: &str, callback: &js_sys::Function) -> Result<bool, JsValue> {
        let field = parse_field(field)?;
        let mut sink = JsSink::new(callback);
        let result = events::on_blur(&mut self.state, &mut sink, field);
        sink.finish().map(|()| result.valid)
    }

    /// Returns whether the field is now valid
    pub fn change(
        &mut self,
        field: &str,
        value: &str,
        callback: &js_sys::Function,
    ) -> Result<bool, JsValue> {
        let field = parse_field(field)?;
        let mut sink = JsSink::new(callback);
        let result = events::on_change(&mut self.state, &mut sink, field, value);
        sink.finish().map(|()| result.valid)
    }

    /// Returns true when the form was accepted (and reset)
    pub fn submit(&mut self, callback: &js_sys::Function) -> Result<bool, JsValue> {
        let mut sink = JsSink::new(callback);
        let outcome = events::on_submit(&mut self.state, &mut sink);
        sink.finish().map(|()| outcome == SubmitOutcome::Accepted)
    }

    pub fn clear(&mut self, callback: &js_sys::Function) -> Result<(), JsValue> {
        let mut sink = JsSink::new(callback);
        events::on_clear(&mut self.state, &mut sink);
        sink.finish()
    }

    #[wasm_bindgen(js_name = allValid)]
    pub fn all_valid(&self) -> bool {
        self.state.all_valid()
    }

    /// `"unknown"`, `"valid"` or `"invalid"`
    pub fn validity(&self, field: &str) -> Result<JsValue, JsValue> {
        let field = parse_field(field)?;
        to_js(&self.state.validity(field))
    }
}
