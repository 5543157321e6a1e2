//! WASM bindings for the textbox styler.
//!
//! Exposes validation and stylesheet generation to a browser form via
//! wasm-bindgen. Configurations are plain JS objects with the same camelCase
//! fields as the JSON config files.
//! Build with: `wasm-pack build --target web --features wasm`

use wasm_bindgen::prelude::*;

use crate::model::StyleConfiguration;

fn config_from_js(value: JsValue) -> Result<StyleConfiguration, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Validate a configuration.
///
/// Returns the first validation message, or an empty string when the
/// configuration can be generated.
#[wasm_bindgen]
pub fn validate_config(config: JsValue) -> Result<String, JsError> {
    let config = config_from_js(config)?;
    Ok(crate::validate::validation_message(&config))
}

/// Validate and generate the stylesheet; throws the validation message.
#[wasm_bindgen]
pub fn generate_css(config: JsValue) -> Result<String, JsError> {
    let config = config_from_js(config)?;
    crate::export_stylesheet(&config).map_err(|e| JsError::new(&e.to_string()))
}

/// Apply the type-default rule after the form changed `previous` into `next`.
#[wasm_bindgen]
pub fn derive_defaults(previous: JsValue, next: JsValue) -> Result<JsValue, JsError> {
    let previous = config_from_js(previous)?;
    let next = config_from_js(next)?;
    let derived = crate::session::derive_defaults(&previous, next);
    serde_wasm_bindgen::to_value(&derived).map_err(|e| JsError::new(&e.to_string()))
}

/// URL-format check used for the image field.
#[wasm_bindgen]
pub fn is_valid_image_url(url: &str) -> bool {
    crate::url::is_valid_url(url)
}

/// The starting configuration of the form.
#[wasm_bindgen]
pub fn default_config() -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&StyleConfiguration::default())
        .map_err(|e| JsError::new(&e.to_string()))
}
