/// TKDHub - logic core for the TKDHub web tools
/// Built with Rust + WASM

pub mod config;
pub mod dates;
pub mod domain;
pub mod error;
pub mod operations;
pub mod url_data;
pub mod verification;

use wasm_bindgen::prelude::*;

use crate::config::GenerativeConfig;
use crate::error::TkdError;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

fn text_argument(value: &JsValue, name: &str) -> Result<String, TkdError> {
    value
        .as_string()
        .ok_or_else(|| TkdError::InvalidArgument(format!("{} must be a string", name)))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// Registrable domain of a single URL line
#[wasm_bindgen]
pub fn extract_domain(url: &str) -> String {
    domain::extract_domain(url).unwrap_or_else(|_| "invalid".to_string())
}

/// Group textarea content by domain: `[{ base, urls }]`
#[wasm_bindgen]
pub fn group_urls(raw: JsValue) -> Result<JsValue, JsError> {
    let raw = text_argument(&raw, "urls")?;
    to_js(&operations::group(&raw))
}

/// Same grouping plus the lines that were rejected: `{ groups, rejected }`
#[wasm_bindgen]
pub fn dedupe_report(raw: JsValue) -> Result<JsValue, JsError> {
    let raw = text_argument(&raw, "urls")?;
    to_js(&operations::group_report(&raw))
}

#[wasm_bindgen]
pub fn days_between(start: &str, end: &str) -> Result<u32, JsError> {
    Ok(dates::days_between(start, end)?)
}

/// Split the email textarea into the addresses to verify
#[wasm_bindgen]
pub fn email_list(raw: JsValue) -> Result<JsValue, JsError> {
    let raw = text_argument(&raw, "emails")?;
    to_js(&verification::email_list(&raw))
}

/// Reduce a raw verification payload (JSON text) to the checks the email tool shows
#[wasm_bindgen]
pub fn summarize_email_check(json: &str) -> Result<JsValue, JsError> {
    let summary = verification::summarize(json)?;
    to_js(&summary)
}

/// Decode and validate the generative client settings passed from the page
#[wasm_bindgen]
pub fn generative_config(value: JsValue) -> Result<JsValue, JsError> {
    let config: GenerativeConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| TkdError::InvalidConfig(e.to_string()))?;
    config.validate()?;
    log::debug!("Generative client configured: {:?}", config);
    to_js(&config)
}
