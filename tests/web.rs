//! Tests for the exported WASM functions, run with `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use serde::{Deserialize, Serialize};
use tkdhub::url_data::{DedupeReport, DomainGroup};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Deserialize)]
struct Summary {
    status: String,
    mx: bool,
    message: String,
}

fn js_object(value: serde_json::Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

#[wasm_bindgen_test]
fn group_urls_returns_ordered_groups() {
    let raw = JsValue::from_str(
        "https://example.com\nhttps://example.com/page?id=123\nhttp://blog.example.com\nhttps://othersite.com",
    );

    let groups: Vec<DomainGroup> =
        serde_wasm_bindgen::from_value(tkdhub::group_urls(raw).unwrap()).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].base, "example.com");
    assert_eq!(groups[0].urls.len(), 3);
    assert_eq!(groups[1].base, "othersite.com");
}

#[wasm_bindgen_test]
fn group_urls_rejects_non_string_argument() {
    assert!(tkdhub::group_urls(JsValue::from_f64(42.0)).is_err());
    assert!(tkdhub::group_urls(JsValue::NULL).is_err());
    assert!(tkdhub::dedupe_report(JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn dedupe_report_lists_rejected_lines() {
    let raw = JsValue::from_str("example.com\nhttp://\nother.org");

    let report: DedupeReport =
        serde_wasm_bindgen::from_value(tkdhub::dedupe_report(raw).unwrap()).unwrap();

    assert_eq!(report.groups.len(), 2);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].line, "http://");
}

#[wasm_bindgen_test]
fn extract_domain_falls_back_to_invalid() {
    assert_eq!(tkdhub::extract_domain("https://mail.google.com"), "google.com");
    assert_eq!(tkdhub::extract_domain("http://"), "invalid");
}

#[wasm_bindgen_test]
fn days_between_reports_bad_dates() {
    assert_eq!(tkdhub::days_between("2024-01-10", "2024-01-01").unwrap(), 9);
    assert!(tkdhub::days_between("yesterday", "2024-01-01").is_err());
}

#[wasm_bindgen_test]
fn summarize_email_check_decodes_payload() {
    let json = r#"{"email":"a@example.com","status":"risky","reason":"low_quality","dns":{"type":"MX","record":"mx"}}"#;

    let summary: Summary =
        serde_wasm_bindgen::from_value(tkdhub::summarize_email_check(json).unwrap()).unwrap();

    assert_eq!(summary.status, "risky");
    assert!(summary.mx);
    assert_eq!(summary.message, "low_quality");
}

#[wasm_bindgen_test]
fn generative_config_requires_api_key() {
    let missing = js_object(serde_json::json!({ "model": "gemini-1.5-flash" }));
    assert!(tkdhub::generative_config(missing).is_err());

    let valid = js_object(serde_json::json!({ "apiKey": "k", "temperature": 0.3 }));
    assert!(tkdhub::generative_config(valid).is_ok());
}

#[wasm_bindgen_test]
fn email_list_drops_blank_lines() {
    let raw = JsValue::from_str("a@example.com\n\n  b@example.com  ");

    let emails: Vec<String> =
        serde_wasm_bindgen::from_value(tkdhub::email_list(raw).unwrap()).unwrap();

    assert_eq!(emails, vec!["a@example.com".to_string(), "b@example.com".to_string()]);
    assert!(tkdhub::email_list(JsValue::TRUE).is_err());
}
