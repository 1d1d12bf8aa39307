//! End-to-end tests for the JSON bridge: a host app encodes a translation,
//! ships it as a message URL, and the extension side reads it back.

use serde_json::{json, Value};

use translation_core::config::Config;
use translation_core::model::translation::{Answer, Translation};
use translation_core::protocol::handle;

// ==================== Test Helpers ====================

fn config() -> Config {
    Config::from_lookup(|key| {
        (key == "TRANSLATION_MESSAGE_BASE_URL").then(|| "https://messages.example.com/t".to_string())
    })
    .expect("test config should load")
}

fn request(id: u32, cmd: &str, payload: Value) -> Value {
    let line = json!({ "id": id, "cmd": cmd, "payload": payload }).to_string();
    let response: Value =
        serde_json::from_str(&handle(&line, &config())).expect("response should be json");
    assert_eq!(response["id"], id);
    response
}

fn ok_payload(id: u32, cmd: &str, payload: Value) -> Value {
    let response = request(id, cmd, payload);
    assert_eq!(response["status"], "ok", "unexpected response: {response}");
    response["payload"].clone()
}

// ==================== Flow Tests ====================

#[test]
fn test_question_then_answer_flow() {
    // Sender asks a question; the answer is not known yet.
    let asked = Translation::new("¿Dónde está la biblioteca?", Answer::Unknown);
    let url = ok_payload(1, "translation.to_url", json!({ "translation": asked }))["url"]
        .as_str()
        .expect("url should be a string")
        .to_string();
    assert!(url.starts_with("https://messages.example.com/t?question="));
    assert!(url.ends_with("&answer="));

    // Receiver opens the message.
    let received = ok_payload(2, "translation.from_url", json!({ "url": url }));
    let translation: Translation =
        serde_json::from_value(received["translation"].clone()).expect("translation");
    assert_eq!(translation, asked);
    assert_eq!(received["is_complete"], true);

    // Receiver answers and replies.
    let answered = Translation {
        answer: Some(Answer::Known("Where is the library?".to_string())),
        ..translation
    };
    let reply = ok_payload(3, "translation.to_url", json!({ "translation": answered }));
    let back = ok_payload(4, "translation.from_url", json!({ "url": reply["url"] }));
    let translation: Translation =
        serde_json::from_value(back["translation"].clone()).expect("translation");
    assert_eq!(translation, answered);
}

#[test]
fn test_items_round_trip_through_bridge() {
    let original = Translation::new("2+2?", Answer::Known("4".to_string()));
    let encoded = ok_payload(1, "translation.encode", json!({ "translation": original }));
    assert_eq!(
        encoded["items"],
        json!([
            { "name": "question", "value": "2+2?" },
            { "name": "answer", "value": "4" }
        ])
    );

    let decoded = ok_payload(2, "translation.decode", json!({ "items": encoded["items"] }));
    let translation: Translation =
        serde_json::from_value(decoded["translation"].clone()).expect("translation");
    assert_eq!(translation, original);
}

#[test]
fn test_known_empty_answer_comes_back_unknown() {
    let original = Translation::new("Hi", Answer::Known(String::new()));
    let encoded = ok_payload(1, "translation.encode", json!({ "translation": original }));
    let decoded = ok_payload(2, "translation.decode", json!({ "items": encoded["items"] }));
    assert_eq!(decoded["translation"]["answer"], "unknown");
}

#[test]
fn test_empty_translation_has_bare_url() {
    let payload = ok_payload(1, "translation.to_url", json!({ "translation": {} }));
    assert_eq!(payload["url"], "https://messages.example.com/t");

    let back = ok_payload(2, "translation.from_url", json!({ "url": payload["url"] }));
    assert_eq!(back["translation"], json!({ "question": null, "answer": null }));
    assert_eq!(back["is_complete"], false);
}

// ==================== Error Tests ====================

#[test]
fn test_from_url_requires_url() {
    let response = request(9, "translation.from_url", json!({}));
    assert_eq!(response["status"], "error");
    assert_eq!(response["message"], "payload.url is required");
}

#[test]
fn test_from_url_rejects_relative_url() {
    let response = request(9, "translation.from_url", json!({ "url": "?question=Hi" }));
    assert_eq!(response["status"], "error");
    assert!(response["message"]
        .as_str()
        .expect("message")
        .starts_with("invalid url"));
}
