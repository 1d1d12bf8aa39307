//! Line-oriented JSON bridge between the host app and the extension core.
//!
//! Requests look like `{"id": .., "cmd": "..", "payload": {..}}` and every
//! request produces exactly one response line.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::{CoreError, Result};
use crate::model::query::QueryItem;
use crate::model::translation::Translation;
use crate::services::{message_url, query_codec};

mod command;
use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload(req: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

fn required<T: DeserializeOwned>(payload: &Value, field: &'static str) -> Result<T> {
    let value = payload
        .get(field)
        .filter(|v| !v.is_null())
        .cloned()
        .ok_or(CoreError::MissingField(field))?;

    serde_json::from_value(value).map_err(|source| CoreError::InvalidPayload { field, source })
}

fn optional_str<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload
        .get(field)
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
}

fn decoded(translation: Translation) -> Value {
    let is_complete = translation.is_complete();
    json!({ "translation": translation, "is_complete": is_complete })
}

fn dispatch(cmd: &str, payload: &Value, config: &Config) -> Result<Value> {
    match Command::from(cmd) {
        Command::Ping => Ok(json!({ "message": "translation-core alive" })),

        Command::Encode => {
            let translation: Translation = required(payload, "translation")?;
            Ok(json!({ "items": query_codec::encode(&translation) }))
        }

        Command::Decode => {
            let items: Vec<QueryItem> = required(payload, "items")?;
            Ok(decoded(query_codec::decode(&items)))
        }

        Command::ToUrl => {
            let translation: Translation = required(payload, "translation")?;
            let base = match optional_str(payload, "base_url") {
                Some(raw) => Url::parse(raw)?,
                None => config.message_base_url.clone(),
            };
            let url = message_url::message_url(&base, &translation);
            Ok(json!({ "url": url.as_str() }))
        }

        Command::FromUrl => {
            let raw: String = required(payload, "url")?;
            let url = Url::parse(&raw)?;
            Ok(decoded(message_url::translation_from_url(&url)))
        }

        Command::Status => {
            let translation: Translation = required(payload, "translation")?;
            Ok(json!({ "is_complete": translation.is_complete() }))
        }

        Command::Unknown => Err(CoreError::UnknownCommand(cmd.to_string())),
    }
}

fn invalid_json(cause: &CoreError) -> String {
    warn!(error = %cause, "rejecting request");
    json!({
        "status": "error",
        "message": "invalid json"
    })
    .to_string()
}

/// Handles one raw line read from the host. Blank lines get no response;
/// anything else, including bytes that are not UTF-8, gets exactly one.
pub fn handle_line(raw: &[u8], config: &Config) -> Option<String> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

    let line = match String::from_utf8(raw.to_vec()) {
        Ok(l) => l,
        Err(e) => return Some(invalid_json(&CoreError::from(e))),
    };

    if line.trim().is_empty() {
        return None;
    }

    Some(handle(&line, config))
}

pub fn handle(input: &str, config: &Config) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return invalid_json(&CoreError::from(e)),
    };

    let id = get_id(&req);
    let cmd = get_cmd(&req);
    debug!(%id, cmd, "handling request");

    match dispatch(cmd, get_payload(&req), config) {
        Ok(payload) => ok(id, payload),
        Err(e) => {
            warn!(%id, cmd, error = %e, "request failed");
            err(id, e.to_string())
        }
    }
}
