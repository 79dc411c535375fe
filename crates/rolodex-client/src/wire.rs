//! Pure parsers for the backend's JSON shapes.
//!
//! Each parser takes the HTTP success flag and the raw body so every row of
//! the error contract can be unit tested without a live server.

use crate::error::{Error, Result};
use rolodex_types::Contact;
use serde_json::Value;

/// Parse a list response. The server returns
/// `{success: true, data: [...], count: n}`; a bare JSON array is accepted
/// as a fallback. Anything else is an unexpected shape, reported with the
/// server's `error` text when one is present.
pub fn parse_list(ok: bool, body: &str) -> Result<Vec<Contact>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::UnexpectedShape(format!("invalid JSON: {}", e)))?;

    let data = match &value {
        Value::Object(map) => map.get("data"),
        Value::Array(_) => Some(&value),
        _ => None,
    };

    match data {
        Some(arr @ Value::Array(_)) => {
            let contacts: Vec<Contact> = serde_json::from_value(arr.clone())
                .map_err(|e| Error::UnexpectedShape(format!("malformed contact: {}", e)))?;
            Ok(contacts)
        }
        _ => {
            if let Some(msg) = server_error(&value) {
                return Err(Error::Api(msg));
            }
            Err(Error::UnexpectedShape(format!(
                "expected a contact array (HTTP {})",
                if ok { "ok" } else { "error" }
            )))
        }
    }
}

/// Parse a mutation (create/update/delete) response. Success requires a 2xx
/// status and the body not reporting `success: false`. Failures carry the
/// server's `error` text, falling back to `default_msg`.
pub fn parse_mutation(ok: bool, body: &str, default_msg: &str) -> Result<()> {
    let value: Value = serde_json::from_str(body).unwrap_or(Value::Null);

    let reported_failure = value.get("success").and_then(Value::as_bool) == Some(false);
    if ok && !reported_failure {
        return Ok(());
    }

    Err(Error::Api(
        server_error(&value).unwrap_or_else(|| default_msg.to_string()),
    ))
}

fn server_error(value: &Value) -> Option<String> {
    value
        .get("error")
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}
