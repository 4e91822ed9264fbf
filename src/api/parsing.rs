use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Endpoints served by the API Lambda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Health,
    Todos,
    /// `/todos/{id}`; the id is kept raw so a non-numeric id can 404.
    Todo(String),
    Summarize,
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method from an API Gateway v2 or v1 proxy event, upper-cased.
#[must_use]
pub fn request_method(payload: &Value) -> String {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .unwrap_or("GET")
        .to_ascii_uppercase()
}

#[must_use]
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

/// Request body as text, decoding it when API Gateway delivered it base64-encoded.
///
/// # Errors
///
/// Returns an error if the body is flagged as base64 but does not decode to UTF-8 text.
pub fn request_body(payload: &Value) -> Result<Option<String>, String> {
    let Some(body) = v_str(payload, &["body"]) else {
        return Ok(None);
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(Some(body.to_string()));
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| format!("Invalid base64 body: {e}"))?;
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| format!("Body is not UTF-8: {e}"))
}

/// Parses the JSON body into `T`. A missing or blank body parses as `{}`.
///
/// # Errors
///
/// Returns an error if the body cannot be decoded or is not valid JSON for `T`.
pub fn parse_json_body<T: DeserializeOwned>(payload: &Value) -> Result<T, String> {
    let body = request_body(payload)?.unwrap_or_default();
    let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
    serde_json::from_str(body).map_err(|e| format!("Invalid JSON body: {e}"))
}

/// Matches the tail of the path so stage prefixes such as `/prod` are ignored.
#[must_use]
pub fn match_route(path: &str) -> Option<Route> {
    static ROUTE_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"/(health|todos|summarize)(?:/([^/]+))?/?$").expect("static regex compile")
    });

    let cap = ROUTE_RE.captures(path)?;
    let id = cap.get(2).map(|m| m.as_str().to_string());
    match (&cap[1], id) {
        ("health", None) => Some(Route::Health),
        ("todos", None) => Some(Route::Todos),
        ("todos", Some(id)) => Some(Route::Todo(id)),
        ("summarize", None) => Some(Route::Summarize),
        _ => None,
    }
}
