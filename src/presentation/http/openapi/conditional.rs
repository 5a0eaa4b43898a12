// src/presentation/http/openapi/conditional.rs
use axum::http::{HeaderMap, header};
use std::sync::OnceLock;
use std::time::SystemTime;

static STARTUP: OnceLock<(SystemTime, String)> = OnceLock::new();

fn startup() -> &'static (SystemTime, String) {
    STARTUP.get_or_init(|| {
        // HTTP dates have second precision
        let now = httpdate::parse_http_date(&httpdate::fmt_http_date(SystemTime::now()))
            .unwrap_or_else(|_| SystemTime::now());
        (now, httpdate::fmt_http_date(now))
    })
}

/// Fix the `Last-Modified` instant. Called while the router is built.
pub fn stamp_startup() {
    startup();
}

/// `Last-Modified` value: the moment the first router was built.
pub fn last_modified_str() -> &'static str {
    &startup().1
}

fn opaque(tag: &str) -> &str {
    let tag = tag.trim();
    let tag = tag
        .strip_prefix("W/")
        .or_else(|| tag.strip_prefix("w/"))
        .unwrap_or(tag);
    tag.trim_matches('"')
}

/// Weak comparison: `W/"abc"` and `"abc"` are equal.
pub fn weak_match(a: &str, b: &str) -> bool {
    opaque(a) == opaque(b)
}

/// True when `If-None-Match` is `*` or lists a tag matching `actual`.
pub fn inm_matches(headers: &HeaderMap, actual: &str) -> bool {
    let Some(value) = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let value = value.trim();
    value == "*" || value.split(',').any(|candidate| weak_match(candidate, actual))
}

/// True when `If-Modified-Since` is at or after the last modification.
pub fn ims_matches(headers: &HeaderMap) -> bool {
    headers
        .get(header::IF_MODIFIED_SINCE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| httpdate::parse_http_date(v).ok())
        .is_some_and(|since| since >= startup().0)
}

/// `If-None-Match` wins over `If-Modified-Since` when both are sent.
pub fn is_not_modified(headers: &HeaderMap, etag: &str) -> bool {
    if headers.contains_key(header::IF_NONE_MATCH) {
        inm_matches(headers, etag)
    } else {
        ims_matches(headers)
    }
}
