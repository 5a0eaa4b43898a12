// src/presentation/http/openapi/handlers.rs
use super::{OPENAPI_CONTENT_TYPE_JSON, conditional, openapi_bytes, openapi_etag};
use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

fn common_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(etag) = HeaderValue::from_str(openapi_etag()) {
        headers.insert(header::ETAG, etag);
    }
    if let Ok(last_modified) = HeaderValue::from_str(conditional::last_modified_str()) {
        headers.insert(header::LAST_MODIFIED, last_modified);
    }
    headers
}

fn respond(request_headers: &HeaderMap, body: Body) -> Response {
    let mut headers = common_headers();
    if conditional::is_not_modified(request_headers, openapi_etag()) {
        return (StatusCode::NOT_MODIFIED, headers).into_response();
    }

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(OPENAPI_CONTENT_TYPE_JSON),
    );
    headers.insert(
        header::CONTENT_LENGTH,
        HeaderValue::from(openapi_bytes().len()),
    );
    (StatusCode::OK, headers, body).into_response()
}

/// GET /openapi.json
pub async fn serve_openapi(headers: HeaderMap) -> Response {
    respond(&headers, Body::from(openapi_bytes().clone()))
}

/// HEAD /openapi.json: same headers, empty body.
pub async fn head_openapi(headers: HeaderMap) -> Response {
    respond(&headers, Body::empty())
}
