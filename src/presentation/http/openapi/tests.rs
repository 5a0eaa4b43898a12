// src/presentation/http/openapi/tests.rs
use super::conditional::{ims_matches, is_not_modified};
use super::*;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};

#[test]
fn weak_match_ignores_weak_prefix() {
    assert!(weak_match(r#"W/"abc""#, r#""abc""#));
    assert!(weak_match(r#""abc""#, r#"w/"abc""#));
    assert!(!weak_match(r#""abc""#, r#""def""#));
}

#[test]
fn inm_matches_star_and_lists() {
    let mut headers = HeaderMap::new();
    headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static("*"));
    assert!(inm_matches(&headers, r#""anything""#));

    headers.insert(
        header::IF_NONE_MATCH,
        HeaderValue::from_static(r#""foo", W/"bar""#),
    );
    assert!(inm_matches(&headers, r#""bar""#));
    assert!(!inm_matches(&headers, r#""baz""#));
}

#[test]
fn etag_is_a_quoted_blake3_digest() {
    let etag = openapi_etag();
    assert!(etag.starts_with('"') && etag.ends_with('"'));
    assert_eq!(etag.len(), 64 + 2);
}

#[test]
fn ims_compares_dates_not_strings() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::IF_MODIFIED_SINCE,
        HeaderValue::from_static("Thu, 01 Jan 1970 00:00:00 GMT"),
    );
    assert!(!ims_matches(&headers));

    headers.insert(
        header::IF_MODIFIED_SINCE,
        HeaderValue::from_str(last_modified_str()).unwrap(),
    );
    assert!(ims_matches(&headers));
}

#[test]
fn inm_takes_precedence_over_ims() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::IF_NONE_MATCH,
        HeaderValue::from_static(r#""some-other""#),
    );
    headers.insert(
        header::IF_MODIFIED_SINCE,
        HeaderValue::from_str(last_modified_str()).unwrap(),
    );
    assert!(!is_not_modified(&headers, openapi_etag()));
}

#[tokio::test]
async fn serve_openapi_returns_not_modified_for_current_etag() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::IF_NONE_MATCH,
        HeaderValue::from_str(openapi_etag()).unwrap(),
    );
    let resp = serve_openapi(headers).await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    assert!(resp.headers().get(header::ETAG).is_some());
}

#[tokio::test]
async fn head_openapi_reports_full_length() {
    let resp = head_openapi(HeaderMap::new()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let length = resp
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert_eq!(length, openapi_content_length().to_string());
    assert!(resp.headers().get(header::LAST_MODIFIED).is_some());
}

#[test]
fn document_lists_every_route() {
    let doc = ApiDoc::openapi();
    for path in [
        "/api/v1/auth/register",
        "/api/v1/auth/login",
        "/api/v1/auth/logout",
        "/api/v1/auth/me",
        "/api/v1/books",
        "/api/v1/books/search",
        "/api/v1/books/{isbn}",
        "/api/v1/courses",
        "/api/v1/me/postings",
        "/health",
        "/ready",
    ] {
        assert!(doc.paths.paths.contains_key(path), "{path} missing");
    }
}
