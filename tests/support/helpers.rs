// tests/support/helpers.rs
use super::mocks::{
    FixedClock, FixedPicture, InMemoryBookStore, InMemoryUserRepo, StrictPasswordHasher,
    test_token_manager,
};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use campus_books::application::ports::PasswordHasherPort;
use campus_books::application::services::{ApplicationServices, Ports, Repositories};
use campus_books::infrastructure::security::InMemorySessionRevocationStore;
use campus_books::presentation::http::{routes::build_router, state::HttpState};
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower::ServiceExt;

pub const PASSWORD: &str = "correct horse";

/// Services wired to in-memory doubles, plus handles on the doubles.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub users: Arc<InMemoryUserRepo>,
    pub books: Arc<InMemoryBookStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_password_hasher(Arc::new(StrictPasswordHasher))
    }

    pub fn with_password_hasher(password_hasher: Arc<PasswordHasherPort>) -> Self {
        let users = Arc::new(InMemoryUserRepo::default());
        let books = Arc::new(InMemoryBookStore::new(Arc::clone(&users)));

        let services = Arc::new(ApplicationServices::new(
            Repositories {
                users: users.clone(),
                book_writes: books.clone(),
                book_reads: books.clone(),
                postings: books.clone(),
            },
            Ports {
                password_hasher,
                token_manager: Arc::new(test_token_manager()),
                session_revocation_store: Arc::new(InMemorySessionRevocationStore::new()),
                clock: Arc::new(FixedClock::default()),
                pictures: Arc::new(FixedPicture),
            },
        ));

        Self {
            services,
            users,
            books,
        }
    }

    pub fn router(&self) -> axum::Router {
        // lazy pool: never connects unless /ready is hit
        let db_pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/campus_books_test")
            .expect("connect_lazy");
        build_router(HttpState {
            services: Arc::clone(&self.services),
            db_pool,
        })
    }
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

pub async fn send(router: &axum::Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.expect("router response")
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Register through the API and return the bearer token.
pub async fn register_via_api(router: &axum::Router, email: &str, username: &str) -> String {
    let resp = send(
        router,
        json_request(
            "POST",
            "/api/v1/auth/register",
            None,
            Some(json!({
                "email": email,
                "username": username,
                "password": PASSWORD,
                "confirm_password": PASSWORD,
            })),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    body["token"]["token"]
        .as_str()
        .expect("token in register response")
        .to_string()
}

pub fn book_form(isbn: &str, title: &str) -> Value {
    json!({
        "isbn": isbn,
        "title": title,
        "author": "Cormen",
        "course": "CS 3510",
        "price": 45.5,
        "quantity": 1,
        "description": "Lightly highlighted",
    })
}

/// Assert that a response is an ErrorResponse JSON with the expected status
/// and reason phrase; returns the message.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    let err_field = json["error"].as_str().unwrap_or("");
    let msg_field = json["message"].as_str().unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
    msg_field.to_string()
}
