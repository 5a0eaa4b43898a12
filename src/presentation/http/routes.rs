// src/presentation/http/routes.rs
use crate::infrastructure::database;
use crate::presentation::http::middleware::{rate_limit_layer, require_capability};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, books},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Json, Router,
    body::Body,
    http::{HeaderValue, Method, Request, StatusCode, header},
    middleware::{Next, from_fn},
    routing::{delete, get, post},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    pub rate_limit: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            rate_limit: false,
        }
    }
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, RouterOptions::default())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

fn book_routes() -> Router {
    let detail = Router::new()
        .route("/api/v1/books/{isbn}", get(books::get_book))
        .route_layer(from_fn(|req: Request<Body>, next: Next| {
            require_capability(req, next, "books", "view")
        }));

    let posting = Router::new()
        .route("/api/v1/books", post(books::post_book))
        .route("/api/v1/courses", get(books::list_courses))
        .route_layer(from_fn(|req: Request<Body>, next: Next| {
            require_capability(req, next, "books", "create")
        }));

    Router::new()
        .route("/api/v1/books", get(books::list_books))
        .route("/api/v1/books/search", get(books::search_books))
        .route("/api/v1/books/{isbn}", delete(books::delete_book))
        .route("/api/v1/me/postings", get(books::my_postings))
        .merge(detail)
        .merge(posting)
}

pub fn build_router_with_options(state: HttpState, options: RouterOptions) -> Router {
    let api = Router::new()
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::profile))
        .merge(book_routes());

    let api = if options.rate_limit {
        match rate_limit_layer() {
            Some(layer) => api.layer(layer),
            None => {
                tracing::warn!("invalid rate limit configuration, limiter disabled");
                api
            }
        }
    } else {
        api
    };

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/ready", get(ready))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process is up.", body = StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Database reachable.", body = StatusResponse),
        (status = 503, description = "Database unreachable.", body = StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn ready(Extension(state): Extension<HttpState>) -> (StatusCode, Json<StatusResponse>) {
    match database::ping(&state.db_pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "ready".into(),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusResponse {
                    status: "unavailable".into(),
                }),
            )
        }
    }
}
