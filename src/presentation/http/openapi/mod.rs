// src/presentation/http/openapi/mod.rs
use crate::presentation::http::controllers::{auth, books};
use axum::{Router, response::Redirect, routing::get};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path, sync::OnceLock};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::{Config, SwaggerUi};

mod conditional;
mod handlers;
#[cfg(test)]
mod tests;

pub use conditional::{inm_matches, last_modified_str, weak_match};
pub use handlers::{head_openapi, serve_openapi};

pub const OPENAPI_PATH: &str = "/openapi.json";
const OPENAPI_CONTENT_TYPE_JSON: &str = "application/json";
const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::profile,
        books::list_books,
        books::search_books,
        books::get_book,
        books::post_book,
        books::delete_book,
        books::list_courses,
        books::my_postings,
        super::routes::health,
        super::routes::ready
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::LoginResponse,
            books::PostBookRequest,
            books::BookListResponse,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::BookDto,
            crate::application::dto::BookDetailDto,
            crate::application::dto::SellerDto,
            crate::application::dto::PostingDto,
            crate::application::dto::CourseListDto,
            crate::domain::user::Role
        )
    ),
    tags(
        (name = "Auth", description = "Sign-up, login and sessions"),
        (name = "Books", description = "Listings, search and posting"),
        (name = "System", description = "Health and readiness probes")
    ),
    modifiers(&BearerAuth),
    security(("bearerAuth" = [])),
    info(
        title = "Campus Books API",
        description = "Buy and sell used textbooks on campus",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

/// Serialized document, computed once per process.
pub fn openapi_bytes() -> &'static Bytes {
    static BYTES: OnceLock<Bytes> = OnceLock::new();
    BYTES.get_or_init(|| {
        // serializing a derived document cannot fail; fall back to an empty object anyway
        let json = serde_json::to_vec(&ApiDoc::openapi()).unwrap_or_else(|_| b"{}".to_vec());
        Bytes::from(json)
    })
}

/// Strong ETag: quoted blake3 digest of the serialized document.
pub fn openapi_etag() -> &'static str {
    static ETAG: OnceLock<String> = OnceLock::new();
    ETAG.get_or_init(|| format!("\"{}\"", blake3::hash(openapi_bytes()).to_hex()))
}

pub fn openapi_content_length() -> usize {
    openapi_bytes().len()
}

pub fn docs_router() -> Router {
    conditional::stamp_startup();
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").config(Config::from(OPENAPI_PATH));
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .route(OPENAPI_PATH, get(serve_openapi).head(head_openapi))
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(output_path)
}
