// src/presentation/http/middleware/require_capabilities.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Reject the request unless its bearer token grants `resource:action`.
///
/// The verified user is stored in the request extensions, where the
/// `Authenticated` extractor picks it up.
///
/// Usage: `axum::middleware::from_fn(|req, next| require_capability(req, next, "books", "view"))`
pub async fn require_capability(
    mut req: Request<Body>,
    next: Next,
    resource: &'static str,
    action: &'static str,
) -> Response {
    let Some(token) = req
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_string())
    else {
        return HttpError::from_error(ApplicationError::unauthorized(
            "missing Authorization header",
        ))
        .into_response();
    };

    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    match state
        .services
        .authenticate_and_authorize(&token, resource, action)
        .await
    {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}
