// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// The caller behind a valid, unrevoked bearer token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// Raw bearer token from the `Authorization` header.
pub fn bearer_token(parts: &Parts) -> Result<String, HttpError> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_string())
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized(
                "missing Authorization header",
            ))
        })
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // already verified by the capability middleware
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(Self(user.clone()));
        }

        let state = parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;

        let token = bearer_token(parts)?;
        let user = state
            .services
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

/// JSON request body; malformed input is answered with the JSON error body.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Query string parameters, rejected the same way as [`ApiJson`].
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
