// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginResult, LoginUserCommand, RegisterUserCommand},
    dto::{AuthTokenDto, UserDto, UserProfileDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            token: result.token,
            user: result.user,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created and logged in.", body = LoginResponse),
        (status = 400, description = "Invalid form input.", body = ErrorResponse),
        (status = 409, description = "Email or username already in use.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<LoginResponse>)> {
    let command = RegisterUserCommand {
        email: payload.email,
        username: payload.username,
        password: payload.password,
        confirm_password: payload.confirm_password,
    };

    let result = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in.", body = LoginResponse),
        (status = 401, description = "Incorrect password or email.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()
        .map(|result| Json(result.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 204, description = "Session revoked."),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .logout(&user)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "The logged-in user.", body = UserProfileDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}
