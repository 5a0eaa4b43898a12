// src/presentation/http/controllers/books.rs
use crate::application::{
    commands::books::{DeleteBookCommand, PostBookCommand},
    dto::{BookDetailDto, BookDto, CourseListDto, CursorPage, PostingDto},
    queries::books::{GetBookQuery, ListBooksQuery, SearchBooksQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiQuery, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookListParams {
    /// Page size, 24 by default and at most 100.
    #[serde(default)]
    pub limit: Option<u32>,
    /// `next_cursor` of the previous page.
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookSearchParams {
    /// One of `title`, `author`, `course`, `isbn`. Defaults to `title`.
    #[serde(default)]
    pub by: Option<String>,
    /// Case-insensitive substring. Blank lists every book.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub cursor: Option<String>,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PostBookRequest {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub course: String,
    pub price: f64,
    /// Copies on offer.
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookListResponse {
    pub items: Vec<BookDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl From<CursorPage<BookDto>> for BookListResponse {
    fn from(page: CursorPage<BookDto>) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/books",
    params(BookListParams),
    responses(
        (status = 200, description = "Newest books first.", body = BookListResponse),
        (status = 400, description = "Malformed cursor.", body = ErrorResponse)
    ),
    security(()),
    tag = "Books"
)]
pub async fn list_books(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<BookListParams>,
) -> HttpResult<Json<BookListResponse>> {
    state
        .services
        .book_queries
        .list_books(ListBooksQuery {
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/books/search",
    params(BookSearchParams),
    responses(
        (status = 200, description = "Books whose field contains the query.", body = BookListResponse),
        (status = 400, description = "Unknown search field or malformed cursor.", body = ErrorResponse)
    ),
    security(()),
    tag = "Books"
)]
pub async fn search_books(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<BookSearchParams>,
) -> HttpResult<Json<BookListResponse>> {
    state
        .services
        .book_queries
        .search_books(SearchBooksQuery {
            by: params.by,
            q: params.q,
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/books/{isbn}",
    params(("isbn" = String, Path, description = "ISBN-10 or ISBN-13")),
    responses(
        (status = 200, description = "The listing with its seller.", body = BookDetailDto),
        (status = 401, description = "Login required.", body = ErrorResponse),
        (status = 404, description = "No such book.", body = ErrorResponse)
    ),
    tag = "Books"
)]
pub async fn get_book(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(isbn): Path<String>,
) -> HttpResult<Json<BookDetailDto>> {
    state
        .services
        .book_queries
        .get_book(&user, GetBookQuery { isbn })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/books",
    request_body = PostBookRequest,
    responses(
        (status = 201, description = "Book posted for sale.", body = BookDetailDto),
        (status = 400, description = "Invalid form input.", body = ErrorResponse),
        (status = 401, description = "Login required.", body = ErrorResponse),
        (status = 409, description = "ISBN already posted.", body = ErrorResponse)
    ),
    tag = "Books"
)]
pub async fn post_book(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<PostBookRequest>,
) -> HttpResult<(StatusCode, Json<BookDetailDto>)> {
    let command = PostBookCommand {
        isbn: payload.isbn,
        title: payload.title,
        author: payload.author,
        course: payload.course,
        price: payload.price,
        quantity: payload.quantity,
        description: payload.description,
    };

    let detail = state
        .services
        .book_commands
        .post_book(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(detail)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/books/{isbn}",
    params(("isbn" = String, Path, description = "ISBN-10 or ISBN-13")),
    responses(
        (status = 204, description = "Listing removed."),
        (status = 403, description = "Not the seller.", body = ErrorResponse),
        (status = 404, description = "No such book.", body = ErrorResponse)
    ),
    tag = "Books"
)]
pub async fn delete_book(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(isbn): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .book_commands
        .delete_book(&user, DeleteBookCommand { isbn })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/courses",
    responses(
        (status = 200, description = "Courses a book can be posted under.", body = CourseListDto),
        (status = 401, description = "Login required.", body = ErrorResponse)
    ),
    tag = "Books"
)]
pub async fn list_courses(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<CourseListDto>> {
    state
        .services
        .book_queries
        .list_courses(&user)
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/me/postings",
    responses(
        (status = 200, description = "The caller's postings, newest first.", body = [PostingDto]),
        (status = 401, description = "Login required.", body = ErrorResponse)
    ),
    tag = "Books"
)]
pub async fn my_postings(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<PostingDto>>> {
    state
        .services
        .book_queries
        .my_postings(&user)
        .await
        .into_http()
        .map(Json)
}
