use super::BookQueryService;
use crate::{
    application::{
        dto::{BookDto, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        book::{BookListCursor, BookSearch},
        errors::DomainError,
    },
};

/// Number of books on the landing page.
pub const DEFAULT_PAGE_SIZE: u32 = 24;
pub const MAX_PAGE_SIZE: u32 = 100;

pub struct ListBooksQuery {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl BookQueryService {
    /// Newest books first. Public.
    pub async fn list_books(&self, query: ListBooksQuery) -> ApplicationResult<CursorPage<BookDto>> {
        self.page(None, query.limit, query.cursor.as_deref()).await
    }

    pub(super) async fn page(
        &self,
        search: Option<&BookSearch>,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> ApplicationResult<CursorPage<BookDto>> {
        let limit = normalize_limit(limit);
        let cursor = decode_cursor(cursor)?;

        let (books, next_cursor) = self.read_repo.list_page(search, limit, cursor).await?;

        let items = books.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}

fn normalize_limit(limit: Option<u32>) -> u32 {
    match limit {
        None | Some(0) => DEFAULT_PAGE_SIZE,
        Some(value) => value.min(MAX_PAGE_SIZE),
    }
}

fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<BookListCursor>> {
    match token.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => match BookListCursor::decode(value) {
            Ok(cursor) => Ok(Some(cursor)),
            Err(DomainError::Validation(msg)) => Err(ApplicationError::validation(msg)),
            Err(other) => Err(ApplicationError::from(other)),
        },
        None => Ok(None),
    }
}
