use super::BookQueryService;
use crate::{
    application::{
        dto::{BookDto, CursorPage},
        error::ApplicationResult,
    },
    domain::book::{BookSearch, SearchField},
};

pub struct SearchBooksQuery {
    pub by: Option<String>,
    pub q: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl BookQueryService {
    /// Substring search on one field. A blank query lists everything.
    pub async fn search_books(
        &self,
        query: SearchBooksQuery,
    ) -> ApplicationResult<CursorPage<BookDto>> {
        let field = match query.by.as_deref().map(str::trim) {
            None | Some("") => SearchField::default(),
            Some(raw) => raw.parse::<SearchField>()?,
        };
        let search = BookSearch::new(field, query.q.as_deref().unwrap_or_default());

        self.page(search.as_ref(), query.limit, query.cursor.as_deref())
            .await
    }
}
