use super::BookQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BookDetailDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::book::Isbn,
};

pub struct GetBookQuery {
    pub isbn: String,
}

impl BookQueryService {
    pub async fn get_book(
        &self,
        actor: &AuthenticatedUser,
        query: GetBookQuery,
    ) -> ApplicationResult<BookDetailDto> {
        actor.ensure_capability("books", "view")?;

        // A malformed ISBN can't match anything.
        let isbn =
            Isbn::new(&query.isbn).map_err(|_| ApplicationError::not_found("book not found"))?;

        self.read_repo
            .find_listing(&isbn)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("book not found"))
    }
}
