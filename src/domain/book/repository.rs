// src/domain/book/repository.rs
use crate::domain::book::{
    cursor::BookListCursor,
    entity::{Book, BookListing, NewBook, PostedBook, Posting},
    search::BookSearch,
    value_objects::Isbn,
};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait BookWriteRepository: Send + Sync {
    /// Store the book and the seller's posting of it as one unit.
    async fn insert_listing(
        &self,
        book: NewBook,
        seller_id: UserId,
        posted_at: DateTime<Utc>,
    ) -> DomainResult<(Book, Posting)>;

    async fn delete(&self, isbn: &Isbn) -> DomainResult<()>;
}

#[async_trait]
pub trait BookReadRepository: Send + Sync {
    async fn find_by_isbn(&self, isbn: &Isbn) -> DomainResult<Option<Book>>;

    async fn find_listing(&self, isbn: &Isbn) -> DomainResult<Option<BookListing>>;

    async fn list_page(
        &self,
        search: Option<&BookSearch>,
        limit: u32,
        cursor: Option<BookListCursor>,
    ) -> DomainResult<(Vec<Book>, Option<BookListCursor>)>;
}

#[async_trait]
pub trait PostingRepository: Send + Sync {
    async fn list_by_seller(&self, seller_id: UserId) -> DomainResult<Vec<PostedBook>>;
}
