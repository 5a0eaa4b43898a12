// src/infrastructure/repositories/postgres_posting.rs
use super::{
    map_sqlx,
    postgres_book::{BOOK_COLUMNS, BookRow},
};
use crate::domain::book::{Book, PostedBook, Posting, PostingRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPostingRepository {
    pool: PgPool,
}

impl PostgresPostingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostedBookRow {
    posting_id: i64,
    seller_id: i64,
    posted_at: DateTime<Utc>,
    #[sqlx(flatten)]
    book: BookRow,
}

impl TryFrom<PostedBookRow> for PostedBook {
    type Error = DomainError;

    fn try_from(row: PostedBookRow) -> Result<Self, Self::Error> {
        let book = Book::try_from(row.book)?;
        Ok(PostedBook {
            posting: Posting {
                id: row.posting_id,
                seller_id: UserId::new(row.seller_id)?,
                isbn: book.isbn.clone(),
                posted_at: row.posted_at,
            },
            book,
        })
    }
}

#[async_trait]
impl PostingRepository for PostgresPostingRepository {
    async fn list_by_seller(&self, seller_id: UserId) -> DomainResult<Vec<PostedBook>> {
        let sql = format!(
            "SELECT p.id AS posting_id, p.user_id AS seller_id, p.posted_at, {BOOK_COLUMNS}
             FROM postings p
             JOIN books b ON b.isbn = p.isbn
             WHERE p.user_id = $1
             ORDER BY p.posted_at DESC, p.id DESC"
        );
        let rows = sqlx::query_as::<_, PostedBookRow>(&sql)
            .bind(i64::from(seller_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(PostedBook::try_from).collect()
    }
}
