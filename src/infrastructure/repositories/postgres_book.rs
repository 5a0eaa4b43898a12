// src/infrastructure/repositories/postgres_book.rs
use super::map_sqlx;
use crate::domain::book::{
    Book, BookAuthor, BookDescription, BookListCursor, BookListing, BookReadRepository,
    BookSearch, BookTitle, BookWriteRepository, CourseId, Isbn, NewBook, Posting, Price,
    Quantity, Seller,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Email, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

pub(super) const BOOK_COLUMNS: &str =
    "b.isbn, b.title, b.author, b.course, b.price, b.description, b.picture, b.quantity, b.created_at";

#[derive(Debug, FromRow)]
pub(super) struct BookRow {
    isbn: String,
    title: String,
    author: String,
    course: String,
    price: f64,
    description: String,
    picture: String,
    quantity: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<BookRow> for Book {
    type Error = DomainError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(Book {
            isbn: Isbn::new(row.isbn)?,
            title: BookTitle::new(row.title)?,
            author: BookAuthor::new(row.author)?,
            // stored courses stay readable even if the catalogue changes
            course: CourseId::from_stored(row.course),
            price: Price::new(row.price)?,
            description: BookDescription::new(row.description)?,
            picture: row.picture,
            quantity: Quantity::new(row.quantity)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PostingRow {
    id: i64,
    user_id: i64,
    isbn: String,
    posted_at: DateTime<Utc>,
}

impl TryFrom<PostingRow> for Posting {
    type Error = DomainError;

    fn try_from(row: PostingRow) -> Result<Self, Self::Error> {
        Ok(Posting {
            id: row.id,
            seller_id: UserId::new(row.user_id)?,
            isbn: Isbn::new(row.isbn)?,
            posted_at: row.posted_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ListingRow {
    #[sqlx(flatten)]
    book: BookRow,
    posting_id: Option<i64>,
    seller_id: Option<i64>,
    posted_at: Option<DateTime<Utc>>,
    seller_username: Option<String>,
    seller_email: Option<String>,
}

impl TryFrom<ListingRow> for BookListing {
    type Error = DomainError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let book = Book::try_from(row.book)?;

        let posting = match (row.posting_id, row.seller_id, row.posted_at) {
            (Some(id), Some(seller_id), Some(posted_at)) => Some(Posting {
                id,
                seller_id: UserId::new(seller_id)?,
                isbn: book.isbn.clone(),
                posted_at,
            }),
            _ => None,
        };

        let seller = match (&posting, row.seller_username, row.seller_email) {
            (Some(posting), Some(username), Some(email)) => Some(Seller {
                id: posting.seller_id,
                username: Username::new(username)?,
                email: Email::new(email)?,
            }),
            _ => None,
        };

        Ok(BookListing {
            book,
            posting,
            seller,
        })
    }
}

#[derive(Clone)]
pub struct PostgresBookWriteRepository {
    pool: PgPool,
}

impl PostgresBookWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresBookReadRepository {
    pool: PgPool,
}

impl PostgresBookReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_page_query(
        search: Option<&BookSearch>,
        fetch_limit: i64,
        cursor: Option<&BookListCursor>,
    ) -> QueryBuilder<'static, Postgres> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {BOOK_COLUMNS} FROM books b"));

        let mut has_where = false;
        if let Some(search) = search {
            builder.push(" WHERE b.");
            builder.push(search.field().column());
            builder.push(" ILIKE ");
            builder.push_bind(search.like_pattern());
            has_where = true;
        }

        if let Some(cursor) = cursor {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push("(b.created_at, b.isbn) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(cursor.isbn.clone());
            builder.push(")");
        }

        builder.push(" ORDER BY b.created_at DESC, b.isbn DESC LIMIT ");
        builder.push_bind(fetch_limit);

        builder
    }
}

#[async_trait]
impl BookWriteRepository for PostgresBookWriteRepository {
    async fn insert_listing(
        &self,
        book: NewBook,
        seller_id: UserId,
        posted_at: DateTime<Utc>,
    ) -> DomainResult<(Book, Posting)> {
        let NewBook {
            isbn,
            title,
            author,
            course,
            price,
            description,
            picture,
            quantity,
            created_at,
        } = book;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let book_row = sqlx::query_as::<_, BookRow>(
            "INSERT INTO books AS b (isbn, title, author, course, price, description, picture, quantity, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING b.isbn, b.title, b.author, b.course, b.price, b.description, b.picture, b.quantity, b.created_at",
        )
        .bind(isbn.as_str())
        .bind(title.as_str())
        .bind(author.as_str())
        .bind(course.as_str())
        .bind(price.value())
        .bind(description.as_str())
        .bind(&picture)
        .bind(quantity.value())
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let posting_row = sqlx::query_as::<_, PostingRow>(
            "INSERT INTO postings (user_id, isbn, posted_at)
             VALUES ($1, $2, $3)
             RETURNING id, user_id, isbn, posted_at",
        )
        .bind(i64::from(seller_id))
        .bind(isbn.as_str())
        .bind(posted_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Ok((Book::try_from(book_row)?, Posting::try_from(posting_row)?))
    }

    async fn delete(&self, isbn: &Isbn) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE isbn = $1")
            .bind(isbn.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("book not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl BookReadRepository for PostgresBookReadRepository {
    async fn find_by_isbn(&self, isbn: &Isbn) -> DomainResult<Option<Book>> {
        let sql = format!("SELECT {BOOK_COLUMNS} FROM books b WHERE b.isbn = $1");
        let row = sqlx::query_as::<_, BookRow>(&sql)
            .bind(isbn.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Book::try_from).transpose()
    }

    async fn find_listing(&self, isbn: &Isbn) -> DomainResult<Option<BookListing>> {
        let sql = format!(
            "SELECT {BOOK_COLUMNS},
                    p.id AS posting_id, p.user_id AS seller_id, p.posted_at,
                    u.username AS seller_username, u.email AS seller_email
             FROM books b
             LEFT JOIN postings p ON p.isbn = b.isbn
             LEFT JOIN users u ON u.id = p.user_id
             WHERE b.isbn = $1"
        );
        let row = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(isbn.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(BookListing::try_from).transpose()
    }

    async fn list_page(
        &self,
        search: Option<&BookSearch>,
        limit: u32,
        cursor: Option<BookListCursor>,
    ) -> DomainResult<(Vec<Book>, Option<BookListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder = Self::build_page_query(search, fetch_limit, cursor.as_ref());
        let rows = builder
            .build_query_as::<BookRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut books = rows
            .into_iter()
            .map(Book::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let next_cursor = if books.len() > limit as usize {
            let _ = books.pop();
            books
                .last()
                .map(|book| BookListCursor::new(book.created_at, book.isbn.as_str()))
        } else {
            None
        };

        Ok((books, next_cursor))
    }
}
