use crate::domain::book::{Book, BookListing, PostedBook, Seller};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub course: String,
    pub price: f64,
    pub description: String,
    pub picture: String,
    pub quantity: i32,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            isbn: book.isbn.into(),
            title: book.title.into_inner(),
            author: book.author.into_inner(),
            course: book.course.into_inner(),
            price: book.price.value(),
            description: book.description.into_inner(),
            picture: book.picture,
            quantity: book.quantity.value(),
            created_at: book.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SellerDto {
    pub user_id: i64,
    pub username: String,
    pub email: String,
}

impl From<Seller> for SellerDto {
    fn from(seller: Seller) -> Self {
        Self {
            user_id: seller.id.into(),
            username: seller.username.into(),
            email: seller.email.into(),
        }
    }
}

/// A single listing: the book, when it was posted and who is selling it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDetailDto {
    pub book: BookDto,
    #[serde(default, with = "serde_time::option")]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub seller: Option<SellerDto>,
}

impl From<BookListing> for BookDetailDto {
    fn from(listing: BookListing) -> Self {
        Self {
            book: listing.book.into(),
            posted_at: listing.posting.map(|posting| posting.posted_at),
            seller: listing.seller.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostingDto {
    pub id: i64,
    #[serde(with = "serde_time")]
    pub posted_at: DateTime<Utc>,
    pub book: BookDto,
}

impl From<PostedBook> for PostingDto {
    fn from(posted: PostedBook) -> Self {
        Self {
            id: posted.posting.id,
            posted_at: posted.posting.posted_at,
            book: posted.book.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseListDto {
    pub courses: Vec<String>,
}
