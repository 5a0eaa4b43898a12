// src/domain/book/entity.rs
use crate::domain::book::value_objects::{
    BookAuthor, BookDescription, BookTitle, CourseId, Isbn, Price, Quantity,
};
use crate::domain::user::{Email, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Book {
    pub isbn: Isbn,
    pub title: BookTitle,
    pub author: BookAuthor,
    pub course: CourseId,
    pub price: Price,
    pub description: BookDescription,
    pub picture: String,
    pub quantity: Quantity,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBook {
    pub isbn: Isbn,
    pub title: BookTitle,
    pub author: BookAuthor,
    pub course: CourseId,
    pub price: Price,
    pub description: BookDescription,
    pub picture: String,
    pub quantity: Quantity,
    pub created_at: DateTime<Utc>,
}

/// Links a posted book to the user selling it.
#[derive(Debug, Clone)]
pub struct Posting {
    pub id: i64,
    pub seller_id: UserId,
    pub isbn: Isbn,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Seller {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
}

/// A book together with who posted it and when.
#[derive(Debug, Clone)]
pub struct BookListing {
    pub book: Book,
    pub posting: Option<Posting>,
    pub seller: Option<Seller>,
}

impl BookListing {
    pub fn is_sold_by(&self, user_id: UserId) -> bool {
        self.posting
            .as_ref()
            .is_some_and(|posting| posting.seller_id == user_id)
    }
}

/// One of a seller's postings with the posted book.
#[derive(Debug, Clone)]
pub struct PostedBook {
    pub posting: Posting,
    pub book: Book,
}
