// src/domain/book/mod.rs
pub mod catalog;
pub mod cursor;
pub mod entity;
pub mod repository;
pub mod search;
pub mod value_objects;

pub use cursor::BookListCursor;
pub use entity::{Book, BookListing, NewBook, PostedBook, Posting, Seller};
pub use repository::{BookReadRepository, BookWriteRepository, PostingRepository};
pub use search::{BookSearch, SearchField};
pub use value_objects::{
    BookAuthor, BookDescription, BookTitle, CourseId, Isbn, Price, Quantity,
};
