mod courses;
mod get_by_isbn;
mod list;
mod postings;
mod search;
mod service;

pub use get_by_isbn::GetBookQuery;
pub use list::{DEFAULT_PAGE_SIZE, ListBooksQuery, MAX_PAGE_SIZE};
pub use search::SearchBooksQuery;
pub use service::BookQueryService;
