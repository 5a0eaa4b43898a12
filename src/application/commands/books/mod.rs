mod delete;
mod post;
mod service;

pub use delete::DeleteBookCommand;
pub use post::PostBookCommand;
pub use service::BookCommandService;
