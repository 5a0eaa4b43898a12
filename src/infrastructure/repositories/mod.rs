// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_book;
mod postgres_posting;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_book::{PostgresBookReadRepository, PostgresBookWriteRepository};
pub use postgres_posting::PostgresPostingRepository;
pub use postgres_user::PostgresUserRepository;
