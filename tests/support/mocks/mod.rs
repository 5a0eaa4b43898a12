// tests/support/mocks/mod.rs
pub mod book_repos;
pub mod security;
pub mod time;
pub mod user_repo;

pub use book_repos::InMemoryBookStore;
pub use security::{
    FixedPicture, StrictPasswordHasher, TEST_ROOT_KEY, YieldingPasswordHasher, test_token_manager,
};
pub use time::{FixedClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
