// src/infrastructure/security/mod.rs
pub mod claims;
pub mod password;
pub mod redis_session_store;
pub mod session_store;
pub mod token;

pub use password::Argon2PasswordHasher;
pub use redis_session_store::RedisSessionRevocationStore;
pub use session_store::InMemorySessionRevocationStore;
pub use token::BiscuitTokenManager;
