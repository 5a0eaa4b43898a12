// tests/support/mocks/security.rs
use async_trait::async_trait;
use campus_books::application::{
    ApplicationResult, error::ApplicationError, ports::random::PictureSelector,
    ports::security::PasswordHasher,
};
use campus_books::infrastructure::security::BiscuitTokenManager;
use std::time::Duration;

pub const TEST_ROOT_KEY: &str =
    "b2a5c9d1e3f4a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1";

pub const TEST_PICTURE: &str = "/static/img/books/sample_1.jpg";

/// Real biscuit tokens signed with a fixed test key.
pub fn test_token_manager() -> BiscuitTokenManager {
    BiscuitTokenManager::new(TEST_ROOT_KEY, Duration::from_secs(3600))
        .expect("test root key must be valid")
}

/// Cheap reversible "hash" that still rejects wrong passwords.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("bad password"))
        }
    }
}

/// [`StrictPasswordHasher`] that yields to the scheduler first, so joined
/// registrations interleave between their lookups and their inserts.
#[derive(Clone, Debug, Default)]
pub struct YieldingPasswordHasher;

#[async_trait]
impl PasswordHasher for YieldingPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        tokio::task::yield_now().await;
        StrictPasswordHasher.hash(password).await
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        StrictPasswordHasher.verify(password, expected_hash).await
    }
}

#[derive(Clone, Debug, Default)]
pub struct FixedPicture;

impl PictureSelector for FixedPicture {
    fn pick(&self) -> String {
        TEST_PICTURE.to_string()
    }
}
