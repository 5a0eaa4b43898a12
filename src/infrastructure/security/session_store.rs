// src/infrastructure/security/session_store.rs
use crate::application::{
    ApplicationResult, error::ApplicationError,
    ports::session_revocation::SessionRevocationStore,
};
use async_trait::async_trait;
use std::{
    collections::HashSet,
    sync::{Mutex, MutexGuard},
};

/// Process-local revocation list. Revocations are lost on restart.
#[derive(Default)]
pub struct InMemorySessionRevocationStore {
    revoked: Mutex<HashSet<String>>,
}

impl InMemorySessionRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> ApplicationResult<MutexGuard<'_, HashSet<String>>> {
        self.revoked
            .lock()
            .map_err(|_| ApplicationError::infrastructure("session store lock poisoned"))
    }
}

#[async_trait]
impl SessionRevocationStore for InMemorySessionRevocationStore {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        Ok(self.guard()?.contains(session_id))
    }

    async fn revoke(&self, session_id: &str) -> ApplicationResult<()> {
        self.guard()?.insert(session_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn revoked_sessions_stay_revoked() {
        let store = InMemorySessionRevocationStore::new();
        assert!(!store.is_revoked("a").await.unwrap());
        store.revoke("a").await.unwrap();
        store.revoke("a").await.unwrap();
        assert!(store.is_revoked("a").await.unwrap());
        assert!(!store.is_revoked("b").await.unwrap());
    }
}
