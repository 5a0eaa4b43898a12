use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait SessionRevocationStore: Send + Sync {
    /// Return true if the given session id has been revoked.
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool>;

    /// Revoke the given session id (e.g. on logout).
    async fn revoke(&self, session_id: &str) -> ApplicationResult<()>;
}
