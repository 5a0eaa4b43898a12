use super::UserCommandService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

impl UserCommandService {
    /// Revoke the session the actor's token belongs to.
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        let session_id = actor
            .session_id
            .as_deref()
            .ok_or_else(|| ApplicationError::validation("token is not bound to a session"))?;

        self.session_revocation_store.revoke(session_id).await?;
        tracing::info!(user_id = %actor.id, "session revoked");
        Ok(())
    }
}
