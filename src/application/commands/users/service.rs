use std::sync::Arc;

use crate::application::ports::{
    ClockPort, PasswordHasherPort, SessionRevocationPort, TokenManagerPort,
};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<PasswordHasherPort>,
    pub(super) token_manager: Arc<TokenManagerPort>,
    pub(super) session_revocation_store: Arc<SessionRevocationPort>,
    pub(super) clock: Arc<ClockPort>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        token_manager: Arc<TokenManagerPort>,
        session_revocation_store: Arc<SessionRevocationPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            session_revocation_store,
            clock,
        }
    }
}
