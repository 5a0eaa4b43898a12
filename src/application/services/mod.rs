// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{books::BookCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            ClockPort, PasswordHasherPort, PictureSelectorPort, SessionRevocationPort,
            TokenManagerPort,
        },
        queries::{books::BookQueryService, users::UserQueryService},
    },
    domain::{
        book::{BookReadRepository, BookWriteRepository, PostingRepository},
        user::UserRepository,
    },
};

/// Repositories the services read from and write to.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub book_writes: Arc<dyn BookWriteRepository>,
    pub book_reads: Arc<dyn BookReadRepository>,
    pub postings: Arc<dyn PostingRepository>,
}

/// Infrastructure adapters behind the application ports.
pub struct Ports {
    pub password_hasher: Arc<PasswordHasherPort>,
    pub token_manager: Arc<TokenManagerPort>,
    pub session_revocation_store: Arc<SessionRevocationPort>,
    pub clock: Arc<ClockPort>,
    pub pictures: Arc<PictureSelectorPort>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub book_commands: Arc<BookCommandService>,
    pub book_queries: Arc<BookQueryService>,
    token_manager: Arc<TokenManagerPort>,
    session_revocation_store: Arc<SessionRevocationPort>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, ports: Ports) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&ports.password_hasher),
            Arc::clone(&ports.token_manager),
            Arc::clone(&ports.session_revocation_store),
            Arc::clone(&ports.clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&ports.clock),
        ));

        let book_commands = Arc::new(BookCommandService::new(
            Arc::clone(&repos.book_writes),
            Arc::clone(&repos.book_reads),
            Arc::clone(&ports.pictures),
            Arc::clone(&ports.clock),
        ));
        let book_queries = Arc::new(BookQueryService::new(
            Arc::clone(&repos.book_reads),
            Arc::clone(&repos.postings),
        ));

        Self {
            user_commands,
            user_queries,
            book_commands,
            book_queries,
            token_manager: ports.token_manager,
            session_revocation_store: ports.session_revocation_store,
        }
    }

    /// Authenticate a raw bearer token and reject it when its session was
    /// revoked by a logout.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;
        self.ensure_session_not_revoked(&user).await?;
        Ok(user)
    }

    /// Authenticate a raw bearer token and ensure the subject has the
    /// specified capability.
    pub async fn authenticate_and_authorize(
        &self,
        token: &str,
        resource: &str,
        action: &str,
    ) -> ApplicationResult<AuthenticatedUser> {
        let user = self.authenticate(token).await?;
        user.ensure_capability(resource, action)?;
        Ok(user)
    }

    async fn ensure_session_not_revoked(&self, user: &AuthenticatedUser) -> ApplicationResult<()> {
        if let Some(session_id) = &user.session_id {
            if self.session_revocation_store.is_revoked(session_id).await? {
                return Err(ApplicationError::unauthorized("session revoked"));
            }
        }

        Ok(())
    }
}
