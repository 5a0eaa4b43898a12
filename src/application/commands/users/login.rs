use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};
use uuid::Uuid;

const INVALID_CREDENTIALS: &str = "Incorrect password or email";

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let user = self
            .find_and_authenticate_user(&command.email, &command.password)
            .await?;

        self.start_session(user).await
    }

    pub(super) async fn start_session(&self, user: User) -> ApplicationResult<LoginResult> {
        let session_id = Uuid::new_v4().to_string();

        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.to_string(),
            role: user.role,
            capabilities: user.role.default_capabilities(),
            session_id: Some(session_id.clone()),
        };

        let mut token = self.token_manager.issue(subject).await?;
        token.session_id = Some(session_id);

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        let Ok(email) = Email::new(email) else {
            return Err(ApplicationError::unauthorized(INVALID_CREDENTIALS));
        };

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            tracing::warn!("login attempt for unknown email");
            return Err(ApplicationError::unauthorized(INVALID_CREDENTIALS));
        };

        match self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await
        {
            Ok(()) => Ok(user),
            Err(ApplicationError::Unauthorized(_)) => {
                tracing::warn!(user_id = %user.id, "login attempt with wrong password");
                Err(ApplicationError::unauthorized(INVALID_CREDENTIALS))
            }
            Err(other) => Err(other),
        }
    }
}
