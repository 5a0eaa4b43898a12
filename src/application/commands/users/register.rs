use super::{UserCommandService, login::LoginResult, password::validate_password};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::{Email, NewUser, PasswordHash, User, Username},
};

pub struct RegisterUserCommand {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl UserCommandService {
    /// Create an account and log it in straight away.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<LoginResult> {
        validate_password(&command.password, &command.confirm_password)?;
        let email = Email::new(command.email)?;
        let username = Username::new(command.username)?;

        self.ensure_identity_available(&email, &username).await?;

        let user = self
            .create_and_insert_user(email, username, &command.password)
            .await?;
        tracing::info!(user_id = %user.id, role = %user.role, "user registered");

        self.start_session(user).await
    }

    async fn ensure_identity_available(
        &self,
        email: &Email,
        username: &Username,
    ) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }

        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::conflict("username already taken"));
        }

        Ok(())
    }

    async fn create_and_insert_user(
        &self,
        email: Email,
        username: Username,
        password: &str,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let created_at = self.clock.now();
        let new_user = NewUser::new(email, username, password_hash, created_at);
        let user = self.user_repo.insert(new_user).await?;

        Ok(user)
    }
}
