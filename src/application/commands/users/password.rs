use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

pub(super) fn validate_password(password: &str, confirm_password: &str) -> ApplicationResult<()> {
    if password.is_empty() {
        return Err(ApplicationError::validation("Password field empty"));
    }

    if password != confirm_password {
        return Err(ApplicationError::validation(
            "Password does not match confirmed password",
        ));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}
