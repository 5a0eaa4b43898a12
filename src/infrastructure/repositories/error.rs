use crate::domain::errors::DomainError;

const CNT_BOOK_ISBN: &str = "books_pkey";
const CNT_POSTING_ISBN: &str = "postings_isbn_key";
const CNT_POSTING_USER: &str = "postings_user_id_fkey";
const CNT_BOOK_PRICE_CHECK: &str = "books_price_chk";
const CNT_BOOK_QUANTITY_CHECK: &str = "books_quantity_chk";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_USER_USERNAME: &str = "users_username_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_BOOK_ISBN | CNT_POSTING_ISBN => {
                        DomainError::Conflict("ISBN has already been posted".into())
                    }
                    CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_USER_USERNAME => DomainError::Conflict("username already taken".into()),
                    CNT_POSTING_USER => DomainError::NotFound("seller not found".into()),
                    CNT_BOOK_PRICE_CHECK => {
                        DomainError::Validation("price must be a non-negative number".into())
                    }
                    CNT_BOOK_QUANTITY_CHECK => {
                        DomainError::Validation("quantity must be at least 1".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
