// src/domain/book/cursor.rs
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};

/// Keyset position in the newest-first book listing.
#[derive(Debug, Clone, PartialEq)]
pub struct BookListCursor {
    pub created_at: DateTime<Utc>,
    pub isbn: String,
}

fn invalid() -> DomainError {
    DomainError::Validation("invalid cursor token".into())
}

impl BookListCursor {
    pub fn new(created_at: DateTime<Utc>, isbn: impl Into<String>) -> Self {
        Self {
            created_at,
            isbn: isbn.into(),
        }
    }

    pub fn encode(&self) -> String {
        let raw = format!("{}|{}", self.created_at.to_rfc3339(), self.isbn);
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let (created_at, isbn) = raw.split_once('|').ok_or_else(invalid)?;
        if isbn.is_empty() {
            return Err(invalid());
        }
        let created_at = DateTime::parse_from_rfc3339(created_at)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        Ok(Self::new(created_at, isbn))
    }
}
