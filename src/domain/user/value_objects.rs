// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }

    /// Role of a new account: the first one ever stored administers the site.
    pub fn for_new_account(is_first: bool) -> Self {
        if is_first { Role::Admin } else { Role::Student }
    }

    pub fn default_capabilities(&self) -> HashSet<Capability> {
        use Capability as Cap;
        match self {
            Role::Admin => HashSet::from([
                Cap::new("books", "create"),
                Cap::new("books", "view"),
                Cap::new("books", "delete:any"),
            ]),
            Role::Student => HashSet::from([
                Cap::new("books", "create"),
                Cap::new("books", "view"),
                Cap::new("books", "delete:own"),
            ]),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "student" => Ok(Role::Student),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

const MAX_EMAIL_LENGTH: usize = 254;

/// Lower-cased, trimmed e-mail address. Used as the login identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_lowercase();
        if value.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }
        if value.len() > MAX_EMAIL_LENGTH || !Self::is_well_formed(&value) {
            return Err(DomainError::Validation("please enter a valid email".into()));
        }
        Ok(Self(value))
    }

    fn is_well_formed(value: &str) -> bool {
        let mut parts = value.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return false;
        };
        !local.is_empty()
            && !value.chars().any(char::is_whitespace)
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub const MIN_LENGTH: usize = 3;
    pub const MAX_LENGTH: usize = 32;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        let length = value.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(DomainError::Validation(format!(
                "username must be at least {} characters long",
                Self::MIN_LENGTH
            )));
        }
        if length > Self::MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "username must be at most {} characters long",
                Self::MAX_LENGTH
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let email = Email::new("  Jane.Doe@Campus.EDU ").unwrap();
        assert_eq!(email.as_str(), "jane.doe@campus.edu");
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for raw in ["", "no-at-sign", "a@b", "@campus.edu", "a@@campus.edu", "a b@campus.edu", "a@.edu"] {
            assert!(Email::new(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn username_length_bounds() {
        assert!(Username::new("ab").is_err());
        assert!(Username::new("abc").is_ok());
        assert!(Username::new("x".repeat(33)).is_err());
        assert_eq!(Username::new("  reader  ").unwrap().as_str(), "reader");
    }

    #[test]
    fn role_round_trips_through_text() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert!("author".parse::<Role>().is_err());
    }

    #[test]
    fn only_the_first_account_is_admin() {
        assert_eq!(Role::for_new_account(true), Role::Admin);
        assert_eq!(Role::for_new_account(false), Role::Student);
    }

    #[test]
    fn only_admins_may_delete_any_book() {
        let admin = Role::Admin.default_capabilities();
        let student = Role::Student.default_capabilities();
        assert!(admin.iter().any(|c| c.matches("books", "delete:any")));
        assert!(!student.iter().any(|c| c.matches("books", "delete:any")));
        assert!(student.iter().any(|c| c.matches("books", "delete:own")));
    }
}
