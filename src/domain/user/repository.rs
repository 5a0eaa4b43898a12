use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::{Email, UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store the account and assign its role in the same step, so that
    /// concurrent sign-ups on an empty table yield exactly one admin.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
}
