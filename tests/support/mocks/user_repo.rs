// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use campus_books::domain::{
    errors::{DomainError, DomainResult},
    user::{Email, NewUser, Role, User, UserId, UserRepository, Username},
};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|user| user.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        if users.iter().any(|user| user.username == new_user.username) {
            return Err(DomainError::Conflict("username already taken".into()));
        }

        let user = User {
            id: UserId::new(users.len() as i64 + 1)?,
            email: new_user.email,
            username: new_user.username,
            password_hash: new_user.password_hash,
            role: Role::for_new_account(users.is_empty()),
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| &user.email == email)
            .cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.get(id))
    }
}
