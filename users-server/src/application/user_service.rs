use std::sync::Arc;

use tracing::{instrument, warn};

use crate::data::user_repository::UserRepository;
use crate::domain::{
    error::DomainError,
    user::{NewUser, User},
};

/// Thin facade over the `users` table. Holds no state besides the shared
/// repository handle.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Looks a user up by id. Lookup failures of any kind, including a
    /// malformed id, are reported as `None`.
    pub async fn find_by_id(&self, id: &str) -> Option<User> {
        match self.repo.find_by_id(id).await {
            Ok(user) => user,
            Err(err) => {
                warn!(user_id = %id, error = %err, "user lookup failed, treating as not found");
                None
            }
        }
    }

    pub async fn all(&self) -> Result<Vec<User>, DomainError> {
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        self.repo.create(new_user).await
    }
}
