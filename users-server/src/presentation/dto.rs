use crate::domain::error::DomainError;
use crate::domain::user::{NewUser, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Presence check only; the email format is not inspected.
    pub fn validate(self) -> Result<NewUser, DomainError> {
        match self.email {
            Some(email) if !email.is_empty() => Ok(NewUser::new(email)),
            _ => Err(Self::missing_email()),
        }
    }

    pub fn missing_email() -> DomainError {
        DomainError::Validation("Missing email".to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct GetUserResponse {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
}
