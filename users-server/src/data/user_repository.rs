use crate::domain::error::DomainError;
use crate::domain::user::{NewUser, User};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error};

/// Parameterized access to the `users` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// At most one row. The id is passed to the database unparsed.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;
    /// Every row, newest first.
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    /// Exactly one inserted row.
    async fn create(&self, new_user: NewUser) -> Result<User, DomainError>;
}

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, created_at
            FROM users
            WHERE id = $1::uuid
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to find user by id {}: {}", id, e);
            DomainError::Storage(e.to_string())
        })
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, created_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching users: {}", e);
            DomainError::Storage(e.to_string())
        })
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email)
            VALUES ($1)
            RETURNING id, email, created_at
            "#,
        )
        .bind(&new_user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to create user: {}", e);
            DomainError::Storage(e.to_string())
        })?;

        debug!(user_id = %user.id, "user row inserted");
        Ok(user)
    }
}
