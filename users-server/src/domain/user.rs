use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted user, exactly as the `users` table returns it.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Attributes accepted when inserting a user. `id` and `created_at` are
/// generated by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
}

impl NewUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn user_serializes_created_at_in_camel_case() {
        let user = User {
            id: Uuid::nil(),
            email: "a@b.com".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        };

        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "email": "a@b.com",
                "createdAt": "2024-01-02T03:04:05Z",
            })
        );
    }
}
