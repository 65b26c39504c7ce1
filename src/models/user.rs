use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

pub use crate::entity::user::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    #[serde(skip_serializing)] // Never expose password hash
    pub password_hash: String,
    pub role: Role,
    pub created_at: OffsetDateTime,
}

/// User creation DTO (the password arrives already hashed)
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub role: Role,
}

/// Minimal identity returned after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
        }
    }
}

/// Emails are compared trimmed and lowercased everywhere.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
