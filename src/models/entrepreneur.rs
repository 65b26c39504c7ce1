use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::models::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrepreneurProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<Date>,
    pub project_name: String,
    pub sector: String,
    pub desired_skills: String,
    pub description: String,
    pub budget: Decimal,
    pub deadline: Option<Date>,
    pub document: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Validated entrepreneur registration
#[derive(Debug, Clone)]
pub struct NewEntrepreneur {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<Date>,
    pub project_name: String,
    pub sector: String,
    pub desired_skills: String,
    pub description: String,
    pub budget: Decimal,
    pub deadline: Option<Date>,
}

/// A file received with the registration form
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: Option<String>,
    pub contents: Vec<u8>,
}

/// User joined with their entrepreneur profile
#[derive(Debug, Clone)]
pub struct EntrepreneurDetails {
    pub user: User,
    pub profile: EntrepreneurProfile,
}
