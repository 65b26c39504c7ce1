use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::models::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub desired_skills: Option<String>,
    pub estimated_budget: Decimal,
    pub author_id: Uuid,
    pub author_type: Role,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct CreateListing {
    pub title: String,
    pub description: String,
    pub desired_skills: Option<String>,
    pub estimated_budget: Decimal,
    pub author_id: Uuid,
    pub author_type: Role,
}
