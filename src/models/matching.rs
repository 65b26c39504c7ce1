use sea_orm::FromQueryResult;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// One (freelancer, matched skill) pair as read from the database
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct SkillMatchRow {
    pub user_id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub years_experience: i32,
    pub availability: String,
    pub skill: String,
}

/// A freelancer sharing at least one skill with the entrepreneur
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FreelanceMatch {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub years_experience: i32,
    pub availability: String,
    /// Matched skill names, deduplicated and sorted
    pub skills: Vec<String>,
}
