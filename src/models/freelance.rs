use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreelanceProfile {
    pub user_id: Uuid,
    pub bio: String,
    pub portfolio: String,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<Date>,
    pub years_experience: i32,
    pub hourly_rate: Decimal,
    pub availability: String,
    pub created_at: OffsetDateTime,
}

/// Validated freelance registration
#[derive(Debug, Clone)]
pub struct NewFreelance {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<Date>,
    /// Raw comma separated skill list, normalized during registration
    pub skills: String,
    pub years_experience: i32,
    pub hourly_rate: Decimal,
    pub availability: String,
}
