pub mod collaboration;
pub mod entrepreneur;
pub mod freelance;
pub mod listing;
pub mod skill;
pub mod user;

pub use collaboration::CollaborationRepository;
pub use entrepreneur::EntrepreneurRepository;
pub use freelance::FreelanceRepository;
pub use listing::ListingRepository;
pub use skill::SkillRepository;
pub use user::UserRepository;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::error::AppResult;

/// Base repository trait for read access to published records
#[async_trait]
pub trait Repository<T>
where
    T: Send + Sync,
{
    /// Find entity by ID
    async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> AppResult<T>;

    /// List entities with pagination
    async fn list(db: &DatabaseConnection, limit: u64, offset: u64) -> AppResult<Vec<T>>;

    /// Count total entities
    async fn count(db: &DatabaseConnection) -> AppResult<u64>;
}

/// True when the error comes from a UNIQUE constraint
pub(crate) fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    )
}
