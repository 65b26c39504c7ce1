use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entity::listing::{self, ActiveModel, Column, Entity as ListingEntity};
use crate::error::{AppError, AppResult};
use crate::models::{CreateListing, Listing};
use crate::repositories::Repository;

/// Listing repository for database operations
pub struct ListingRepository;

#[async_trait]
impl Repository<Listing> for ListingRepository {
    async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> AppResult<Listing> {
        let model = ListingEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Listing".to_string()))?;

        Ok(model.into())
    }

    async fn list(db: &DatabaseConnection, limit: u64, offset: u64) -> AppResult<Vec<Listing>> {
        let models = ListingEntity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .offset(offset)
            .limit(limit)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count(db: &DatabaseConnection) -> AppResult<u64> {
        let count = ListingEntity::find().count(db).await?;
        Ok(count)
    }
}

impl ListingRepository {
    /// Publish a new listing
    pub async fn create<C: ConnectionTrait>(conn: &C, input: &CreateListing) -> AppResult<Listing> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title.clone()),
            description: Set(input.description.clone()),
            desired_skills: Set(input.desired_skills.clone()),
            estimated_budget: Set(input.estimated_budget),
            author_id: Set(input.author_id),
            author_type: Set(input.author_type),
            created_at: Set(time::OffsetDateTime::now_utc()),
        };

        let result = model.insert(conn).await?;
        Ok(result.into())
    }

    pub async fn exists<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<bool> {
        let count = ListingEntity::find_by_id(id).count(conn).await?;
        Ok(count > 0)
    }
}

impl From<listing::Model> for Listing {
    fn from(m: listing::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            desired_skills: m.desired_skills,
            estimated_budget: m.estimated_budget,
            author_id: m.author_id,
            author_type: m.author_type,
            created_at: m.created_at,
        }
    }
}
