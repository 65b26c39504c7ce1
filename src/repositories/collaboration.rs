use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use uuid::Uuid;

use crate::entity::collaboration::{self, ActiveModel};
use crate::error::{AppError, AppResult};
use crate::models::{Collaboration, CreateCollaboration};
use crate::repositories::is_unique_violation;

pub struct CollaborationRepository;

impl CollaborationRepository {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        input: &CreateCollaboration,
    ) -> AppResult<Collaboration> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            listing_id: Set(input.listing_id),
            freelance_id: Set(input.freelance_id),
            created_at: Set(time::OffsetDateTime::now_utc()),
        };

        let result = model.insert(conn).await.map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(
                    "Freelancer already collaborates on this listing".to_string(),
                )
            } else {
                AppError::Database(e.to_string())
            }
        })?;

        Ok(result.into())
    }
}

impl From<collaboration::Model> for Collaboration {
    fn from(m: collaboration::Model) -> Self {
        Self {
            id: m.id,
            listing_id: m.listing_id,
            freelance_id: m.freelance_id,
            created_at: m.created_at,
        }
    }
}
