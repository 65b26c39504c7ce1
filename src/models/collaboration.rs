use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaboration {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub freelance_id: Uuid,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct CreateCollaboration {
    pub listing_id: Uuid,
    pub freelance_id: Uuid,
}
