use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Collaboration, CreateCollaboration};
use crate::repositories::{CollaborationRepository, FreelanceRepository, ListingRepository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollaborationRequest {
    pub listing_id: Option<Uuid>,
    pub freelance_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationResponse {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub freelance_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub created_at: OffsetDateTime,
}

impl From<Collaboration> for CollaborationResponse {
    fn from(c: Collaboration) -> Self {
        Self {
            id: c.id,
            listing_id: c.listing_id,
            freelance_id: c.freelance_id,
            created_at: c.created_at,
        }
    }
}

// ============ Handlers ============

/// Start a collaboration between a listing and a freelancer
#[utoipa::path(
    post,
    path = "/collaborations",
    request_body = CreateCollaborationRequest,
    responses(
        (status = 201, description = "Collaboration created", body = CollaborationResponse),
        (status = 400, description = "Missing fields or collaboration already exists"),
        (status = 404, description = "Listing or freelancer not found")
    ),
    tag = "Collaborations"
)]
pub async fn create_collaboration(
    State(state): State<AppState>,
    payload: Result<Json<CreateCollaborationRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CollaborationResponse>)> {
    let Json(payload) = payload?;

    let listing_id = payload
        .listing_id
        .ok_or_else(|| AppError::Validation("listingId is required".to_string()))?;
    let freelance_id = payload
        .freelance_id
        .ok_or_else(|| AppError::Validation("freelanceId is required".to_string()))?;

    if !ListingRepository::exists(&state.db, listing_id).await? {
        return Err(AppError::NotFound("Listing".to_string()));
    }
    if !FreelanceRepository::exists(&state.db, freelance_id).await? {
        return Err(AppError::NotFound("Freelancer".to_string()));
    }

    let collaboration = CollaborationRepository::create(
        &state.db,
        &CreateCollaboration {
            listing_id,
            freelance_id,
        },
    )
    .await?;

    tracing::info!(
        collaboration_id = %collaboration.id,
        listing_id = %listing_id,
        freelance_id = %freelance_id,
        "Collaboration started"
    );
    Ok((StatusCode::CREATED, Json(collaboration.into())))
}
