use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::FreelanceMatch;
use crate::services::MatchingService;
use crate::state::AppState;

/// Freelancers whose skills overlap the entrepreneur's desired skills
#[utoipa::path(
    get,
    path = "/matches/{entrepreneur_id}",
    params(
        ("entrepreneur_id" = Uuid, Path, description = "Entrepreneur user ID")
    ),
    responses(
        (status = 200, description = "Matching freelancers (empty when nothing matches)", body = [FreelanceMatch])
    ),
    tag = "Matching"
)]
pub async fn get_matches(
    State(state): State<AppState>,
    Path(entrepreneur_id): Path<Uuid>,
) -> AppResult<Json<Vec<FreelanceMatch>>> {
    let matches = MatchingService::find_matches(&state.db, entrepreneur_id).await?;
    Ok(Json(matches))
}
