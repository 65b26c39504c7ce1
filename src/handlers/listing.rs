use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::handlers::common::{
    ensure_money, validate_optional, validate_required, BUDGET_INTEGER_DIGITS,
};
use crate::handlers::PaginationParams;
use crate::models::{CreateListing, Listing, Role};
use crate::repositories::{ListingRepository, Repository, UserRepository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub desired_skills: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub estimated_budget: Option<Decimal>,
    pub author_id: Option<Uuid>,
    /// Defaults to the author's role
    pub author_type: Option<Role>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub desired_skills: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub estimated_budget: Decimal,
    pub author_id: Uuid,
    pub author_type: Role,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub created_at: OffsetDateTime,
}

impl From<Listing> for ListingResponse {
    fn from(l: Listing) -> Self {
        Self {
            id: l.id,
            title: l.title,
            description: l.description,
            desired_skills: l.desired_skills,
            estimated_budget: l.estimated_budget,
            author_id: l.author_id,
            author_type: l.author_type,
            created_at: l.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListingListResponse {
    pub data: Vec<ListingResponse>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

// ============ Handlers ============

/// Publish a listing
#[utoipa::path(
    post,
    path = "/listings",
    request_body = CreateListingRequest,
    responses(
        (status = 201, description = "Listing created", body = ListingResponse),
        (status = 400, description = "Missing or invalid fields")
    ),
    tag = "Listings"
)]
pub async fn create_listing(
    State(state): State<AppState>,
    payload: Result<Json<CreateListingRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ListingResponse>)> {
    let Json(payload) = payload?;

    let title = validate_required("title", payload.title)?;
    let description = validate_required("description", payload.description)?;
    let estimated_budget = payload
        .estimated_budget
        .ok_or_else(|| AppError::Validation("estimatedBudget is required".to_string()))?;
    let estimated_budget =
        ensure_money("estimatedBudget", estimated_budget, BUDGET_INTEGER_DIGITS)?;
    let author_id = payload
        .author_id
        .ok_or_else(|| AppError::Validation("authorId is required".to_string()))?;

    let author = UserRepository::find_by_id(&state.db, author_id)
        .await?
        .ok_or_else(|| AppError::Validation("authorId does not match any user".to_string()))?;

    let author_type = match payload.author_type {
        Some(role) if role != author.role => {
            return Err(AppError::Validation(
                "authorType does not match the author's role".to_string(),
            ));
        }
        Some(role) => role,
        None => author.role,
    };

    let listing = ListingRepository::create(
        &state.db,
        &CreateListing {
            title,
            description,
            desired_skills: validate_optional(payload.desired_skills),
            estimated_budget,
            author_id,
            author_type,
        },
    )
    .await?;

    tracing::info!(listing_id = %listing.id, author_id = %author_id, "Published listing");
    Ok((StatusCode::CREATED, Json(listing.into())))
}

/// List listings, newest first
#[utoipa::path(
    get,
    path = "/listings",
    params(PaginationParams),
    responses(
        (status = 200, description = "List of listings", body = ListingListResponse)
    ),
    tag = "Listings"
)]
pub async fn list_listings(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<ListingListResponse>> {
    let limit = params.limit();
    let offset = params.offset();

    let listings = ListingRepository::list(&state.db, limit, offset).await?;
    let total = ListingRepository::count(&state.db).await?;

    Ok(Json(ListingListResponse {
        data: listings.into_iter().map(|l| l.into()).collect(),
        total,
        limit,
        offset,
    }))
}

/// Get a listing by ID
#[utoipa::path(
    get,
    path = "/listings/{id}",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing details", body = ListingResponse),
        (status = 404, description = "Listing not found")
    ),
    tag = "Listings"
)]
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ListingResponse>> {
    let listing = ListingRepository::find_by_id(&state.db, id).await?;
    Ok(Json(listing.into()))
}
