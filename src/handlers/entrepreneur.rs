use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::handlers::common::format_date;
use crate::models::{EntrepreneurDetails, EntrepreneurProfile};
use crate::repositories::EntrepreneurRepository;
use crate::state::AppState;

// ============ Response DTOs ============

/// One entrepreneur profile row
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntrepreneurProjectResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    pub project_name: String,
    pub sector: String,
    pub desired_skills: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub budget: Decimal,
    pub deadline: Option<String>,
    pub document: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub created_at: OffsetDateTime,
}

impl From<EntrepreneurProfile> for EntrepreneurProjectResponse {
    fn from(p: EntrepreneurProfile) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            city: p.city,
            phone: p.phone,
            birth_date: format_date(p.birth_date),
            project_name: p.project_name,
            sector: p.sector,
            desired_skills: p.desired_skills,
            description: p.description,
            budget: p.budget,
            deadline: format_date(p.deadline),
            document: p.document,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummaryResponse {
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub budget: Decimal,
    pub deadline: Option<String>,
}

impl From<EntrepreneurProfile> for ProjectSummaryResponse {
    fn from(p: EntrepreneurProfile) -> Self {
        Self {
            title: p.project_name,
            description: p.description,
            budget: p.budget,
            deadline: format_date(p.deadline),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BudgetTotalResponse {
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub budget: Decimal,
}

/// User identity joined with the entrepreneur profile
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntrepreneurDetailsResponse {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    pub project_name: String,
    pub sector: String,
    pub desired_skills: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub budget: Decimal,
    pub deadline: Option<String>,
    pub document: Option<String>,
}

impl From<EntrepreneurDetails> for EntrepreneurDetailsResponse {
    fn from(d: EntrepreneurDetails) -> Self {
        let EntrepreneurDetails { user, profile } = d;
        Self {
            name: user.name,
            surname: user.surname,
            email: user.email,
            city: profile.city,
            phone: profile.phone,
            birth_date: format_date(profile.birth_date),
            project_name: profile.project_name,
            sector: profile.sector,
            desired_skills: profile.desired_skills,
            description: profile.description,
            budget: profile.budget,
            deadline: format_date(profile.deadline),
            document: profile.document,
        }
    }
}

// ============ Handlers ============

/// Get an entrepreneur's full profile
#[utoipa::path(
    get,
    path = "/entrepreneurs/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "Entrepreneur user ID")
    ),
    responses(
        (status = 200, description = "Entrepreneur profile", body = EntrepreneurDetailsResponse),
        (status = 404, description = "Entrepreneur not found")
    ),
    tag = "Entrepreneurs"
)]
pub async fn get_entrepreneur(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<EntrepreneurDetailsResponse>> {
    let details = EntrepreneurRepository::find_details(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Entrepreneur".to_string()))?;

    Ok(Json(details.into()))
}

/// List an entrepreneur's project rows
#[utoipa::path(
    get,
    path = "/entrepreneurs/{user_id}/projects",
    params(
        ("user_id" = Uuid, Path, description = "Entrepreneur user ID")
    ),
    responses(
        (status = 200, description = "Project rows", body = [EntrepreneurProjectResponse]),
        (status = 404, description = "No project found")
    ),
    tag = "Entrepreneurs"
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Vec<EntrepreneurProjectResponse>>> {
    let projects = EntrepreneurRepository::list_by_user(&state.db, user_id).await?;
    if projects.is_empty() {
        return Err(AppError::NotFound("Project".to_string()));
    }

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// Short view of an entrepreneur's projects
#[utoipa::path(
    get,
    path = "/entrepreneurs/{user_id}/projects/summary",
    params(
        ("user_id" = Uuid, Path, description = "Entrepreneur user ID")
    ),
    responses(
        (status = 200, description = "Project summaries", body = [ProjectSummaryResponse]),
        (status = 404, description = "No project found")
    ),
    tag = "Entrepreneurs"
)]
pub async fn list_project_summaries(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Vec<ProjectSummaryResponse>>> {
    let projects = EntrepreneurRepository::list_by_user(&state.db, user_id).await?;
    if projects.is_empty() {
        return Err(AppError::NotFound("Project".to_string()));
    }

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// Total budget across an entrepreneur's projects (0 when there are none)
#[utoipa::path(
    get,
    path = "/entrepreneurs/{user_id}/budget-total",
    params(
        ("user_id" = Uuid, Path, description = "Entrepreneur user ID")
    ),
    responses(
        (status = 200, description = "Budget total", body = BudgetTotalResponse)
    ),
    tag = "Entrepreneurs"
)]
pub async fn budget_total(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<BudgetTotalResponse>> {
    let budget = EntrepreneurRepository::total_budget(&state.db, user_id).await?;
    Ok(Json(BudgetTotalResponse { budget }))
}
