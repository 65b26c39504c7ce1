use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::handlers::common::{
    ensure_money, parse_amount, parse_optional_date, validate_optional, validate_password,
    validate_required, BUDGET_INTEGER_DIGITS, RATE_INTEGER_DIGITS,
};
use crate::models::{NewEntrepreneur, NewFreelance, Role, UploadedDocument};
use crate::services::{Registered, RegistrationService};
use crate::state::AppState;

/// Name of the optional file part of the entrepreneur form
pub const DOCUMENT_FIELD: &str = "document";

// ============ Request/Response DTOs ============

/// Text fields of the entrepreneur registration form (multipart/form-data).
/// An optional file part named `document` may accompany them.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntrepreneurRegistrationForm {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    /// YYYY-MM-DD
    pub birth_date: Option<String>,
    pub project_name: Option<String>,
    pub sector: Option<String>,
    /// Comma separated
    pub desired_skills: Option<String>,
    pub description: Option<String>,
    pub budget: Option<String>,
    /// YYYY-MM-DD
    pub deadline: Option<String>,
}

impl EntrepreneurRegistrationForm {
    /// Record a text part. Unknown parts are ignored.
    pub fn set(&mut self, field: &str, value: String) {
        let slot = match field {
            "name" => &mut self.name,
            "surname" => &mut self.surname,
            "email" => &mut self.email,
            "password" => &mut self.password,
            "city" => &mut self.city,
            "phone" => &mut self.phone,
            "birthDate" => &mut self.birth_date,
            "projectName" => &mut self.project_name,
            "sector" => &mut self.sector,
            "desiredSkills" => &mut self.desired_skills,
            "description" => &mut self.description,
            "budget" => &mut self.budget,
            "deadline" => &mut self.deadline,
            _ => return,
        };
        *slot = Some(value);
    }

    pub fn validate(self) -> AppResult<NewEntrepreneur> {
        let budget = validate_required("budget", self.budget)?;

        Ok(NewEntrepreneur {
            name: validate_required("name", self.name)?,
            surname: validate_required("surname", self.surname)?,
            email: validate_required("email", self.email)?,
            password: validate_password(self.password)?,
            city: validate_optional(self.city),
            phone: validate_optional(self.phone),
            birth_date: parse_optional_date("birthDate", self.birth_date)?,
            project_name: validate_required("projectName", self.project_name)?,
            sector: validate_required("sector", self.sector)?,
            desired_skills: validate_optional(self.desired_skills).unwrap_or_default(),
            description: validate_required("description", self.description)?,
            budget: parse_amount("budget", &budget, BUDGET_INTEGER_DIGITS)?,
            deadline: parse_optional_date("deadline", self.deadline)?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntrepreneurRegisteredResponse {
    pub id: Uuid,
    pub role: Role,
    pub desired_skills: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FreelanceRegistrationRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    /// YYYY-MM-DD
    pub birth_date: Option<String>,
    /// Comma separated, e.g. "Rust, SQL, Design"
    pub skills: Option<String>,
    pub years_experience: Option<i32>,
    #[schema(value_type = Option<f64>)]
    pub hourly_rate: Option<Decimal>,
    pub availability: Option<String>,
}

impl FreelanceRegistrationRequest {
    pub fn validate(self) -> AppResult<NewFreelance> {
        let years_experience = self.years_experience.unwrap_or(0);
        if years_experience < 0 {
            return Err(AppError::Validation(
                "yearsExperience must not be negative".to_string(),
            ));
        }

        Ok(NewFreelance {
            name: validate_required("name", self.name)?,
            surname: validate_required("surname", self.surname)?,
            email: validate_required("email", self.email)?,
            password: validate_password(self.password)?,
            city: validate_optional(self.city),
            phone: validate_optional(self.phone),
            birth_date: parse_optional_date("birthDate", self.birth_date)?,
            skills: validate_required("skills", self.skills)?,
            years_experience,
            hourly_rate: ensure_money(
                "hourlyRate",
                self.hourly_rate.unwrap_or(Decimal::ZERO),
                RATE_INTEGER_DIGITS,
            )?,
            availability: validate_optional(self.availability).unwrap_or_default(),
        })
    }
}

// ============ Handlers ============

/// Register an entrepreneur and auto-publish their project as a listing
#[utoipa::path(
    post,
    path = "/registrations/entrepreneur",
    request_body(
        content = EntrepreneurRegistrationForm,
        content_type = "multipart/form-data",
        description = "Registration fields plus an optional `document` file part"
    ),
    responses(
        (status = 201, description = "Entrepreneur registered", body = EntrepreneurRegisteredResponse),
        (status = 400, description = "Validation error or email already registered"),
        (status = 500, description = "Unexpected failure")
    ),
    tag = "Registration"
)]
pub async fn register_entrepreneur(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<EntrepreneurRegisteredResponse>)> {
    let mut multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;

    let mut form = EntrepreneurRegistrationForm::default();
    let mut document = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == DOCUMENT_FIELD {
            let file_name = field.file_name().map(str::to_owned);
            let contents = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            if !contents.is_empty() {
                document = Some(UploadedDocument {
                    file_name,
                    contents: contents.to_vec(),
                });
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            form.set(&name, value);
        }
    }

    let input = form.validate()?;
    let desired_skills = input.desired_skills.clone();

    let registered = RegistrationService::register_entrepreneur(
        &state.db,
        state.storage.as_ref(),
        input,
        document,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(EntrepreneurRegisteredResponse {
            id: registered.id,
            role: registered.role,
            desired_skills,
        }),
    ))
}

/// Register a freelancer and link their skills to the shared vocabulary
#[utoipa::path(
    post,
    path = "/registrations/freelance",
    request_body = FreelanceRegistrationRequest,
    responses(
        (status = 200, description = "Freelancer registered", body = Registered),
        (status = 400, description = "Validation error or email already registered"),
        (status = 500, description = "Unexpected failure")
    ),
    tag = "Registration"
)]
pub async fn register_freelance(
    State(state): State<AppState>,
    payload: Result<Json<FreelanceRegistrationRequest>, JsonRejection>,
) -> AppResult<Json<Registered>> {
    let Json(payload) = payload?;
    let input = payload.validate()?;

    let registered = RegistrationService::register_freelance(&state.db, input).await?;
    Ok(Json(registered))
}
