use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    normalize_email, CreateListing, CreateUser, NewEntrepreneur, NewFreelance, Role,
    UploadedDocument,
};
use crate::repositories::{
    EntrepreneurRepository, FreelanceRepository, ListingRepository, UserRepository,
};
use crate::services::{normalize_skills, AuthService, SkillService};
use crate::storage::FileStorage;

/// What a caller needs to carry on after signing up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Registered {
    pub id: Uuid,
    pub role: Role,
}

pub struct RegistrationService;

impl RegistrationService {
    /// Create the user, the entrepreneur profile and the auto-published
    /// listing in one transaction. A stored document is removed again if
    /// the transaction does not commit.
    pub async fn register_entrepreneur(
        db: &DatabaseConnection,
        storage: &dyn FileStorage,
        input: NewEntrepreneur,
        document: Option<UploadedDocument>,
    ) -> AppResult<Registered> {
        let email = normalize_email(&input.email);
        Self::ensure_email_available(db, &email).await?;

        let password_hash = AuthService::hash_password(&input.password)?;

        let stored = match &document {
            Some(doc) => Some(storage.store(doc.file_name.as_deref(), &doc.contents).await?),
            None => None,
        };

        let result =
            Self::persist_entrepreneur(db, &email, &input, &password_hash, stored.clone()).await;

        if result.is_err() {
            if let Some(name) = &stored {
                if let Err(e) = storage.remove(name).await {
                    tracing::warn!(file = %name, error = %e, "Failed to remove orphaned upload");
                }
            }
        }

        let user_id = result?;
        tracing::info!(user_id = %user_id, role = "entrepreneur", "Registered user");

        Ok(Registered {
            id: user_id,
            role: Role::Entrepreneur,
        })
    }

    /// Create the user, the freelance profile and one link per normalized
    /// skill in one transaction.
    pub async fn register_freelance(
        db: &DatabaseConnection,
        input: NewFreelance,
    ) -> AppResult<Registered> {
        let skills = normalize_skills(&input.skills);
        if skills.is_empty() {
            return Err(AppError::Validation("At least one skill is required".to_string()));
        }

        let email = normalize_email(&input.email);
        Self::ensure_email_available(db, &email).await?;

        let password_hash = AuthService::hash_password(&input.password)?;

        let txn = db.begin().await?;

        let user = UserRepository::create(
            &txn,
            &CreateUser {
                name: input.name.clone(),
                surname: input.surname.clone(),
                email,
                role: Role::Freelance,
            },
            &password_hash,
        )
        .await?;

        FreelanceRepository::create(&txn, user.id, &input).await?;

        // Sorted so concurrent registrations insert new skill keys in the same order.
        let mut ordered = skills;
        ordered.sort();
        for name in &ordered {
            let skill_id = SkillService::resolve_or_create(&txn, name).await?;
            FreelanceRepository::link_skill(&txn, user.id, skill_id).await?;
        }

        txn.commit().await?;

        tracing::info!(
            user_id = %user.id,
            role = "freelance",
            skills = ordered.len(),
            "Registered user"
        );

        Ok(Registered {
            id: user.id,
            role: Role::Freelance,
        })
    }

    async fn ensure_email_available(db: &DatabaseConnection, email: &str) -> AppResult<()> {
        if UserRepository::email_exists(db, email).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        Ok(())
    }

    async fn persist_entrepreneur(
        db: &DatabaseConnection,
        email: &str,
        input: &NewEntrepreneur,
        password_hash: &str,
        document: Option<String>,
    ) -> AppResult<Uuid> {
        let txn = db.begin().await?;

        let user = UserRepository::create(
            &txn,
            &CreateUser {
                name: input.name.clone(),
                surname: input.surname.clone(),
                email: email.to_string(),
                role: Role::Entrepreneur,
            },
            password_hash,
        )
        .await?;

        EntrepreneurRepository::create(&txn, user.id, input, document).await?;

        let desired_skills = Some(input.desired_skills.trim().to_string()).filter(|s| !s.is_empty());
        ListingRepository::create(
            &txn,
            &CreateListing {
                title: input.project_name.clone(),
                description: input.description.clone(),
                desired_skills,
                estimated_budget: input.budget,
                author_id: user.id,
                author_type: Role::Entrepreneur,
            },
        )
        .await?;

        txn.commit().await?;
        Ok(user.id)
    }
}
