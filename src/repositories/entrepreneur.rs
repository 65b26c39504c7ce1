use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entity::entrepreneur_profile::{
    self, ActiveModel, Column, Entity as EntrepreneurProfileEntity,
};
use crate::entity::user::Entity as UserEntity;
use crate::error::AppResult;
use crate::models::{EntrepreneurDetails, EntrepreneurProfile, NewEntrepreneur};

/// Entrepreneur profile repository
pub struct EntrepreneurRepository;

impl EntrepreneurRepository {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        input: &NewEntrepreneur,
        document: Option<String>,
    ) -> AppResult<EntrepreneurProfile> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            city: Set(input.city.clone()),
            phone: Set(input.phone.clone()),
            birth_date: Set(input.birth_date),
            project_name: Set(input.project_name.clone()),
            sector: Set(input.sector.clone()),
            desired_skills: Set(input.desired_skills.clone()),
            description: Set(input.description.clone()),
            budget: Set(input.budget),
            deadline: Set(input.deadline),
            document: Set(document),
            created_at: Set(time::OffsetDateTime::now_utc()),
        };

        let result = model.insert(conn).await?;
        Ok(result.into())
    }

    /// All profile rows of a user
    pub async fn list_by_user<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> AppResult<Vec<EntrepreneurProfile>> {
        let models = EntrepreneurProfileEntity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CreatedAt)
            .all(conn)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    pub async fn find_by_user<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> AppResult<Option<EntrepreneurProfile>> {
        let model = EntrepreneurProfileEntity::find()
            .filter(Column::UserId.eq(user_id))
            .one(conn)
            .await?;

        Ok(model.map(Into::into))
    }

    /// Sum of budgets, zero when the user has no profile
    pub async fn total_budget<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> AppResult<Decimal> {
        let total: Option<Option<Decimal>> = EntrepreneurProfileEntity::find()
            .select_only()
            .column_as(Column::Budget.sum(), "total")
            .filter(Column::UserId.eq(user_id))
            .into_tuple()
            .one(conn)
            .await?;

        Ok(total.flatten().unwrap_or(Decimal::ZERO))
    }

    /// User joined with their profile
    pub async fn find_details<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> AppResult<Option<EntrepreneurDetails>> {
        let row = UserEntity::find_by_id(user_id)
            .find_also_related(EntrepreneurProfileEntity)
            .one(conn)
            .await?;

        Ok(match row {
            Some((user, Some(profile))) => Some(EntrepreneurDetails {
                user: user.into(),
                profile: profile.into(),
            }),
            _ => None,
        })
    }
}

impl From<entrepreneur_profile::Model> for EntrepreneurProfile {
    fn from(m: entrepreneur_profile::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            city: m.city,
            phone: m.phone,
            birth_date: m.birth_date,
            project_name: m.project_name,
            sector: m.sector,
            desired_skills: m.desired_skills,
            description: m.description,
            budget: m.budget,
            deadline: m.deadline,
            document: m.document,
            created_at: m.created_at,
        }
    }
}
