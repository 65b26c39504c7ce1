use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

use crate::entity::freelance_profile::{self, Entity as FreelanceProfileEntity};
use crate::entity::freelance_skill::{self, Entity as FreelanceSkillEntity};
use crate::entity::{skill, user};
use crate::error::AppResult;
use crate::models::{FreelanceProfile, NewFreelance, SkillMatchRow};

/// Freelance profile and skill-link repository
pub struct FreelanceRepository;

impl FreelanceRepository {
    /// Create the profile; bio and portfolio start empty.
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        input: &NewFreelance,
    ) -> AppResult<FreelanceProfile> {
        let model = freelance_profile::ActiveModel {
            user_id: Set(user_id),
            bio: Set(String::new()),
            portfolio: Set(String::new()),
            city: Set(input.city.clone()),
            phone: Set(input.phone.clone()),
            birth_date: Set(input.birth_date),
            years_experience: Set(input.years_experience),
            hourly_rate: Set(input.hourly_rate),
            availability: Set(input.availability.clone()),
            created_at: Set(time::OffsetDateTime::now_utc()),
        };

        let result = model.insert(conn).await?;
        Ok(result.into())
    }

    pub async fn exists<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> AppResult<bool> {
        let count = FreelanceProfileEntity::find_by_id(user_id)
            .count(conn)
            .await?;

        Ok(count > 0)
    }

    /// Link a freelancer to a skill of the vocabulary
    pub async fn link_skill<C: ConnectionTrait>(
        conn: &C,
        freelance_id: Uuid,
        skill_id: Uuid,
    ) -> AppResult<()> {
        let link = freelance_skill::ActiveModel {
            freelance_id: Set(freelance_id),
            skill_id: Set(skill_id),
        };

        FreelanceSkillEntity::insert(link)
            .exec_without_returning(conn)
            .await?;

        Ok(())
    }

    /// Every (freelancer, skill) pair whose skill name is one of `names`
    pub async fn find_by_skill_names<C: ConnectionTrait>(
        conn: &C,
        names: &[String],
    ) -> AppResult<Vec<SkillMatchRow>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let rows = FreelanceSkillEntity::find()
            .select_only()
            .column_as(user::Column::Id, "user_id")
            .column_as(user::Column::Name, "name")
            .column_as(user::Column::Surname, "surname")
            .column_as(user::Column::Email, "email")
            .column_as(freelance_profile::Column::YearsExperience, "years_experience")
            .column_as(freelance_profile::Column::Availability, "availability")
            .column_as(skill::Column::Name, "skill")
            .join(JoinType::InnerJoin, freelance_skill::Relation::Skill.def())
            .join(
                JoinType::InnerJoin,
                freelance_skill::Relation::FreelanceProfile.def(),
            )
            .join(JoinType::InnerJoin, freelance_profile::Relation::User.def())
            .filter(skill::Column::Name.is_in(names.iter().cloned()))
            .into_model::<SkillMatchRow>()
            .all(conn)
            .await?;

        Ok(rows)
    }
}

impl From<freelance_profile::Model> for FreelanceProfile {
    fn from(m: freelance_profile::Model) -> Self {
        Self {
            user_id: m.user_id,
            bio: m.bio,
            portfolio: m.portfolio,
            city: m.city,
            phone: m.phone,
            birth_date: m.birth_date,
            years_experience: m.years_experience,
            hourly_rate: m.hourly_rate,
            availability: m.availability,
            created_at: m.created_at,
        }
    }
}
