use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entity::skill::{self, ActiveModel, Column, Entity as SkillEntity};
use crate::error::AppResult;
use crate::models::Skill;

/// Skill vocabulary repository
pub struct SkillRepository;

impl SkillRepository {
    /// Exact lookup; names are stored normalized.
    pub async fn find_by_name<C: ConnectionTrait>(conn: &C, name: &str) -> AppResult<Option<Skill>> {
        let model = SkillEntity::find()
            .filter(Column::Name.eq(name))
            .one(conn)
            .await?;

        Ok(model.map(Into::into))
    }

    /// Plain insert. Returns the raw driver error so callers can tell a
    /// unique violation apart from other failures.
    pub async fn insert<C: ConnectionTrait>(conn: &C, name: &str) -> Result<Skill, DbErr> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
        };

        model.insert(conn).await.map(Into::into)
    }
}

impl From<skill::Model> for Skill {
    fn from(m: skill::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}
