use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Link between a freelancer and a skill of the shared vocabulary
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "freelance_skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub freelance_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub skill_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::freelance_profile::Entity",
        from = "Column::FreelanceId",
        to = "super::freelance_profile::Column::UserId"
    )]
    FreelanceProfile,
    #[sea_orm(
        belongs_to = "super::skill::Entity",
        from = "Column::SkillId",
        to = "super::skill::Column::Id"
    )]
    Skill,
}

impl Related<super::freelance_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FreelanceProfile.def()
    }
}

impl Related<super::skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skill.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
