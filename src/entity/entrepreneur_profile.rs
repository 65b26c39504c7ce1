use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entrepreneur_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<TimeDate>,
    pub project_name: String,
    pub sector: String,
    /// Free text, comma separated. Normalized at match time.
    pub desired_skills: String,
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub budget: Decimal,
    pub deadline: Option<TimeDate>,
    /// Generated storage name of the uploaded document
    pub document: Option<String>,
    pub created_at: TimeDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
