use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use fluss::entity::{freelance_skill, skill, user};

/// Accounts registered under an email
pub async fn count_users_by_email(db: &DatabaseConnection, email: &str) -> u64 {
    user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .count(db)
        .await
        .unwrap()
}

/// Rows of the skill vocabulary with this exact name
pub async fn count_skills_by_name(db: &DatabaseConnection, name: &str) -> u64 {
    skill::Entity::find()
        .filter(skill::Column::Name.eq(name))
        .count(db)
        .await
        .unwrap()
}

/// Names of the skills linked to a freelancer, sorted
pub async fn skill_names(db: &DatabaseConnection, freelance_id: Uuid) -> Vec<String> {
    let mut names: Vec<String> = freelance_skill::Entity::find()
        .filter(freelance_skill::Column::FreelanceId.eq(freelance_id))
        .find_also_related(skill::Entity)
        .all(db)
        .await
        .unwrap()
        .into_iter()
        .filter_map(|(_, skill)| skill.map(|s| s.name))
        .collect();

    names.sort();
    names
}
