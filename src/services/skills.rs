use sea_orm::{ConnectionTrait, TransactionTrait};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::repositories::{is_unique_violation, SkillRepository};

/// Split a comma separated skill list into trimmed, lowercased, deduplicated
/// names. First occurrence wins; empty pieces are dropped.
pub fn normalize_skills(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for piece in raw.split(',') {
        let name = piece.trim().to_lowercase();
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

pub struct SkillService;

impl SkillService {
    /// Return the id of the skill called `name`, creating it when absent.
    ///
    /// The insert runs in a savepoint: if a concurrent request created the
    /// same skill first, the unique violation only rolls back the savepoint
    /// and the existing row is read back.
    pub async fn resolve_or_create<C>(conn: &C, name: &str) -> AppResult<Uuid>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        if let Some(skill) = SkillRepository::find_by_name(conn, name).await? {
            return Ok(skill.id);
        }

        let savepoint = conn.begin().await?;
        match SkillRepository::insert(&savepoint, name).await {
            Ok(skill) => {
                savepoint.commit().await?;
                tracing::debug!(skill = %skill.name, "Added skill to vocabulary");
                Ok(skill.id)
            }
            Err(err) if is_unique_violation(&err) => {
                savepoint.rollback().await?;
                tracing::debug!(skill = name, "Skill created concurrently, reading it back");
                SkillRepository::find_by_name(conn, name)
                    .await?
                    .map(|skill| skill.id)
                    .ok_or_else(|| {
                        AppError::Internal(format!("Skill {} vanished after conflict", name))
                    })
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_whitespace_variants_collapse() {
        assert_eq!(normalize_skills("React, react , REACT"), vec!["react"]);
    }

    #[test]
    fn test_keeps_first_seen_order() {
        assert_eq!(
            normalize_skills("Python, Design,python, SQL"),
            vec!["python", "design", "sql"]
        );
    }

    #[test]
    fn test_drops_empty_pieces() {
        assert_eq!(normalize_skills(" , rust,, ,go,"), vec!["rust", "go"]);
        assert!(normalize_skills("").is_empty());
        assert!(normalize_skills(" ,  , ").is_empty());
    }

    #[test]
    fn test_inner_whitespace_is_preserved() {
        assert_eq!(
            normalize_skills("Machine Learning ,UI  Design"),
            vec!["machine learning", "ui  design"]
        );
    }

    #[test]
    fn test_unicode_lowercasing() {
        assert_eq!(normalize_skills("Éclairage, ÉCLAIRAGE"), vec!["éclairage"]);
    }
}
