use std::collections::{BTreeMap, BTreeSet};

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{FreelanceMatch, SkillMatchRow};
use crate::repositories::{EntrepreneurRepository, FreelanceRepository};
use crate::services::normalize_skills;

pub struct MatchingService;

impl MatchingService {
    /// Freelancers sharing at least one skill with the entrepreneur's desired skills.
    /// An entrepreneur without a profile, or with no usable skills, gets no matches.
    pub async fn find_matches(
        db: &DatabaseConnection,
        entrepreneur_id: Uuid,
    ) -> AppResult<Vec<FreelanceMatch>> {
        let Some(profile) = EntrepreneurRepository::find_by_user(db, entrepreneur_id).await? else {
            return Ok(Vec::new());
        };

        let wanted = normalize_skills(&profile.desired_skills);
        if wanted.is_empty() {
            return Ok(Vec::new());
        }

        let rows = FreelanceRepository::find_by_skill_names(db, &wanted).await?;
        let matches = aggregate_matches(rows);

        tracing::debug!(
            entrepreneur_id = %entrepreneur_id,
            wanted = wanted.len(),
            matches = matches.len(),
            "Computed matches"
        );
        Ok(matches)
    }
}

/// Fold (freelancer, skill) rows into one record per freelancer, ordered by id.
pub fn aggregate_matches(rows: Vec<SkillMatchRow>) -> Vec<FreelanceMatch> {
    let mut by_freelancer: BTreeMap<Uuid, (SkillMatchRow, BTreeSet<String>)> = BTreeMap::new();

    for row in rows {
        let skill = row.skill.clone();
        by_freelancer
            .entry(row.user_id)
            .or_insert_with(|| (row, BTreeSet::new()))
            .1
            .insert(skill);
    }

    by_freelancer
        .into_values()
        .map(|(row, skills)| FreelanceMatch {
            id: row.user_id,
            name: row.name,
            surname: row.surname,
            email: row.email,
            years_experience: row.years_experience,
            availability: row.availability,
            skills: skills.into_iter().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(user_id: Uuid, name: &str, skill: &str) -> SkillMatchRow {
        SkillMatchRow {
            user_id,
            name: name.to_string(),
            surname: "Doe".to_string(),
            email: format!("{}@example.com", name),
            years_experience: 3,
            availability: "full-time".to_string(),
            skill: skill.to_string(),
        }
    }

    #[test]
    fn test_one_record_per_freelancer() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let matches = aggregate_matches(vec![
            row(alice, "alice", "python"),
            row(bob, "bob", "design"),
            row(alice, "alice", "design"),
        ]);

        assert_eq!(matches.len(), 2);
        let alice_match = matches.iter().find(|m| m.id == alice).unwrap();
        assert_eq!(alice_match.skills, vec!["design", "python"]);
        let bob_match = matches.iter().find(|m| m.id == bob).unwrap();
        assert_eq!(bob_match.skills, vec!["design"]);
    }

    #[test]
    fn test_duplicate_rows_are_deduplicated() {
        let id = Uuid::new_v4();
        let matches = aggregate_matches(vec![row(id, "carol", "rust"), row(id, "carol", "rust")]);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].skills, vec!["rust"]);
    }

    #[test]
    fn test_empty_rows() {
        assert!(aggregate_matches(Vec::new()).is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let id = Uuid::new_v4();
        let matches = aggregate_matches(vec![row(id, "dan", "sql")]);
        let json = serde_json::to_value(&matches[0]).unwrap();
        assert_eq!(json["yearsExperience"], 3);
        assert_eq!(json["skills"], serde_json::json!(["sql"]));
    }
}
