use rust_decimal::Decimal;
use serde_json::{json, Value};
use uuid::Uuid;

use fluss::models::{NewEntrepreneur, NewFreelance};
use fluss::services::{Registered, RegistrationService};
use fluss::state::AppState;
use fluss::storage::InMemoryStorage;

pub const TEST_PASSWORD: &str = "TestPassword123!";

/// A skill name no other test will use, so matches stay isolated
pub fn unique_skill(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::new_v4())
}

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn entrepreneur_input(&self, desired_skills: &str) -> NewEntrepreneur {
        NewEntrepreneur {
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            email: unique_email("ada"),
            password: TEST_PASSWORD.to_string(),
            city: Some("London".to_string()),
            phone: None,
            birth_date: None,
            project_name: format!("Engine {}", Uuid::new_v4()),
            sector: "Computing".to_string(),
            desired_skills: desired_skills.to_string(),
            description: "A difference engine".to_string(),
            budget: Decimal::new(2500, 0),
            deadline: None,
        }
    }

    pub fn freelance_input(&self, skills: &str) -> NewFreelance {
        NewFreelance {
            name: "Grace".to_string(),
            surname: "Hopper".to_string(),
            email: unique_email("grace"),
            password: TEST_PASSWORD.to_string(),
            city: None,
            phone: None,
            birth_date: None,
            skills: skills.to_string(),
            years_experience: 5,
            hourly_rate: Decimal::new(80, 0),
            availability: "full-time".to_string(),
        }
    }

    /// Register an entrepreneur (and their auto-published listing)
    pub async fn create_entrepreneur(&self, desired_skills: &str) -> Registered {
        let input = self.entrepreneur_input(desired_skills);
        RegistrationService::register_entrepreneur(
            &self.state.db,
            &InMemoryStorage::new(),
            input,
            None,
        )
        .await
        .unwrap()
    }

    /// Register an entrepreneur with a specific budget
    pub async fn create_entrepreneur_with_budget(&self, budget: Decimal) -> Registered {
        let mut input = self.entrepreneur_input("");
        input.budget = budget;
        RegistrationService::register_entrepreneur(
            &self.state.db,
            &InMemoryStorage::new(),
            input,
            None,
        )
        .await
        .unwrap()
    }

    /// Register a freelancer with a comma separated skill list
    pub async fn create_freelance(&self, skills: &str) -> Registered {
        let input = self.freelance_input(skills);
        RegistrationService::register_freelance(&self.state.db, input)
            .await
            .unwrap()
    }

    /// Register a freelancer under a specific email
    pub async fn create_freelance_with_email(&self, email: &str, skills: &str) -> Registered {
        let mut input = self.freelance_input(skills);
        input.email = email.to_string();
        RegistrationService::register_freelance(&self.state.db, input)
            .await
            .unwrap()
    }

    /// JSON body accepted by POST /registrations/freelance
    pub fn freelance_payload(&self, email: &str, skills: &str) -> Value {
        json!({
            "name": "Grace",
            "surname": "Hopper",
            "email": email,
            "password": TEST_PASSWORD,
            "skills": skills,
            "yearsExperience": 10,
            "hourlyRate": 95.5,
            "availability": "part-time"
        })
    }
}
