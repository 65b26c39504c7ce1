pub mod auth;
pub mod matching;
pub mod registration;
pub mod skills;

pub use auth::AuthService;
pub use matching::{aggregate_matches, MatchingService};
pub use registration::{Registered, RegistrationService};
pub use skills::{normalize_skills, SkillService};
