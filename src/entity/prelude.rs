pub use super::collaboration::Entity as Collaboration;
pub use super::entrepreneur_profile::Entity as EntrepreneurProfile;
pub use super::freelance_profile::Entity as FreelanceProfile;
pub use super::freelance_skill::Entity as FreelanceSkill;
pub use super::listing::Entity as Listing;
pub use super::skill::Entity as Skill;
pub use super::user::Entity as User;
