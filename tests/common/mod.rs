#![allow(dead_code, unused_imports)]

mod app;
mod factory;
mod queries;

pub use app::{test_config, TestApp};
pub use factory::{unique_skill, Factory};
pub use queries::{count_skills_by_name, count_users_by_email, skill_names};
