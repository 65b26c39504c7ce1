pub mod collaboration;
pub mod entrepreneur_profile;
pub mod freelance_profile;
pub mod freelance_skill;
pub mod listing;
pub mod skill;
pub mod user;

pub mod prelude;

pub use prelude::*;
