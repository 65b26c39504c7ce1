pub mod collaboration;
pub mod entrepreneur;
pub mod freelance;
pub mod listing;
pub mod matching;
pub mod skill;
pub mod user;

pub use collaboration::*;
pub use entrepreneur::*;
pub use freelance::*;
pub use listing::*;
pub use matching::*;
pub use skill::*;
pub use user::*;
