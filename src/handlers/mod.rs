pub mod auth;
pub mod collaboration;
pub mod common;
pub mod entrepreneur;
pub mod health;
pub mod listing;
pub mod matching;
pub mod registration;

pub use auth::{login, LoginRequest};
pub use collaboration::{create_collaboration, CollaborationResponse, CreateCollaborationRequest};
pub use common::{validate_optional, validate_required, PaginationParams};
pub use entrepreneur::{
    budget_total, get_entrepreneur, list_project_summaries, list_projects, BudgetTotalResponse,
    EntrepreneurDetailsResponse, EntrepreneurProjectResponse, ProjectSummaryResponse,
};
pub use health::{health, HealthResponse};
pub use listing::{
    create_listing, get_listing, list_listings, CreateListingRequest, ListingListResponse,
    ListingResponse,
};
pub use matching::get_matches;
pub use registration::{
    register_entrepreneur, register_freelance, EntrepreneurRegisteredResponse,
    EntrepreneurRegistrationForm, FreelanceRegistrationRequest,
};
