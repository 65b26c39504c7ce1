// Library crate for the Fluss matching backend
// Exports modules for use by the server binary and tests

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod storage;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    budget_total, create_collaboration, create_listing, get_entrepreneur, get_listing,
    get_matches, health, list_listings, list_project_summaries, list_projects, login,
    register_entrepreneur, register_freelance,
};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health))
        // Registration & auth
        .route("/registrations/entrepreneur", post(register_entrepreneur))
        .route("/registrations/freelance", post(register_freelance))
        .route("/auth/login", post(login))
        // Entrepreneur reads
        .route("/entrepreneurs/{user_id}", get(get_entrepreneur))
        .route("/entrepreneurs/{user_id}/projects", get(list_projects))
        .route(
            "/entrepreneurs/{user_id}/projects/summary",
            get(list_project_summaries),
        )
        .route("/entrepreneurs/{user_id}/budget-total", get(budget_total))
        // Listings
        .route("/listings", get(list_listings).post(create_listing))
        .route("/listings/{id}", get(get_listing))
        // Collaborations
        .route("/collaborations", post(create_collaboration))
        // Matching
        .route("/matches/{entrepreneur_id}", get(get_matches))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
