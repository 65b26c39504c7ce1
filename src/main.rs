use anyhow::Context;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use fluss::config::{Config, LogFormat};
use fluss::handlers::{
    BudgetTotalResponse, CollaborationResponse, CreateCollaborationRequest, CreateListingRequest,
    EntrepreneurDetailsResponse, EntrepreneurProjectResponse, EntrepreneurRegisteredResponse,
    EntrepreneurRegistrationForm, FreelanceRegistrationRequest, HealthResponse,
    ListingListResponse, ListingResponse, LoginRequest, ProjectSummaryResponse,
};
use fluss::models::{FreelanceMatch, Identity, Role};
use fluss::services::Registered;
use fluss::state::AppState;
use fluss::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::registration::register_entrepreneur,
        handlers::registration::register_freelance,
        handlers::auth::login,
        handlers::entrepreneur::get_entrepreneur,
        handlers::entrepreneur::list_projects,
        handlers::entrepreneur::list_project_summaries,
        handlers::entrepreneur::budget_total,
        handlers::listing::create_listing,
        handlers::listing::list_listings,
        handlers::listing::get_listing,
        handlers::collaboration::create_collaboration,
        handlers::matching::get_matches,
    ),
    components(schemas(
        HealthResponse,
        Role,
        Registered,
        Identity,
        EntrepreneurRegistrationForm,
        EntrepreneurRegisteredResponse,
        FreelanceRegistrationRequest,
        LoginRequest,
        EntrepreneurDetailsResponse,
        EntrepreneurProjectResponse,
        ProjectSummaryResponse,
        BudgetTotalResponse,
        CreateListingRequest,
        ListingResponse,
        ListingListResponse,
        CreateCollaborationRequest,
        CollaborationResponse,
        FreelanceMatch,
    )),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Registration", description = "Entrepreneur and freelancer sign-up"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Entrepreneurs", description = "Entrepreneur profiles and projects"),
        (name = "Listings", description = "Published project listings"),
        (name = "Collaborations", description = "Freelancers working on listings"),
        (name = "Matching", description = "Skill based freelancer matching")
    )
)]
struct ApiDoc;

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_format);
    let addr = config.server_addr();

    // Connects to PostgreSQL and applies migrations
    tracing::info!("Connecting to database...");
    let state = AppState::new(config)
        .await
        .context("Failed to initialize application state")?;
    tracing::info!("Database connection established");

    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
