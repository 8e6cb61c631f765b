use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod clients;
mod config;
mod error;
mod features;
mod middleware;
mod state;

use clients::places::PlacesClient;
use config::Config;
use middleware::auth::JwtKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::auth::handlers::register,
        features::auth::handlers::login,
        features::workouts::handlers::create_workout,
        features::workouts::handlers::list_workouts,
        features::prs::handlers::create_pr,
        features::prs::handlers::list_prs,
        features::gyms::handlers::list_gyms,
        features::gyms::handlers::get_gym,
        features::gyms::handlers::create_gym,
        features::gyms::handlers::update_gym,
        features::gyms::handlers::delete_gym,
        features::gyms::handlers::gym_leaderboard,
        features::maps::handlers::nearby_gyms,
        features::maps::handlers::place_details,
        features::maps::handlers::save_place,
        features::alerts::handlers::list_alerts,
        features::form_checks::handlers::create_form_check,
        features::form_checks::handlers::list_form_checks,
        features::pain_logs::handlers::create_pain_log,
        features::pain_logs::handlers::list_pain_logs,
    ),
    components(
        schemas(
            storage::dto::auth::RegisterRequest,
            storage::dto::auth::LoginRequest,
            storage::dto::auth::AuthResponse,
            storage::dto::auth::UserInfo,
            storage::dto::common::PaginationMeta,
            storage::dto::gym::CreateGymRequest,
            storage::dto::gym::UpdateGymRequest,
            storage::dto::gym::SaveFromPlaceRequest,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::pr::CreatePersonalRecordRequest,
            storage::dto::form_check::CreateFormCheckRequest,
            storage::dto::pain_log::CreatePainLogRequest,
            storage::dto::pain_log::PainEntryInput,
            storage::models::Gym,
            storage::models::Workout,
            storage::models::PersonalRecord,
            storage::models::Alert,
            storage::models::FormCheck,
            storage::models::PainLog,
            storage::models::PainEntry,
            clients::places::Place,
            clients::places::PlaceDetails,
            clients::places::PlacePhoto,
            clients::places::Geometry,
            clients::places::LatLng,
            features::maps::services::NearbyGym,
        )
    ),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "workouts", description = "Workout logging"),
        (name = "prs", description = "Personal records"),
        (name = "gyms", description = "Gym management and leaderboards"),
        (name = "maps", description = "Nearby gym discovery"),
        (name = "alerts", description = "Plateau alerts"),
        (name = "form-checks", description = "Form check submissions"),
        (name = "pain-logs", description = "Pain tracking"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting LiftrTrackr API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState {
        db,
        jwt: JwtKeys::from_secret(config.jwt_secret.as_bytes()),
        places: PlacesClient::new(config.places_base_url.clone(), config.places_api_key.clone()),
    };

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/auth", features::auth::routes::routes())
        .nest("/api/workouts", features::workouts::routes::routes(state.clone()))
        .nest("/api/prs", features::prs::routes::routes(state.clone()))
        .nest("/api/gyms", features::gyms::routes::routes(state.clone()))
        .nest("/api/maps", features::maps::routes::routes(state.clone()))
        .nest("/api/alerts", features::alerts::routes::routes(state.clone()))
        .nest(
            "/api/form-checks",
            features::form_checks::routes::routes(state.clone()),
        )
        .nest(
            "/api/pain-logs",
            features::pain_logs::routes::routes(state.clone()),
        )
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
