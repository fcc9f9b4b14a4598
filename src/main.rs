mod model;
mod server;

use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config, error::AppError, startup, state::AppState, storage::ImageStorage,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let image_storage = ImageStorage::new(&config.upload_dir, &config.upload_url_prefix);

    tokio::fs::create_dir_all(image_storage.root()).await?;

    let (api_routes, openapi) = server::router::router();

    let app = api_routes
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            image_storage.clone(),
            config.google_userinfo_url.clone(),
        ))
        .layer(session)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .nest_service(image_storage.url_prefix(), ServeDir::new(image_storage.root()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
