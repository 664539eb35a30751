mod model;
mod server;

use dioxus_logger::tracing::{self, Level};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;

    if config.seed_demo_data {
        startup::seed_demo_data(&db).await?;
    }

    let app = router::router(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    tracing::info!("Starting server on {}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
