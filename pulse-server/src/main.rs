use std::net::SocketAddr;

use pulse_server::{
    app, config,
    generator::{self, GeneratorConfig},
    state::AppState,
    store::DataStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulse_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load settings
    let settings = config::Settings::new().expect("Failed to load settings");

    let generator_config = GeneratorConfig {
        seed: settings.data.seed,
        history_days: settings.data.history_days,
        post_count: settings.data.post_count,
    };

    // Generate the initial dataset
    let dataset = generator::generate(&generator_config);
    tracing::info!(
        "Generated mock data: {} accounts, {} samples, {} posts",
        dataset.accounts.len(),
        dataset.samples.len(),
        dataset.posts.len()
    );

    // Create application state
    let state = AppState::new(DataStore::new(dataset), generator_config);

    // Build router
    let app = app::build_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .expect("Failed to parse server address");
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Open http://localhost:{} in your browser", settings.server.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app).await.expect("Server error");
}
