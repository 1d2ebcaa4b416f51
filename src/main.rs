use person_api::config;
use person_api::person::entity::sample_people;
use person_api::routes::{app, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up PERSON_API_PORT etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Person API in {:?} mode", config.environment);

    let seed = if config.store.seed_sample_data {
        sample_people()
    } else {
        Vec::new()
    };
    let state = AppState::in_memory(seed);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Person API listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.expect("server");
}
