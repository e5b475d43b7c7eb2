mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    if config.backend_url.is_none() {
        tracing::warn!("MONSTER_BACKEND_URL not set; monster API requests will answer 503");
    }
    let port = config.port;

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "monster-admin listening");
    axum::serve(listener, app).await.expect("server failed");
}
