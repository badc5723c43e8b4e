mod config;
mod routes;
mod state;
mod theme;
mod view;

#[tokio::main]
async fn main() {
    // Local .env is a convenience; absence is not an error.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::SiteConfig::from_env().expect("configuration failed");
    tracing::info!(
        port = config.port,
        assets = %config.assets_dir.display(),
        bot_url = %config.bot_url,
        "configuration loaded"
    );

    let addr = format!("{}:{}", config.bind_addr, config.port);
    let state = state::AppState::new(config);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "vidyavriksh site listening");
    axum::serve(listener, app).await.expect("server failed");
}
