use premium_desk::{config, db, server, state::AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("premium_desk starting");

    let cfg = match config::AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    let db_pool = match db::init_db(&cfg.data_dir) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("database init error: {e}");
            std::process::exit(1);
        }
    };

    let port = cfg.server_port;
    let seed_key = cfg.finnhub_api_key.clone();
    let app_state = AppState::new(cfg, db_pool);

    // Seed from FINNHUB_API_KEY only when nothing is saved yet
    if let Some(key) = seed_key {
        match app_state.credentials.get() {
            Ok(None) => {
                if let Err(e) = app_state.credentials.set(&key) {
                    tracing::warn!("could not seed API key: {e}");
                }
            }
            Ok(Some(_)) => tracing::debug!("API key already saved, FINNHUB_API_KEY ignored"),
            Err(e) => tracing::warn!("could not read saved API key: {e}"),
        }
    }

    let app = server::router(app_state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!("server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("bind error: {e}");
            std::process::exit(1);
        });

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
    }
}
