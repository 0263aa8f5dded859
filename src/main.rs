use tokio::net::TcpListener;

use plainwiki::{build_router, logger::Logger, AppState, Config, WikiError};

#[tokio::main]
async fn main() -> Result<(), WikiError> {
    if let Err(e) = Logger::init() {
        eprintln!("Failed to initialise logger: {}", e);
    }

    let config = Config::new();
    let state = AppState::from_config(&config)?;
    log::info!("Title index holds {} pages", state.index.len());

    let app = build_router(state);

    let addr = config.socket_addr()?;
    log::info!("Wiki listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(WikiError::from)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
