use actix_web::{web, HttpServer};
use log::{info, warn};
use tokio::sync::broadcast::error::RecvError;

use wc_api::{create_app, AppState};
use wc_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.logging.level));

    info!(
        "Starting WordCrafter API Server ({} environment)",
        config.environment
    );
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; tokens are signed with the development secret");
    }

    let infra = wc_infra::initialize(&config).await?;
    let app_state = web::Data::new(AppState::new(
        infra.user_repository(),
        infra.morpheme_repository(),
        infra.word_repository(),
        &config.auth,
    ));

    let mut events = app_state.game_play.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => log::debug!(
                    "Session {} (user {}): {:?}",
                    event.session_id,
                    event.user_id,
                    event.event
                ),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Game event listener skipped {} events", skipped)
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let server_config = config.clone();
    let state = app_state.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &server_config));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    info!("Server stopped, closing database connections");
    infra.shutdown().await;
    Ok(())
}
