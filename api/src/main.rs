use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use unify_api::config::Config;
use unify_api::{create_app, AppState};
use unify_infra::ProveClient;
use unify_shared::Environment;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(Environment::from_env().default_log_level()),
    );

    info!("Starting Prove Unify Server");

    // Load configuration
    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    if !config.has_provider_credentials() {
        warn!("CLIENT_ID and/or CLIENT_SECRET are not set; provider calls will fail until they are");
    }

    let client = ProveClient::new(config.prove.clone())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    info!(
        "Environment: {}, provider: {}",
        config.environment(),
        client.config().resolved_base_url()
    );
    let app_state = web::Data::new(AppState::new(Arc::new(client)));

    let bind_address = config.server().bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors = config.cors().clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors));
    if config.server().workers > 0 {
        server = server.workers(config.server().workers);
    }

    server.bind(&bind_address)?.run().await
}
