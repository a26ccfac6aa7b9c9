//! Main entry point for the Pi-hole Gate backend.
//!
//! This file initializes the Axum web server, sets up the database
//! connection and the Pi-hole client, and registers all API routes.
//! It orchestrates the application's startup and defines its overall structure.

use backend::config::Config;
use backend::database::Database;
use backend::services::pihole_service::PiholeService;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let db = Database::new(&config).await.unwrap();
    let pool = db.pool().clone();
    let pihole = PiholeService::new(&config).unwrap();

    let app = backend::app(pool, pihole).await;

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!(
        "Starting Pi-hole Gate server on port {} (appliance at {})",
        config.server_port, config.pihole_address
    );
    axum::serve(listener, app).await.unwrap();
}
