use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, DatabaseConfig, ServerConfig};
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config file when present and valid, else SERVER_HOST/SERVER_PORT and DATABASE_URL.
fn load_config() -> (ServerConfig, DatabaseConfig) {
    match AppConfig::load_and_validate() {
        Ok(cfg) => (cfg.server, cfg.database),
        Err(e) => {
            warn!(error = %e, "config file unavailable, using environment");
            let defaults = ServerConfig::default();
            let host = env::var("SERVER_HOST").unwrap_or(defaults.host);
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(defaults.port);
            (ServerConfig { host, port, ..defaults }, DatabaseConfig::from_env())
        }
    }
}

/// Connect and bring the schema up to date.
pub async fn prepare_db(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");
    Ok(db)
}

/// The full application for a ready connection.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(AppState { db }, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl_c");
    }
    info!(service = "limpieza-api", event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let (server_cfg, db_cfg) = load_config();
    let db = prepare_db(&db_cfg).await?;
    let app = build_app(db);

    let addr: SocketAddr = format!("{}:{}", server_cfg.host, server_cfg.port).parse()?;
    info!(%addr, "starting limpieza api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}
