use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::clock::{Clock, SystemClock};

use crate::{routes, state::ServerState};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// `config.toml` (or `CONFIG_PATH`) when present and valid, otherwise the
/// `SERVER_HOST` / `SERVER_PORT` / `DATABASE_URL` environment.
pub fn load_config() -> anyhow::Result<AppConfig> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file unavailable, using environment");
            AppConfig::from_env()
        }
    }
}

pub fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Router over `db` with every layer applied.
pub fn build_app(db: DatabaseConnection, clock: Arc<dyn Clock>) -> Router {
    routes::build_router(ServerState::new(db, clock), build_cors())
}

/// Serve `app` on an already bound listener until the listener fails.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app).await?;
    Ok(())
}

/// Public entry: load configuration and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    let cfg = load_config()?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        models::db::migrate(&db).await?;
        info!(event = "migrations_applied", "database schema up to date");
    }

    let app = build_app(db, Arc::new(SystemClock));
    let addr = bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "starting server");
    serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_joins_host_and_port() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 8000;
        assert_eq!(bind_addr(&cfg).unwrap(), "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn bind_addr_rejects_garbage_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(bind_addr(&cfg).is_err());
    }
}
