use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// Idle timeout and lifetime of the single in-memory connection. Replacing
/// that connection would drop the database with it.
pub const IN_MEMORY_KEEPALIVE: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// An in-memory SQLite database lives inside a single connection, so the
/// pool must never hold more than one or recycle it.
fn is_in_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if is_in_memory(&cfg.url) {
        opts.max_connections(1)
            .min_connections(1)
            .idle_timeout(IN_MEMORY_KEEPALIVE)
            .max_lifetime(IN_MEMORY_KEEPALIVE);
    } else {
        opts.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    opts
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    info!(backend = ?db.get_database_backend(), max_connections = cfg.max_connections, "database connected");
    Ok(db)
}

/// Apply all pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
    migration::Migrator::up(db, None).await?;
    info!("migrations applied");
    Ok(())
}

/// Fresh in-memory SQLite database with the schema applied.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migrate(&db).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_pool_keeps_its_only_connection() {
        let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
        let opts = connect_options(&cfg);
        assert_eq!(opts.get_max_connections(), Some(1));
        assert_eq!(opts.get_min_connections(), Some(1));
        assert_eq!(opts.get_idle_timeout(), Some(IN_MEMORY_KEEPALIVE));
        assert_eq!(opts.get_max_lifetime(), Some(IN_MEMORY_KEEPALIVE));
    }

    #[test]
    fn file_backed_pool_uses_configured_limits() {
        let cfg = DatabaseConfig { url: "sqlite://cityshops.db?mode=rwc".into(), max_connections: 7, ..Default::default() };
        let opts = connect_options(&cfg);
        assert_eq!(opts.get_max_connections(), Some(7));
        assert_eq!(opts.get_idle_timeout(), Some(Duration::from_secs(cfg.idle_timeout_secs)));
    }
}
