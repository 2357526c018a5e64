use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

pub const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// Database settings read from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: directory holding the SQL migrations (default: "./migrations")
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub pool: DatabaseConfig,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        Self::from_values(
            url,
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("MIGRATIONS_PATH").ok(),
        )
    }

    fn from_values(
        url: String,
        max_connections: Option<String>,
        migrations_path: Option<String>,
    ) -> anyhow::Result<Self> {
        let mut pool = DatabaseConfig::new(url);
        if let Some(raw) = max_connections.filter(|v| !v.trim().is_empty()) {
            let max = raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?;
            pool = pool.with_max_connections(max);
        }

        Ok(Self {
            pool,
            migrations_path: migrations_path
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }
}

/// Connects the pool and brings the schema up to date.
///
/// # Errors
/// Fails if the database is unreachable or a migration cannot be applied.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&settings.pool)
        .await
        .context("could not connect to the database")?;
    run_migrations(&pool, &settings.migrations_path)
        .await
        .context("could not apply migrations")?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "postgres://localhost/catalog";

    #[test]
    fn should_apply_defaults() {
        let settings = DatabaseSettings::from_values(URL.to_string(), None, None).unwrap();
        assert_eq!(settings.pool.connection_string, URL);
        assert_eq!(settings.pool.max_connections, DatabaseConfig::DEFAULT_MAX_CONNECTIONS);
        assert_eq!(settings.migrations_path, "./migrations");
    }

    #[test]
    fn should_read_overrides() {
        let settings = DatabaseSettings::from_values(
            URL.to_string(),
            Some("12".to_string()),
            Some("/srv/migrations".to_string()),
        )
        .unwrap();
        assert_eq!(settings.pool.max_connections, 12);
        assert_eq!(settings.migrations_path, "/srv/migrations");
    }

    #[test]
    fn should_reject_non_numeric_pool_size() {
        let result =
            DatabaseSettings::from_values(URL.to_string(), Some("many".to_string()), None);
        assert!(result.is_err());
    }
}
