//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_database_url_is_an_error() {
        // Serialize env mutation against other tests in this module
        let _guard = ENV_LOCK.lock().unwrap();
        let saved = std::env::var("DATABASE_URL").ok();
        unsafe { std::env::remove_var("DATABASE_URL") };
        assert!(Config::from_env().is_err());
        restore_var("DATABASE_URL", saved);
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        let saved_db = std::env::var("DATABASE_URL").ok();
        let saved_port = std::env::var("HTTP_PORT").ok();
        let saved_env = std::env::var("ENVIRONMENT").ok();
        unsafe {
            std::env::set_var("DATABASE_URL", "postgres://localhost/lodge");
            std::env::remove_var("HTTP_PORT");
            std::env::remove_var("ENVIRONMENT");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.environment, "development");
        restore_var("DATABASE_URL", saved_db);
        restore_var("HTTP_PORT", saved_port);
        restore_var("ENVIRONMENT", saved_env);
    }

    // Put the process env back the way we found it so tests outside this
    // module (e.g. #[sqlx::test]) still see DATABASE_URL.
    fn restore_var(key: &str, value: Option<String>) {
        unsafe {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }

    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
}
