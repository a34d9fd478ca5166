#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_or_default};

/// MongoDB connection settings
///
/// Construct manually for tests, or load from the environment with the
/// `config` feature enabled.
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "store");
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string: mongodb://[username:password@]host[:port][/?options]
    pub url: String,

    /// Database to open after connecting
    pub database: String,

    /// Application name reported in server logs
    pub app_name: Option<String>,

    /// Connection pool bounds
    pub max_pool_size: u32,
    pub min_pool_size: u32,

    /// Timeouts in seconds
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Config pointing at `url` with the default database name
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Config pointing at `url` with an explicit database name
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    /// Set the application name reported to the server
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "store".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

/// Load MongoConfig from environment variables
///
/// - `MONGODB_URL` (required) - connection string
/// - `MONGODB_DATABASE` (required) - database name
/// - `MONGODB_APP_NAME` (optional) - application name for server logs
/// - `MONGODB_MAX_POOL_SIZE` (optional, default 100)
/// - `MONGODB_MIN_POOL_SIZE` (optional, default 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (optional, default 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (optional, default 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("MONGODB_URL")
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URL".to_string()))?;

        let database = std::env::var("MONGODB_DATABASE")
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_DATABASE".to_string()))?;

        let app_name = std::env::var("MONGODB_APP_NAME").ok();

        let max_pool_size = parse_env("MONGODB_MAX_POOL_SIZE", 100)?;
        let min_pool_size = parse_env("MONGODB_MIN_POOL_SIZE", 5)?;
        let connect_timeout_secs = parse_env("MONGODB_CONNECT_TIMEOUT_SECS", 10)?;
        let server_selection_timeout_secs = parse_env("MONGODB_SERVER_SELECTION_TIMEOUT_SECS", 30)?;

        Ok(Self {
            url,
            database,
            app_name,
            max_pool_size,
            min_pool_size,
            connect_timeout_secs,
            server_selection_timeout_secs,
        })
    }
}

#[cfg(feature = "config")]
fn parse_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    env_or_default(key, &default.to_string())
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_database() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "store_test");
        assert_eq!(config.url(), "mongodb://localhost:27017");
        assert_eq!(config.database(), "store_test");
        assert_eq!(config.max_pool_size, 100);
        assert_eq!(config.min_pool_size, 5);
    }

    #[test]
    fn test_with_app_name() {
        let config = MongoConfig::new("mongodb://localhost:27017").with_app_name("products-api");
        assert_eq!(config.app_name, Some("products-api".to_string()));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://mongo:27017")),
                ("MONGODB_DATABASE", Some("store")),
                ("MONGODB_MAX_POOL_SIZE", Some("25")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://mongo:27017");
                assert_eq!(config.database, "store");
                assert_eq!(config.max_pool_size, 25);
                assert_eq!(config.min_pool_size, 5);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_missing_url() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGODB_DATABASE", Some("store")),
            ],
            || {
                let result = MongoConfig::from_env();
                assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_bad_pool_size() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://mongo:27017")),
                ("MONGODB_DATABASE", Some("store")),
                ("MONGODB_MAX_POOL_SIZE", Some("not-a-number")),
            ],
            || {
                let result = MongoConfig::from_env();
                assert!(matches!(result, Err(ConfigError::ParseError { .. })));
            },
        );
    }
}
