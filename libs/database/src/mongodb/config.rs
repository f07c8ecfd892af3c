#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_first, env_parse_or};

/// MongoDB connection settings.
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "servicios")
///     .with_app_name("servicios-api");
///
/// // or, with the `config` feature
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MongoConfig {
    /// `mongodb://[username:password@]host[:port][/database][?options]`
    pub url: String,
    pub database: String,
    /// Reported to the server and shown in its logs
    pub app_name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    pub const DEFAULT_DATABASE: &'static str = "servicios";

    /// Uses the database named in the URL path, or [`Self::DEFAULT_DATABASE`].
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let database = database_from_url(&url).unwrap_or_else(|| Self::DEFAULT_DATABASE.to_string());
        Self::with_database(url, database)
    }

    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }

    pub fn with_pool_size(mut self, max_pool_size: u32, min_pool_size: u32) -> Self {
        self.max_pool_size = max_pool_size;
        self.min_pool_size = min_pool_size;
        self
    }

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
        Self::with_database("mongodb://localhost:27017", Self::DEFAULT_DATABASE)
    }
}

/// Database segment of a connection string, if any.
///
/// `mongodb://user:pw@host:27017/servicios?retryWrites=true` gives `servicios`.
fn database_from_url(url: &str) -> Option<String> {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let (_, path) = rest.split_once('/')?;
    let name = path.split('?').next().unwrap_or_default();

    (!name.is_empty()).then(|| name.to_string())
}

/// Environment variables:
/// - `MONGODB_URL`, `MONGO_URL` or `MONGO_URI_ENV` (required, first set wins)
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (default: URL path, then `servicios`)
/// - `MONGODB_APP_NAME`
/// - `MONGODB_MAX_POOL_SIZE` (100), `MONGODB_MIN_POOL_SIZE` (5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (10), `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_first(&["MONGODB_URL", "MONGO_URL", "MONGO_URI_ENV"]).ok_or_else(|| {
            ConfigError::MissingEnvVar("MONGODB_URL, MONGO_URL or MONGO_URI_ENV".to_string())
        })?;

        let mut config = match env_first(&["MONGODB_DATABASE", "MONGO_DATABASE"]) {
            Some(database) => Self::with_database(url, database),
            None => Self::new(url),
        };

        config.app_name = std::env::var("MONGODB_APP_NAME").ok();
        config.max_pool_size = env_parse_or("MONGODB_MAX_POOL_SIZE", config.max_pool_size)?;
        config.min_pool_size = env_parse_or("MONGODB_MIN_POOL_SIZE", config.min_pool_size)?;
        config.connect_timeout_secs =
            env_parse_or("MONGODB_CONNECT_TIMEOUT_SECS", config.connect_timeout_secs)?;
        config.server_selection_timeout_secs = env_parse_or(
            "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
            config.server_selection_timeout_secs,
        )?;

        Ok(config)
    }
}
