use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, server::ServerConfig, tracing::LogLevel,
};
use database::postgres::PostgresConfig;
use domain_users::UserServiceConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub log_level: LogLevel,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub users: UserServiceConfig,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let log_level = LogLevel::from_env()?;
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let database = PostgresConfig::from_env()?; // Required - DATABASE_URL or DB_* parts
        let users = UserServiceConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            environment,
            log_level,
            server,
            database,
            users,
        })
    }
}
