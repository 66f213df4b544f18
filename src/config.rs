use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
    #[serde(default = "default_hash_memory_kib")]
    pub hash_memory_kib: u32,
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
}

fn default_token_ttl_hours() -> i64 {
    24 * 7
}

fn default_hash_memory_kib() -> u32 {
    19 * 1024
}

fn default_hash_iterations() -> u32 {
    2
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

const DEV_JWT_SECRET: &str = "change-me-in-production";

impl Settings {
    /// Load configuration from defaults, files and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. Built-in defaults
    /// 2. `config/default.toml`
    /// 3. `config/local.toml` (development overrides)
    /// 4. Environment variables prefixed with `MATRIMONY__`
    /// 5. `JWT_SECRET`, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATRIMONY__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.auth.jwt_secret == DEV_JWT_SECRET
    }
}

fn environment() -> Environment {
    Environment::with_prefix("MATRIMONY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000_i64)?
        .set_default("auth.jwt_secret", DEV_JWT_SECRET)?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

/// Apply overrides from well-known, unprefixed environment variables
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(secret) = std::env::var("JWT_SECRET") {
        builder = builder.set_override("auth.jwt_secret", secret)?;
    }
    if let Ok(port) = std::env::var("PORT") {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}
