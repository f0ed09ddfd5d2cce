use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::core::tags::TagMatchStrategy;
use crate::models::MatchPoints;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub store: StoreSettings,
    pub collection: CollectionSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub recommend: RecommendSettings,
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
pub struct StoreSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSettings {
    pub member_profiles: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    /// L2 tier is skipped when unset
    pub redis_url: Option<String>,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub points: PointsConfig,
    #[serde(default)]
    pub tag_matching: TagMatchStrategy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointsConfig {
    #[serde(default = "default_want_points")]
    pub want: u32,
    #[serde(default = "default_give_points")]
    pub give: u32,
    #[serde(default = "default_industry_points")]
    pub industry: u32,
    #[serde(default = "default_rank_points")]
    pub rank: u32,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            want: default_want_points(),
            give: default_give_points(),
            industry: default_industry_points(),
            rank: default_rank_points(),
        }
    }
}

impl From<&PointsConfig> for MatchPoints {
    fn from(value: &PointsConfig) -> Self {
        MatchPoints {
            want: value.want,
            give: value.give,
            industry: value.industry,
            rank: value.rank,
        }
    }
}

fn default_want_points() -> u32 { 25 }
fn default_give_points() -> u32 { 25 }
fn default_industry_points() -> u32 { 10 }
fn default_rank_points() -> u32 { 10 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendSettings {
    pub default_limit: Option<i64>,
    pub max_limit: Option<i64>,
    pub candidate_pool_size: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

/// Log line layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    #[default]
    Json,
    Pretty,
    Compact,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MATCHGATE)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATCHGATE__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        apply_secret_overrides(settings)?.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("MATCHGATE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Let deployment secrets come from plain env vars
fn apply_secret_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(endpoint) = env::var("MATCHGATE_STORE_ENDPOINT") {
        builder = builder.set_override("store.endpoint", endpoint)?;
    }
    if let Ok(api_key) = env::var("MATCHGATE_STORE_API_KEY") {
        builder = builder.set_override("store.api_key", api_key)?;
    }
    if let Ok(redis_url) = env::var("REDIS_URL") {
        builder = builder.set_override("cache.redis_url", redis_url)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const MINIMAL: &str = r#"
        [server]
        host = "0.0.0.0"
        port = 8080

        [store]
        endpoint = "https://store.test/v1"
        api_key = "key"
        project_id = "project"
        database_id = "db"

        [collection]
        member_profiles = "members"
    "#;

    #[test]
    fn test_default_points() {
        let points = MatchPoints::from(&PointsConfig::default());
        assert_eq!(points, MatchPoints::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_file() {
        let source = format!("{}\n[logging]\nformat = \"pretty\"\n", MINIMAL);
        let settings: Settings = Config::builder()
            .add_source(File::from_str(&source, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.logging.format, LogFormat::Pretty);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_minimal_file_uses_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(MINIMAL, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.scoring.tag_matching, TagMatchStrategy::Substring);
        assert_eq!(settings.scoring.points.want, 25);
        assert!(settings.cache.redis_url.is_none());
        assert!(settings.recommend.default_limit.is_none());
    }

    #[test]
    fn test_scoring_overrides() {
        let source = format!(
            "{}\n[scoring]\ntag_matching = \"exact\"\n[scoring.points]\nindustry = 20\n",
            MINIMAL
        );
        let settings: Settings = Config::builder()
            .add_source(File::from_str(&source, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.scoring.tag_matching, TagMatchStrategy::Exact);
        assert_eq!(settings.scoring.points.industry, 20);
        assert_eq!(settings.scoring.points.give, 25);
    }
}
