use config::{Config, Environment};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_USER_AGENT: &str = "tecnoplant-admin/0.1";

/// 配置加载错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("cannot load clients file {path}: {reason}")]
    ClientsFile { path: PathBuf, reason: String },
}

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub geocoding: GeocodingConfig,
    pub clients_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 上游订单接口
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub orders_url: String,
    pub token: SecretToken,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

/// Bearer 凭证, Debug 输出时隐藏
#[derive(Clone, PartialEq, Eq)]
pub struct SecretToken(String);

impl SecretToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretToken(***)")
    }
}

/// 环境变量的扁平视图 (SERVER_HOST -> server_host)
#[derive(Debug, Deserialize)]
struct EnvSettings {
    server_host: String,
    server_port: u16,
    upstream_orders_url: Option<String>,
    upstream_token: Option<String>,
    upstream_timeout_secs: u64,
    geocoding_url: String,
    geocoding_user_agent: String,
    geocoding_timeout_secs: u64,
    clients_file: Option<PathBuf>,
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::default().try_parsing(true))
    }

    pub fn load(env: Environment) -> Result<Self, ConfigError> {
        let settings: EnvSettings = Config::builder()
            .set_default("server_host", "127.0.0.1")?
            .set_default("server_port", 8080_i64)?
            .set_default("upstream_timeout_secs", 15_i64)?
            .set_default("geocoding_url", DEFAULT_GEOCODING_URL)?
            .set_default("geocoding_user_agent", DEFAULT_USER_AGENT)?
            .set_default("geocoding_timeout_secs", 10_i64)?
            .add_source(env)
            .build()?
            .try_deserialize()?;

        let orders_url = non_blank(settings.upstream_orders_url)
            .ok_or(ConfigError::Missing("UPSTREAM_ORDERS_URL"))?;
        let token = non_blank(settings.upstream_token)
            .ok_or(ConfigError::Missing("UPSTREAM_TOKEN"))?;

        Ok(Self {
            server: ServerConfig {
                host: settings.server_host,
                port: settings.server_port,
            },
            upstream: UpstreamConfig {
                orders_url,
                token: SecretToken::new(token),
                timeout_secs: settings.upstream_timeout_secs,
            },
            geocoding: GeocodingConfig {
                base_url: settings.geocoding_url.trim_end_matches('/').to_string(),
                user_agent: settings.geocoding_user_agent,
                timeout_secs: settings.geocoding_timeout_secs,
            },
            clients_file: settings.clients_file,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
