use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;

pub mod domain;
pub mod infrastructure;

#[derive(Clone, Debug, Deserialize)]
pub struct ClienteleConfig {
    pub server: Server,
    pub storage: Storage,
    pub eventstore: Option<EventStore>,
    pub logger: Logger,
}

impl ClienteleConfig {
    /// デフォルト値、`clientele.toml`、環境変数の順に設定を読み込む
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(File::with_name("clientele").required(false))
    }

    pub fn load_from<S>(file: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("storage.backend", "memory")?
            .set_default("logger.level", "INFO")?
            .add_source(file)
            .add_source(Environment::with_prefix("CLIENTELE").separator("_"))
            .build()?
            .try_deserialize::<ClienteleConfig>()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
    pub tls: Option<Tls>,
}

/// PEM形式の証明書と秘密鍵
#[derive(Clone, Debug, Deserialize)]
pub struct Tls {
    pub cert: String,
    pub key: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Storage {
    pub backend: Backend,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Memory,
    EventStore,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EventStore {
    pub url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logger {
    pub level: Level,
}

#[derive(Clone, Debug, Deserialize)]
pub enum Level {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}
