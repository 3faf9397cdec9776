use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
///
/// All settings can be configured via environment variables with the
/// `MOODSHELF_` prefix. For example: `MOODSHELF_SERVER__PORT=8090`,
/// `MOODSHELF_CATALOG__DIR=/var/lib/moodshelf`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Recommendation configuration
    #[serde(default)]
    pub recommend: RecommendConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding the four catalog CSV files
    #[serde(default = "default_catalog_dir")]
    pub dir: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: default_catalog_dir(),
        }
    }
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from("data")
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendConfig {
    /// Number of recommendations returned when the request does not ask
    /// for a specific count
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,

    /// Lower bound of the similarity display band
    #[serde(default = "default_display_floor")]
    pub display_floor: f32,

    /// Upper bound of the similarity display band
    #[serde(default = "default_display_ceiling")]
    pub display_ceiling: f32,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
            display_floor: default_display_floor(),
            display_ceiling: default_display_ceiling(),
        }
    }
}

fn default_top_n() -> usize {
    5
}

fn default_display_floor() -> f32 {
    60.0
}

fn default_display_ceiling() -> f32 {
    100.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

impl ServerConfig {
    /// Returns the socket address for binding the server
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables should be prefixed with `MOODSHELF_` and use
    /// double underscores for nested values:
    /// - `MOODSHELF_CATALOG__DIR` -> catalog.dir
    /// - `MOODSHELF_RECOMMEND__DEFAULT_TOP_N` -> recommend.default_top_n
    /// - `MOODSHELF_SERVER__PORT` -> server.port
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("MOODSHELF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
