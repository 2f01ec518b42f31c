use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Redis connection URL for the durable key-value store
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Vision analysis API key
    pub vision_api_key: String,

    /// Vision analysis API base URL
    #[serde(default = "default_vision_api_url")]
    pub vision_api_url: String,

    /// Shopping search API key
    pub shopping_api_key: String,

    /// Shopping search API base URL
    #[serde(default = "default_shopping_api_url")]
    pub shopping_api_url: String,

    /// Favorites backend base URL
    #[serde(default = "default_favorites_api_url")]
    pub favorites_api_url: String,

    /// Bearer token for the authenticated favorites backend
    #[serde(default)]
    pub favorites_api_token: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_vision_api_url() -> String {
    "https://vision.moebelscout.app".to_string()
}

fn default_shopping_api_url() -> String {
    "https://shopping.moebelscout.app".to_string()
}

fn default_favorites_api_url() -> String {
    "https://account.moebelscout.app".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
