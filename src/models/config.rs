use serde::Deserialize;

fn default_bind_address() -> String {
    "127.0.0.1:3001".to_string()
}

/// Configuration options for the InstantProof service, read from the
/// environment (`.env` supported via dotenvy).
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// SQLite database URL. When absent the service runs without
    /// persistence and serves bundled fallback data.
    #[serde(default)]
    pub database_url: Option<String>,
    /// API key for the news search provider. When absent the news adapter
    /// is skipped entirely.
    #[serde(default)]
    pub gnews_api_key: Option<String>,
    /// Public base URL used when building widget embed snippets without a
    /// request host.
    #[serde(default)]
    pub public_base_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    /// (`BIND_ADDRESS`, `DATABASE_URL`, `GNEWS_API_KEY`, `PUBLIC_BASE_URL`).
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config: ServerConfig = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:3001");
        assert!(config.database_url.is_none());
        assert!(config.gnews_api_key.is_none());
        assert!(config.public_base_url.is_none());
    }
}
