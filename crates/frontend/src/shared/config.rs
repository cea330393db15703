use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the REST API, without a trailing slash
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// localStorage key holding the token
    pub token_key: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:9000/api"

[session]
token_key = "token"
"#;

/// Load configuration
///
/// Order:
/// 1. Embedded default config
/// 2. `ARTICLES_API_BASE` set at build time overrides `api.base_url`
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    let config = parse_config(DEFAULT_CONFIG, option_env!("ARTICLES_API_BASE"))?;
    log::info!("API base: {}", config.api.base_url);
    Ok(config)
}

fn parse_config(source: &str, api_base_override: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(source)?;
    if let Some(base) = api_base_override.map(str::trim).filter(|b| !b.is_empty()) {
        config.api.base_url = base.to_string();
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    Ok(config)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:9000/api".to_string(),
            },
            session: SessionConfig {
                token_key: "token".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_api_base_override() {
        let config = parse_config(DEFAULT_CONFIG, Some("https://example.com/api/")).unwrap();
        assert_eq!(config.api.base_url, "https://example.com/api");
        assert_eq!(config.session.token_key, "token");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = parse_config(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/api");
    }

    #[test]
    fn test_invalid_config_fails() {
        assert!(parse_config("[api]\nbase_url = 1", None).is_err());
    }
}
