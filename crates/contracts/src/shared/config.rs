use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: EndpointConfig,
    pub download: DownloadConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Полный URL ручки генерации
    pub url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    /// Имя файла, под которым браузер сохраняет ответ
    pub filename: String,
    /// Статус после успешного скачивания
    pub success_notice: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[endpoint]
url = "http://188.245.180.200:9494/generate-ad"

[download]
filename = "generated_ads.csv"
success_notice = "CSV file downloaded."
"#;

/// Load the embedded configuration.
///
/// The browser bundle has no config file or environment to read, so the
/// values are fixed at build time.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    log::debug!("Loaded config, endpoint: {}", config.endpoint.url);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.endpoint.url, "http://188.245.180.200:9494/generate-ad");
        assert_eq!(config.download.filename, "generated_ads.csv");
    }

    #[test]
    fn test_default_config_success_notice() {
        let config = load_config().unwrap();
        assert_eq!(config.download.success_notice, "CSV file downloaded.");
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[endpoint]\nurl = \"http://x\"\n");
        let err = ConfigError::from(result.unwrap_err());
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
