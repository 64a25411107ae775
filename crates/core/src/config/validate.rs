use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Sitemap base URL is a non-empty http(s) URL without a trailing slash
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Sitemap validation; locations are built as "{base_url}/video/{id}"
    let base_url = &config.sitemap.base_url;
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "sitemap.base_url cannot be empty".to_string(),
        ));
    }
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(
            "sitemap.base_url must be an http(s) URL".to_string(),
        ));
    }
    if base_url.ends_with('/') {
        return Err(ConfigError::ValidationError(
            "sitemap.base_url must not end with '/'".to_string(),
        ));
    }

    Ok(())
}
