use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub finnhub_base_url: String,
    /// Saved into the credential store at startup if nothing is stored yet.
    pub finnhub_api_key: Option<String>,
    pub data_dir: PathBuf,
    pub popup_dir: PathBuf,
    pub server_port: u16,
    pub quote_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let server_port = var_or("SERVER_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("SERVER_PORT: {e}")))?;

        let quote_timeout_secs = var_or("QUOTE_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map_err(|e| AppError::Config(format!("QUOTE_TIMEOUT_SECS: {e}")))?;

        let finnhub_base_url = var_or("FINNHUB_BASE_URL", "https://finnhub.io/api/v1");
        if !finnhub_base_url.starts_with("http://") && !finnhub_base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "FINNHUB_BASE_URL must be an http(s) URL: {finnhub_base_url}"
            )));
        }

        Ok(Self {
            finnhub_base_url,
            finnhub_api_key: lookup("FINNHUB_API_KEY").filter(|k| !k.trim().is_empty()),
            data_dir: PathBuf::from(var_or("DATA_DIR", "data")),
            popup_dir: PathBuf::from(var_or("POPUP_DIR", "popup")),
            server_port,
            quote_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.finnhub_base_url, "https://finnhub.io/api/v1");
        assert_eq!(cfg.server_port, 3001);
        assert_eq!(cfg.quote_timeout_secs, 10);
        assert_eq!(cfg.data_dir, PathBuf::from("data"));
        assert!(cfg.finnhub_api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("SERVER_PORT", "8080"),
            ("FINNHUB_API_KEY", "abc123"),
            ("FINNHUB_BASE_URL", "http://localhost:9000"),
        ]))
        .unwrap();
        assert_eq!(cfg.server_port, 8080);
        assert_eq!(cfg.finnhub_api_key.as_deref(), Some("abc123"));
        assert_eq!(cfg.finnhub_base_url, "http://localhost:9000");
    }

    #[test]
    fn test_blank_seed_key_ignored() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("FINNHUB_API_KEY", "   ")])).unwrap();
        assert!(cfg.finnhub_api_key.is_none());
    }

    #[test]
    fn test_bad_port_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("SERVER_PORT", "http")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)), "got {err}");
    }

    #[test]
    fn test_bad_base_url_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("FINNHUB_BASE_URL", "finnhub.io")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
