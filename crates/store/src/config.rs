//! Store endpoint configuration.

use anyhow::Context;

/// Environment variable naming the document service base URL.
pub const STORE_URL_VAR: &str = "LARDER_STORE_URL";
/// Environment variable carrying the optional bearer token.
pub const STORE_TOKEN_VAR: &str = "LARDER_STORE_TOKEN";

/// Connection settings for the hosted document service.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: Some(token.into()),
        }
    }

    /// Read the store endpoint from the environment.
    ///
    /// `LARDER_STORE_URL` is required. `LARDER_STORE_TOKEN` is optional;
    /// dev deployments of the service run open.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var(STORE_URL_VAR)
            .with_context(|| format!("{STORE_URL_VAR} is not set"))?;
        let token = std::env::var(STORE_TOKEN_VAR).ok();
        Ok(Self { base_url, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test covers all env states; splitting it would race on the
    // process-wide variables.
    #[test]
    fn from_env_reads_url_and_optional_token() {
        unsafe {
            std::env::remove_var(STORE_URL_VAR);
            std::env::remove_var(STORE_TOKEN_VAR);
        }
        assert!(StoreConfig::from_env().is_err());

        unsafe {
            std::env::set_var(STORE_URL_VAR, "http://localhost:9005");
        }
        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:9005");
        assert!(config.token.is_none());

        unsafe {
            std::env::set_var(STORE_TOKEN_VAR, "dev-token");
        }
        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config.token.as_deref(), Some("dev-token"));

        unsafe {
            std::env::remove_var(STORE_URL_VAR);
            std::env::remove_var(STORE_TOKEN_VAR);
        }
    }
}
