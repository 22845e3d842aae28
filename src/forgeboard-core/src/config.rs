use serde::{Deserialize, Serialize};

/// Base addresses for the Forgeboard API.
///
/// Resolved once at process start and handed to the client; nothing else in
/// the workspace reads the process environment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Server-to-server address, reachable only inside the deployment.
    #[serde(default)]
    pub internal_api_url: Option<String>,
    /// Publicly routable address.
    #[serde(default)]
    pub public_api_url: Option<String>,
}

impl Config {
    /// Read both base addresses from `INTERNAL_API_BASE_URL` and
    /// `PUBLIC_API_BASE_URL`. Unset or empty variables count as absent.
    pub fn from_env() -> Self {
        Self {
            internal_api_url: env_nonempty("INTERNAL_API_BASE_URL"),
            public_api_url: env_nonempty("PUBLIC_API_BASE_URL"),
        }
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Configuration pointing every request at a single address.
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            internal_api_url: None,
            public_api_url: Some(url.into()),
        }
    }

    /// The address requests should target: the internal one when set,
    /// otherwise the public one. `None` disables all network calls.
    pub fn base_url(&self) -> Option<&str> {
        self.internal_api_url
            .as_deref()
            .or(self.public_api_url.as_deref())
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_prefers_internal() {
        let config = Config {
            internal_api_url: Some("http://api.internal:8000".to_string()),
            public_api_url: Some("https://api.example.com".to_string()),
        };
        assert_eq!(config.base_url(), Some("http://api.internal:8000"));
    }

    #[test]
    fn test_base_url_falls_back_to_public() {
        let config = Config::with_base_url("https://api.example.com");
        assert_eq!(config.base_url(), Some("https://api.example.com"));
    }

    #[test]
    fn test_base_url_absent_when_unset() {
        assert!(Config::default().base_url().is_none());
    }
}
