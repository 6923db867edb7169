use serde::{Deserialize, Serialize};

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "CLINIC_API_URL";

/// Settings for talking to the clinic backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub api_base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url`, without a trailing slash.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            api_base_url: base.trim_end_matches('/').to_string(),
        }
    }

    /// Apply an override value, ignoring blanks.
    pub fn with_override(self, value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => Self::with_base_url(v),
            None => self,
        }
    }

    /// Absolute URL for an endpoint path such as `/appointments/`.
    pub fn url(&self, path: &str) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}
