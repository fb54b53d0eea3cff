//! # Site configuration — `portfolio.toml`
//!
//! Defines the TOML configuration file shipped alongside the client
//! (filename: [`SiteConfig::filename`] = `"portfolio.toml"`). It carries the
//! backend origin and the personal details rendered on the public pages.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"   # backend REST origin
//!
//! [site]
//! name = "Portfolio"
//! owner = "Jane Doe"
//! title = "Full-Stack Developer"
//! email = "jane@example.com"
//! github_url = "https://github.com/janedoe"
//! linkedin_url = "https://linkedin.com/in/janedoe"
//! ```
//!
//! All sections derive `Default`, so a missing or empty config file is
//! equivalent to the default configuration (local backend, placeholder
//! identity).

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `portfolio.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteInfo,
}

/// Backend API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin the API client prefixes onto every endpoint path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Personal details rendered on the public pages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub linkedin_url: String,
}

impl SiteConfig {
    /// Create a config pointing at the given backend origin.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
            site: SiteInfo::default(),
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portfolio.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_partial_toml_keeps_defaulted_sections() {
        let config = SiteConfig::from_toml("[site]\nowner = \"Jane Doe\"\n").unwrap();
        assert_eq!(config.site.owner, "Jane Doe");
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = SiteConfig::new("https://api.example.com".to_string());
        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml(&text).unwrap(), config);
    }
}
