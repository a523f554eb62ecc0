//! Site configuration.
//!
//! Values are layered: built-in defaults, then the bundled `assets/config.env`,
//! then `FOLIO_*` variables from the process environment (native builds, after
//! `.env` is loaded), and finally the base path baked in at build time.

use crate::error::{Result, SiteError};
use once_cell::sync::Lazy;
use tracing::Level;

/// Bundled config shipped with every build
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_BASE_PATH: &str = "/";
pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_MERMAID_URL: &str =
    "https://cdn.jsdelivr.net/npm/mermaid@11/dist/mermaid.esm.min.mjs";

const BASE_PATH_VAR: &str = "FOLIO_BASE_PATH";
const THEME_KEY_VAR: &str = "FOLIO_THEME_KEY";
const LOG_VAR: &str = "FOLIO_LOG";
const MERMAID_URL_VAR: &str = "FOLIO_MERMAID_URL";

static CONFIG: Lazy<SiteConfig> = Lazy::new(SiteConfig::load);

/// The process-wide configuration, resolved on first access.
pub fn config() -> &'static SiteConfig {
    &CONFIG
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_path: String,
    pub theme_key: String,
    pub log_level: Level,
    /// ES module mermaid is imported from. Relative values resolve against
    /// the base path so an offline build can ship its own copy in `assets/`.
    pub mermaid_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            log_level: Level::INFO,
            mermaid_url: DEFAULT_MERMAID_URL.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn load() -> Self {
        let mut config = match Self::from_env_text(BUNDLED_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to parse bundled config: {}", err);
                Self::default()
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        config.apply_overrides(|key| std::env::var(key).ok());

        if let Some(base) = option_env!("FOLIO_BASE_PATH") {
            config.base_path = normalize_base_path(base);
        }
        if !config.mermaid_url.contains("://") && !config.mermaid_url.starts_with('/') {
            config.mermaid_url = config.asset_url(&config.mermaid_url);
        }
        config
    }

    /// Parse `KEY=VALUE` lines on top of the defaults. Blank lines and `#`
    /// comments are skipped, unknown keys are ignored.
    pub fn from_env_text(text: &str) -> Result<Self> {
        let mut config = Self::default();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(SiteError::Config {
                    line: index + 1,
                    message: format!("expected KEY=VALUE, found {:?}", line),
                });
            };
            config
                .set(key.trim(), value.trim())
                .map_err(|message| SiteError::Config {
                    line: index + 1,
                    message,
                })?;
        }
        Ok(config)
    }

    /// Apply overrides from a variable lookup, typically the process
    /// environment. Invalid values are reported and skipped.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for key in [BASE_PATH_VAR, THEME_KEY_VAR, LOG_VAR, MERMAID_URL_VAR] {
            if let Some(value) = lookup(key)
                && let Err(message) = self.set(key, value.trim())
            {
                eprintln!("ignoring {}: {}", key, message);
            }
        }
    }

    /// URL for a static file served from the site's base path.
    pub fn asset_url(&self, name: &str) -> String {
        format!("{}{}", self.base_path, name.trim_start_matches('/'))
    }

    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            BASE_PATH_VAR => self.base_path = normalize_base_path(value),
            THEME_KEY_VAR => {
                if value.is_empty() {
                    return Err("theme key must not be empty".to_string());
                }
                self.theme_key = value.to_string();
            }
            LOG_VAR => {
                self.log_level = value
                    .parse::<Level>()
                    .map_err(|_| format!("unknown log level {:?}", value))?;
            }
            MERMAID_URL_VAR => {
                if value.is_empty() {
                    return Err("mermaid url must not be empty".to_string());
                }
                self.mermaid_url = value.to_string();
            }
            _ => {}
        }
        Ok(())
    }
}

/// Base paths always end with `/`; absolute ones also start with it.
/// Relative (`./`) and fully-qualified bases are kept as given.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_BASE_PATH.to_string();
    }
    let mut base = if trimmed.starts_with('/')
        || trimmed.starts_with("./")
        || trimmed.contains("://")
    {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };
    if !base.ends_with('/') {
        base.push('/');
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.base_path, "/");
        assert_eq!(config.theme_key, "theme");
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_bundled_config_parses() {
        let config = SiteConfig::from_env_text(BUNDLED_CONFIG).unwrap();
        assert_eq!(config.theme_key, "theme");
        assert!(config.base_path.ends_with('/'));
    }

    #[test]
    fn test_env_text_skips_comments_and_blank_lines() {
        let text = "# comment\n\nFOLIO_BASE_PATH = portfolio\nFOLIO_LOG=debug\nUNRELATED=1\n";
        let config = SiteConfig::from_env_text(text).unwrap();
        assert_eq!(config.base_path, "/portfolio/");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_env_text_rejects_malformed_line() {
        let err = SiteConfig::from_env_text("FOLIO_LOG=info\nnot a pair\n").unwrap_err();
        assert!(matches!(err, SiteError::Config { line: 2, .. }));
    }

    #[test]
    fn test_env_text_rejects_bad_level() {
        let err = SiteConfig::from_env_text("FOLIO_LOG=loud").unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("FOLIO_THEME_KEY", "site-theme"), ("FOLIO_LOG", "nope")]);
        let mut config = SiteConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.theme_key, "site-theme");
        // invalid override leaves the previous value alone
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "/");
        assert_eq!(normalize_base_path("/"), "/");
        assert_eq!(normalize_base_path("site"), "/site/");
        assert_eq!(normalize_base_path("/site"), "/site/");
        assert_eq!(normalize_base_path("./"), "./");
        assert_eq!(
            normalize_base_path("https://cdn.example.com/me"),
            "https://cdn.example.com/me/"
        );
    }

    #[test]
    fn test_mermaid_url_override() {
        let config = SiteConfig::from_env_text("FOLIO_MERMAID_URL=mermaid.esm.min.mjs").unwrap();
        assert_eq!(config.mermaid_url, "mermaid.esm.min.mjs");
        assert_eq!(SiteConfig::default().mermaid_url, DEFAULT_MERMAID_URL);
        assert!(SiteConfig::from_env_text("FOLIO_MERMAID_URL=").is_err());
    }

    /// `base_path` under `[web.app]` in Dioxus.toml, which the router serves from.
    fn router_base_path() -> Option<String> {
        include_str!("../Dioxus.toml")
            .lines()
            .map(str::trim)
            .find_map(|line| line.strip_prefix("base_path"))
            .and_then(|rest| rest.trim().strip_prefix('='))
            .map(|value| value.trim().trim_matches('"').to_string())
    }

    #[test]
    fn test_bundled_base_path_matches_router() {
        let router = router_base_path().expect("Dioxus.toml sets base_path");
        let bundled = SiteConfig::from_env_text(BUNDLED_CONFIG).unwrap();
        assert_eq!(bundled.base_path, normalize_base_path(&router));
    }

    #[test]
    fn test_asset_url() {
        let config = SiteConfig {
            base_path: "/portfolio/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.asset_url("home.jpg"), "/portfolio/home.jpg");
        assert_eq!(config.asset_url("/resume.pdf"), "/portfolio/resume.pdf");
    }
}
