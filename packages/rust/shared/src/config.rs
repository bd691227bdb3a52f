//! Site configuration for the ZFish docs server.
//!
//! Config lives in a `zfishdocs.toml` file next to the deployment.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, ZfishDocsError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "zfishdocs.toml";

// ---------------------------------------------------------------------------
// Config structs (matching zfishdocs.toml schema)
// ---------------------------------------------------------------------------

/// Top-level site config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site identity and SEO metadata.
    #[serde(default)]
    pub site: SiteMeta,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Outbound links shown in the header and footer.
    #[serde(default)]
    pub links: LinksConfig,
}

/// `[site]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Canonical base URL used in the sitemap, robots policy, and meta tags.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Library name shown in the header brand.
    #[serde(default = "default_name")]
    pub name: String,

    /// Short tagline shown next to the brand and in preview images.
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Long description used in meta tags.
    #[serde(default = "default_description")]
    pub description: String,

    /// Documented library version, shown as a header badge.
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            name: default_name(),
            tagline: default_tagline(),
            description: default_description(),
            version: default_version(),
        }
    }
}

fn default_base_url() -> String {
    "https://zfish-devdocs.vercel.app".into()
}
fn default_name() -> String {
    "ZFish".into()
}
fn default_tagline() -> String {
    "Ultra-Light CLI Framework for Rust".into()
}
fn default_description() -> String {
    "Beautiful, zero-dependency CLI framework for Rust with colors, progress bars, \
     tables, and more."
        .into()
}
fn default_version() -> String {
    "0.1.10".into()
}

/// `[server]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP listener.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Port for the HTTP listener.
    #[serde(default = "default_port")]
    pub port: u16,

    /// `max-age` (seconds) for Cache-Control on robots/sitemap responses.
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            cache_max_age: default_cache_max_age(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    3000
}
fn default_cache_max_age() -> u64 {
    3600
}

/// `[links]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// GitHub repository of the documented library.
    #[serde(default = "default_github")]
    pub github: String,

    /// crates.io listing.
    #[serde(default = "default_crates_io")]
    pub crates_io: String,

    /// docs.rs root for the API reference.
    #[serde(default = "default_docs_rs")]
    pub docs_rs: String,

    /// Public roadmap page.
    #[serde(default = "default_roadmap")]
    pub roadmap: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            github: default_github(),
            crates_io: default_crates_io(),
            docs_rs: default_docs_rs(),
            roadmap: default_roadmap(),
        }
    }
}

fn default_github() -> String {
    "https://github.com/JeetKarena/ZFish".into()
}
fn default_crates_io() -> String {
    "https://crates.io/crates/zfish".into()
}
fn default_docs_rs() -> String {
    "https://docs.rs/zfish/latest/zfish/".into()
}
fn default_roadmap() -> String {
    "https://sprinkle-toque-13b.notion.site/ZFish-29d4eaaebc9d80bd82f3c27833a92232".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Default config file path (`zfishdocs.toml` in the working directory).
pub fn default_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Load the site config. Returns defaults if the file does not exist.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(SiteConfig::default());
    }

    load_config_from(&path)
}

/// Load the site config from a specific file path.
#[tracing::instrument]
pub fn load_config_from(path: &Path) -> Result<SiteConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ZfishDocsError::io(path, e))?;

    let config: SiteConfig = toml::from_str(&content).map_err(|e| {
        ZfishDocsError::config(format!("failed to parse {}: {e}", path.display()))
    })?;

    validate(&config)?;
    Ok(config)
}

/// Write a default config file at `path`. Returns the path for convenience.
pub fn init_config_at(path: &Path) -> Result<PathBuf> {
    let config = SiteConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| ZfishDocsError::config(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ZfishDocsError::io(path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path.to_path_buf())
}

/// Check that the configured base URL parses as an absolute URL without a
/// trailing slash (sitemap paths are joined with a plain `/`).
fn validate(config: &SiteConfig) -> Result<()> {
    let base = &config.site.base_url;

    Url::parse(base)
        .map_err(|e| ZfishDocsError::config(format!("invalid base_url '{base}': {e}")))?;

    if base.ends_with('/') {
        return Err(ZfishDocsError::config(format!(
            "base_url '{base}' must not end with a trailing slash"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = SiteConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("base_url"));
        assert!(toml_str.contains("zfish-devdocs.vercel.app"));
    }

    #[test]
    fn config_roundtrip() {
        let config = SiteConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: SiteConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.server.port, 3000);
        assert_eq!(parsed.site.name, "ZFish");
        assert_eq!(parsed.site.version, "0.1.10");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[server]
port = 8080

[site]
name = "ZFish"
"#;
        let config: SiteConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.site.base_url, "https://zfish-devdocs.vercel.app");
    }

    #[test]
    fn trailing_slash_base_url_rejected() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://docs.example.com/".into();
        let result = validate(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("trailing slash"));
    }

    #[test]
    fn garbage_base_url_rejected() {
        let mut config = SiteConfig::default();
        config.site.base_url = "not a url".into();
        assert!(validate(&config).is_err());
    }
}
