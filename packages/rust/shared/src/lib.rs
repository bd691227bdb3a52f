//! Shared types, error model, and configuration for the ZFish docs site.
//!
//! This crate is the foundation depended on by all other zfishdocs crates.
//! It provides:
//! - [`ZfishDocsError`] — the unified error type
//! - Domain types ([`NavEntry`], [`ExampleMeta`], [`ComponentMeta`], [`SitemapEntry`])
//! - Configuration ([`SiteConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    LinksConfig, ServerConfig, SiteConfig, SiteMeta, default_config_path, init_config_at,
    load_config, load_config_from,
};
pub use error::{Result, ZfishDocsError};
pub use types::{
    ApiModule, ChangeFrequency, CodeSection, ComponentMeta, Difficulty, ExampleMeta, NavEntry,
    SidebarSection, SitemapEntry,
};
