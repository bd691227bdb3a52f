//! Renderers for the ZFish documentation site.
//!
//! Every function here is a pure transformation from static content tables
//! (and, for preview images, request parameters) to response bodies. Nothing
//! touches the filesystem or network; determinism is the contract.

pub mod html;
pub mod layout;
pub mod og;
pub mod pages;
pub mod robots;
pub mod sitemap;
pub mod widgets;

pub use og::{
    DEFAULT_DESCRIPTION, DEFAULT_TITLE, OG_HEIGHT, OG_WIDTH, PreviewParams, SVG_CONTENT_TYPE,
    TWITTER_HEIGHT, TWITTER_WIDTH, render_og_image, render_twitter_image,
};
pub use robots::render_robots;
pub use sitemap::render_sitemap;
