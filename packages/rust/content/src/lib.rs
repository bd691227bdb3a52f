//! Static content catalogs for the ZFish documentation site.
//!
//! Every table here is defined once at process start and immutable for the
//! life of the process. The renderers in `zfishdocs-render` consume these
//! tables; nothing mutates them at runtime.

pub mod api;
pub mod components;
pub mod examples;
pub mod nav;
pub mod routes;

pub use api::api_modules;
pub use components::{component_catalog, find_component};
pub use examples::{example_catalog, find_example};
pub use nav::{components_menu, header_links, sidebar};
pub use routes::sitemap_routes;
