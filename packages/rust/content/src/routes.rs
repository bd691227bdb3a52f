//! The sitemap route table: every crawlable documentation path, exactly once.

use std::sync::LazyLock;

use zfishdocs_shared::{ChangeFrequency, SitemapEntry};

use crate::components::component_catalog;
use crate::examples::example_catalog;

fn route(path: &str, change_frequency: ChangeFrequency, priority_tenths: u8) -> SitemapEntry {
    SitemapEntry {
        path: path.into(),
        change_frequency,
        priority_tenths,
    }
}

static SITEMAP_ROUTES: LazyLock<Vec<SitemapEntry>> = LazyLock::new(|| {
    use ChangeFrequency::{Monthly, Weekly};

    let mut routes = vec![
        route("", Weekly, 10),
        route("getting-started", Monthly, 8),
        route("components", Monthly, 8),
        route("examples", Weekly, 9),
        route("api", Monthly, 7),
    ];

    // Component pages come from the catalog so the sitemap can never drift
    // from the rendered site.
    for component in component_catalog() {
        routes.push(route(
            &format!("components/{}", component.slug),
            Monthly,
            6,
        ));
    }

    for example in example_catalog() {
        routes.push(route(&format!("examples/{}", example.slug), Monthly, 7));
    }

    routes
});

/// Every sitemap entry, in crawl-priority order (hubs first, leaves after).
pub fn sitemap_routes() -> &'static [SitemapEntry] {
    &SITEMAP_ROUTES
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_path_listed_exactly_once() {
        let routes = sitemap_routes();
        let unique: HashSet<&str> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(unique.len(), routes.len(), "duplicate sitemap path");
    }

    #[test]
    fn home_page_is_top_priority() {
        let home = &sitemap_routes()[0];
        assert_eq!(home.path, "");
        assert_eq!(home.priority(), "1");
        assert_eq!(home.change_frequency, ChangeFrequency::Weekly);
    }

    #[test]
    fn covers_all_catalog_pages() {
        let routes = sitemap_routes();
        // 5 hubs + 7 components + 18 examples
        assert_eq!(routes.len(), 30);
        assert!(routes.iter().any(|r| r.path == "components/terminal"));
        assert!(routes.iter().any(|r| r.path == "examples/18_manual_table_drawing"));
    }
}
