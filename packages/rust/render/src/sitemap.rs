//! XML sitemap built from the static route table.

use chrono::{DateTime, SecondsFormat, Utc};
use zfishdocs_content::sitemap_routes;
use zfishdocs_shared::SiteConfig;

use crate::html::escape_text;

/// Render the sitemap. `now` becomes every entry's `lastmod`, formatted as
/// UTC RFC 3339 with millisecond precision.
pub fn render_sitemap(config: &SiteConfig, now: DateTime<Utc>) -> String {
    let lastmod = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let base = &config.site.base_url;

    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
    );
    for route in sitemap_routes() {
        let loc = if route.path.is_empty() {
            base.clone()
        } else {
            format!("{base}/{}", route.path)
        };
        xml.push_str(&format!(
            "<url><loc>{}</loc><lastmod>{lastmod}</lastmod><changefreq>{}</changefreq><priority>{}</priority></url>",
            escape_text(&loc),
            route.change_frequency,
            route.priority()
        ));
    }
    xml.push_str("</urlset>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn render() -> String {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        render_sitemap(&SiteConfig::default(), now)
    }

    #[test]
    fn home_entry_has_top_priority() {
        let xml = render();
        assert!(xml.contains(
            "<loc>https://zfish-devdocs.vercel.app</loc><lastmod>2025-06-01T12:00:00.000Z</lastmod><changefreq>weekly</changefreq><priority>1</priority>"
        ));
    }

    #[test]
    fn every_route_appears_exactly_once() {
        let xml = render();
        for route in sitemap_routes() {
            let loc = if route.path.is_empty() {
                "<loc>https://zfish-devdocs.vercel.app</loc>".to_string()
            } else {
                format!("<loc>https://zfish-devdocs.vercel.app/{}</loc>", route.path)
            };
            assert_eq!(xml.matches(&loc).count(), 1, "route {}", route.path);
        }
    }

    #[test]
    fn output_is_wellformed_enough() {
        let xml = render();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.ends_with("</urlset>"));
        assert_eq!(
            xml.matches("<url>").count(),
            sitemap_routes().len()
        );
    }
}
