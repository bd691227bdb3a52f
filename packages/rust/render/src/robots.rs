//! robots.txt body.

use zfishdocs_shared::SiteConfig;

/// Crawlers granted an explicit allow-all block.
const NAMED_AGENTS: [&str; 7] = [
    "Googlebot",
    "Googlebot-Image",
    "OAI-SearchBot",
    "ChatGPT-User",
    "GPTBot",
    "ClaudeBot",
    "PerplexityBot",
];

/// Render robots.txt: one `Allow: /` block per named crawler, a wildcard
/// block that also opens the preview-image endpoints, and the sitemap
/// pointer.
pub fn render_robots(config: &SiteConfig) -> String {
    let mut out = String::new();
    for agent in NAMED_AGENTS {
        out.push_str(&format!("User-agent: {agent}\nAllow: /\n\n"));
    }
    out.push_str("User-agent: *\nAllow: /\nAllow: /api/og/\nAllow: /api/twitter-og/\n\n");
    out.push_str(&format!("Sitemap: {}/sitemap\n", config.site.base_url));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_at_the_sitemap() {
        let body = render_robots(&SiteConfig::default());
        assert!(body.contains("Sitemap: https://zfish-devdocs.vercel.app/sitemap"));
    }

    #[test]
    fn lists_every_named_crawler_and_a_wildcard() {
        let body = render_robots(&SiteConfig::default());
        for agent in NAMED_AGENTS {
            assert!(body.contains(&format!("User-agent: {agent}\nAllow: /\n")));
        }
        assert!(body.contains("User-agent: *"));
        assert!(body.contains("Allow: /api/twitter-og/"));
    }

    #[test]
    fn preview_allows_belong_to_the_wildcard_block_only() {
        let body = render_robots(&SiteConfig::default());
        assert_eq!(body.matches("Allow: /api/og/").count(), 1);
        assert_eq!(body.matches("Allow: /api/twitter-og/").count(), 1);
        for agent in NAMED_AGENTS {
            assert!(
                body.contains(&format!("User-agent: {agent}\nAllow: /\n\n")),
                "named block for {agent} should carry a single allow"
            );
        }
        assert!(body.contains("User-agent: *\nAllow: /\nAllow: /api/og/\nAllow: /api/twitter-og/\n"));
    }
}
