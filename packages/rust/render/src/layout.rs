//! The page shell: document head with SEO/social meta tags, header
//! navigation, optional docs sidebar, and footer.

use zfishdocs_content::{components_menu, header_links, sidebar};
use zfishdocs_shared::SiteConfig;

use crate::html::{encode_query_component, escape_attr, escape_text};

/// Per-page head metadata.
#[derive(Debug, Clone)]
pub struct PageHead {
    /// Document title (used verbatim in `<title>` and og:title).
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Site-relative path of the page, for the canonical URL.
    pub path: String,
}

impl PageHead {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            path: path.into(),
        }
    }
}

/// Render a full document without the docs sidebar (home page).
pub fn page(config: &SiteConfig, head: &PageHead, body: &str) -> String {
    render_document(config, head, body, false)
}

/// Render a full document in the docs layout (sidebar + constrained main).
pub fn docs_page(config: &SiteConfig, head: &PageHead, body: &str) -> String {
    render_document(config, head, body, true)
}

fn render_document(config: &SiteConfig, head: &PageHead, body: &str, with_sidebar: bool) -> String {
    let mut out = String::with_capacity(body.len() + 4096);

    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_text(&head.title)));
    out.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape_attr(&head.description)
    ));

    let canonical = format!("{}{}", config.site.base_url, head.path);
    out.push_str(&format!(
        "<link rel=\"canonical\" href=\"{}\">\n",
        escape_attr(&canonical)
    ));

    // Open Graph / Twitter cards point at the generated preview images.
    let og_image = format!(
        "{}/api/og?title={}&description={}",
        config.site.base_url,
        encode_query_component(&head.title),
        encode_query_component(&head.description)
    );
    let twitter_image = format!(
        "{}/api/twitter-og?title={}&description={}",
        config.site.base_url,
        encode_query_component(&head.title),
        encode_query_component(&head.description)
    );
    out.push_str(&format!(
        "<meta property=\"og:title\" content=\"{}\">\n",
        escape_attr(&head.title)
    ));
    out.push_str(&format!(
        "<meta property=\"og:description\" content=\"{}\">\n",
        escape_attr(&head.description)
    ));
    out.push_str(&format!(
        "<meta property=\"og:url\" content=\"{}\">\n",
        escape_attr(&canonical)
    ));
    out.push_str(&format!(
        "<meta property=\"og:site_name\" content=\"{}\">\n",
        escape_attr(&config.site.name)
    ));
    out.push_str("<meta property=\"og:type\" content=\"website\">\n");
    out.push_str(&format!(
        "<meta property=\"og:image\" content=\"{}\">\n",
        escape_attr(&og_image)
    ));
    out.push_str("<meta name=\"twitter:card\" content=\"summary_large_image\">\n");
    out.push_str(&format!(
        "<meta name=\"twitter:image\" content=\"{}\">\n",
        escape_attr(&twitter_image)
    ));

    out.push_str("<style>");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n<body>\n");

    render_header(&mut out, config);

    if with_sidebar {
        out.push_str("<div class=\"docs-shell\">\n");
        render_sidebar(&mut out);
        out.push_str("<main class=\"docs-main\">");
        out.push_str(body);
        out.push_str("</main>\n</div>\n");
    } else {
        out.push_str("<main>");
        out.push_str(body);
        out.push_str("</main>\n");
    }

    render_footer(&mut out, config);
    out.push_str("</body>\n</html>\n");
    out
}

fn render_header(out: &mut String, config: &SiteConfig) {
    out.push_str("<header class=\"site-header\"><div class=\"header-inner\">");

    out.push_str(&format!(
        "<a class=\"brand\" href=\"/\">🐟 {}</a><span class=\"badge badge-secondary\">v{}</span>",
        escape_text(&config.site.name),
        escape_text(&config.site.version)
    ));

    out.push_str("<nav class=\"header-nav\">");
    for link in header_links() {
        if link.path == "/components" {
            // Components gets a hover dropdown listing the component pages.
            out.push_str("<details class=\"nav-dropdown\"><summary>Components</summary><ul>");
            for item in components_menu() {
                out.push_str(&format!(
                    "<li><a href=\"{}\">{}</a></li>",
                    escape_attr(&item.path),
                    escape_text(&item.label)
                ));
            }
            out.push_str("</ul></details>");
        } else {
            out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape_attr(&link.path),
                escape_text(&link.label)
            ));
        }
    }
    out.push_str("</nav>");

    out.push_str("<nav class=\"header-links\">");
    out.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">📋 Roadmap</a>",
        escape_attr(&config.links.roadmap)
    ));
    out.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">GitHub</a>",
        escape_attr(&config.links.github)
    ));
    out.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">Crates.io</a>",
        escape_attr(&config.links.crates_io)
    ));
    out.push_str("</nav></div></header>\n");
}

fn render_sidebar(out: &mut String) {
    out.push_str("<aside class=\"sidebar\">");
    for section in sidebar() {
        out.push_str(&format!(
            "<h3><a href=\"{}\">{}</a></h3><ul>",
            escape_attr(&section.path),
            escape_text(&section.title)
        ));
        for item in &section.items {
            out.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>",
                escape_attr(&item.path),
                escape_text(&item.label)
            ));
        }
        out.push_str("</ul>");
    }
    out.push_str("</aside>\n");
}

fn render_footer(out: &mut String, config: &SiteConfig) {
    out.push_str("<footer class=\"site-footer\">");
    out.push_str(&format!(
        "<p>{} — {}</p>",
        escape_text(&config.site.name),
        escape_text(&config.site.tagline)
    ));
    out.push_str(&format!(
        "<p><a href=\"{}\">GitHub</a> · <a href=\"{}\">Crates.io</a> · <a href=\"{}\">Roadmap</a></p>",
        escape_attr(&config.links.github),
        escape_attr(&config.links.crates_io),
        escape_attr(&config.links.roadmap)
    ));
    out.push_str("</footer>\n");
}

/// Embedded stylesheet. Dark terminal-adjacent palette matching the brand.
const STYLESHEET: &str = r#"
:root{--bg:#0f1117;--fg:#e6e6e6;--muted:#a0a0a0;--accent:#e94560;--card:#171a23;--border:#2a2e3b}
*{box-sizing:border-box}
body{margin:0;font-family:ui-monospace,'Courier New',monospace;background:var(--bg);color:var(--fg);line-height:1.6}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
.site-header{position:sticky;top:0;border-bottom:1px solid var(--border);background:rgba(15,17,23,.95);z-index:10}
.header-inner{max-width:1200px;margin:0 auto;display:flex;align-items:center;gap:1.5rem;padding:.75rem 1rem}
.brand{font-weight:700;font-size:1.15rem;color:var(--fg)}
.header-nav{display:flex;gap:1.25rem;flex:1}
.header-nav a,.header-links a{color:var(--muted)}
.header-nav a:hover,.header-links a:hover{color:var(--fg)}
.header-links{display:flex;gap:1rem}
.nav-dropdown{position:relative}
.nav-dropdown summary{cursor:pointer;color:var(--muted);list-style:none}
.nav-dropdown ul{position:absolute;margin:0;padding:.5rem;list-style:none;background:var(--card);border:1px solid var(--border);border-radius:8px;min-width:14rem}
.nav-dropdown li a{display:block;padding:.4rem .6rem;border-radius:6px}
main{max-width:1200px;margin:0 auto;padding:2rem 1rem}
.docs-shell{max-width:1200px;margin:0 auto;display:flex;gap:2.5rem;padding:0 1rem}
.sidebar{width:220px;flex-shrink:0;padding:1.5rem 0;font-size:.9rem}
.sidebar h3{margin:1.25rem 0 .5rem;font-size:.95rem}
.sidebar h3 a{color:var(--fg)}
.sidebar ul{margin:0;padding:0;list-style:none}
.sidebar li a{display:block;padding:.2rem 0;color:var(--muted)}
.docs-main{flex:1;min-width:0;padding:2rem 0;max-width:56rem}
.hero{text-align:center;padding:4rem 1rem}
.hero h1{font-size:2.75rem;margin:.75rem 0}
.hero .accent{color:#f97316}
.hero p{color:var(--muted);max-width:42rem;margin:1rem auto}
.badge{display:inline-block;padding:.1rem .55rem;border-radius:999px;font-size:.75rem;background:var(--card);border:1px solid var(--border)}
.badge-secondary{color:var(--muted)}
.badge-outline{background:transparent}
.btn{display:inline-block;padding:.5rem 1rem;border-radius:8px;border:1px solid var(--border)}
.btn-primary{background:var(--accent);color:#fff;border-color:var(--accent)}
.btn-outline{color:var(--fg)}
.btn-ghost{border-color:transparent;color:var(--muted)}
.btn-row{display:flex;gap:.75rem;justify-content:center;margin-top:1.5rem;flex-wrap:wrap}
.card{background:var(--card);border:1px solid var(--border);border-radius:12px;margin:1rem 0}
.card-header{padding:1rem 1.25rem 0}
.card-title{margin:0 0 .25rem;font-size:1.05rem}
.card-description{margin:0;color:var(--muted);font-size:.9rem}
.card-content{padding:1rem 1.25rem 1.25rem}
.card-grid{display:grid;gap:1rem;grid-template-columns:repeat(auto-fill,minmax(260px,1fr))}
.card-grid .card{margin:0}
.code-block{border:1px solid var(--border);border-radius:8px;overflow:hidden;margin:.75rem 0}
.code-block-header{display:flex;justify-content:space-between;padding:.4rem .75rem;background:#0b0d12;border-bottom:1px solid var(--border);font-size:.8rem;color:var(--muted)}
.code-block pre{margin:0;padding:1rem;overflow-x:auto;background:#10131a;font-size:.85rem}
.code-block-output{border-top:1px dashed var(--border)}
.code-block-output-label{display:block;padding:.25rem .75rem;font-size:.7rem;color:var(--muted);text-transform:uppercase}
.page-title{font-size:2.25rem;margin:0 0 .25rem}
.page-lead{color:var(--muted);font-size:1.1rem;margin-top:.25rem}
.tag-row{display:flex;gap:.4rem;flex-wrap:wrap;margin:.5rem 0 1rem}
section{margin:2.5rem 0}
section h2{font-size:1.5rem}
.site-footer{border-top:1px solid var(--border);text-align:center;color:var(--muted);padding:2rem 1rem;margin-top:3rem}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn head_carries_canonical_and_social_tags() {
        let head = PageHead::new("Examples", "All examples", "/examples");
        let html = docs_page(&config(), &head, "<p>x</p>");

        assert!(html.contains("<title>Examples</title>"));
        assert!(html.contains(
            r#"<link rel="canonical" href="https://zfish-devdocs.vercel.app/examples">"#
        ));
        assert!(html.contains(r#"property="og:image""#));
        assert!(html.contains("/api/twitter-og?title=Examples"));
        assert!(html.contains(r#"content="summary_large_image""#));
    }

    #[test]
    fn docs_page_includes_sidebar_and_body() {
        let head = PageHead::new("t", "d", "/getting-started");
        let html = docs_page(&config(), &head, "<p>hello-body</p>");
        assert!(html.contains("class=\"sidebar\""));
        assert!(html.contains("hello-body"));
        assert!(html.contains("/examples/01_hello_world"));
    }

    #[test]
    fn plain_page_has_no_sidebar() {
        let head = PageHead::new("t", "d", "/");
        let html = page(&config(), &head, "<p>x</p>");
        assert!(!html.contains("class=\"sidebar\""));
    }

    #[test]
    fn header_shows_brand_version_and_components_menu() {
        let head = PageHead::new("t", "d", "/");
        let html = page(&config(), &head, "");
        assert!(html.contains("🐟 ZFish"));
        assert!(html.contains("v0.1.10"));
        assert!(html.contains("/components/colors"));
        assert!(html.contains("Crates.io"));
    }
}
