//! Page renderers, one per documentation route.
//!
//! Each function is a pure map from the static content tables to a complete
//! HTML document. Page copy follows the published site.

use zfishdocs_content::{api_modules, component_catalog, example_catalog};
use zfishdocs_shared::{ComponentMeta, ExampleMeta, SiteConfig};

use crate::html::{escape_attr, escape_text};
use crate::layout::{PageHead, docs_page, page};
use crate::widgets::{badge, card, code_block, link_button};

const HELLO_WORLD_SNIPPET: &str = r#"use zfish::{style::Color, print};

fn main() {
    print("Hello, ", Color::Green);
    print("ZFish!", Color::Blue.bold());
    println!(); // New line
}"#;

/// The home page: hero, installation, feature grid, quick start.
pub fn render_home(config: &SiteConfig) -> String {
    let mut body = String::new();

    // Hero
    body.push_str("<section class=\"hero\">");
    body.push_str(&badge("🐟 Ultra-Light CLI Framework", "secondary"));
    body.push_str("<h1>Beautiful CLI apps in <span class=\"accent\">Rust</span></h1>");
    body.push_str(
        "<p>Zero-dependency, high-performance CLI framework with colors, progress bars, \
         tables, prompts, and more. Build stunning terminal applications with ease.</p>",
    );
    body.push_str("<div class=\"btn-row\">");
    body.push_str(&link_button("Get Started", "/getting-started", "primary"));
    body.push_str(&link_button("View Examples", "/examples", "outline"));
    body.push_str(&link_button(
        "📋 View Roadmap & Status",
        &config.links.roadmap,
        "ghost",
    ));
    body.push_str("</div></section>");

    // Installation
    body.push_str("<section><h2>Installation</h2><div class=\"card-grid\">");
    body.push_str(&card(
        Some("From crates.io"),
        Some("The recommended way to install ZFish"),
        &code_block(None, "bash", "cargo add zfish", None),
    ));
    body.push_str(&card(
        Some("Manual Installation"),
        Some("Or add to your Cargo.toml"),
        &code_block(None, "toml", "[dependencies]\nzfish = \"0.1\"", None),
    ));
    body.push_str("</div></section>");

    // Features — the component catalog drives the grid.
    body.push_str("<section><h2>Features</h2><div class=\"card-grid\">");
    for component in component_catalog() {
        body.push_str(&card(
            Some(&format!("{} {}", component.icon, component.title)),
            Some(&component.description),
            &format!(
                "<a href=\"/components/{}\">Learn more →</a>",
                escape_attr(&component.slug)
            ),
        ));
    }
    body.push_str("</div></section>");

    // Quick start
    body.push_str("<section><h2>Quick Start</h2>");
    body.push_str(&card(
        Some("Hello World Example"),
        Some("Create your first ZFish application in minutes"),
        &code_block(None, "rust", HELLO_WORLD_SNIPPET, None),
    ));
    body.push_str("</section>");

    let head = PageHead::new(
        format!("{} - {}", config.site.name, config.site.tagline),
        config.site.description.clone(),
        "/",
    );
    page(config, &head, &body)
}

/// Getting-started guide: installation, first app, core concepts.
pub fn render_getting_started(config: &SiteConfig) -> String {
    let mut body = String::new();

    body.push_str("<h1 class=\"page-title\">Getting Started</h1>");
    body.push_str(&format!(
        "<p class=\"page-lead\">Everything you need to start building beautiful CLI apps with {}.</p>",
        escape_text(&config.site.name)
    ));

    body.push_str("<section id=\"installation\"><h2>Installation</h2><div class=\"card-grid\">");
    body.push_str(&card(
        Some("Using cargo add"),
        None,
        &code_block(Some("Terminal"), "bash", "cargo add zfish", None),
    ));
    body.push_str(&card(
        Some("Manual Installation"),
        None,
        &code_block(
            Some("Cargo.toml"),
            "toml",
            "[dependencies]\nzfish = \"0.1\"",
            None,
        ),
    ));
    body.push_str("</div></section>");

    body.push_str("<section id=\"quick-start\"><h2>Your First App</h2>");
    body.push_str(&card(
        Some("Hello World"),
        None,
        &code_block(
            Some("main.rs"),
            "rust",
            HELLO_WORLD_SNIPPET,
            Some("Hello, ZFish!"),
        ),
    ));
    body.push_str("</section>");

    body.push_str("<section id=\"core-concepts\"><h2>Core Concepts</h2><div class=\"card-grid\">");
    for slug in ["colors", "progress"] {
        if let Some(component) = zfishdocs_content::find_component(slug) {
            body.push_str(&card(
                Some(&component.title),
                Some(&component.description),
                &format!(
                    "<a href=\"/components/{}\">Read the component guide →</a>",
                    escape_attr(&component.slug)
                ),
            ));
        }
    }
    body.push_str("</div></section>");

    body.push_str("<section><h2>Next Steps</h2><div class=\"card-grid\">");
    body.push_str(&card(
        Some("Examples"),
        Some("18 runnable examples covering every feature"),
        &link_button("Browse Examples", "/examples", "outline"),
    ));
    body.push_str(&card(
        Some("Components"),
        Some("Deep dives into every building block"),
        &link_button("Explore Components", "/components", "outline"),
    ));
    body.push_str(&card(
        Some("API Reference"),
        Some("Full module-by-module documentation"),
        &link_button("Open API Reference", "/api", "outline"),
    ));
    body.push_str("</div></section>");

    let head = PageHead::new(
        format!("Getting Started - {}", config.site.name),
        "Install ZFish and build your first CLI application.",
        "/getting-started",
    );
    docs_page(config, &head, &body)
}

/// The components index: one card per component page.
pub fn render_components_index(config: &SiteConfig) -> String {
    let mut body = String::new();

    body.push_str("<h1 class=\"page-title\">Components</h1>");
    body.push_str(
        "<p class=\"page-lead\">Explore the building blocks for creating beautiful CLI applications.</p>",
    );

    body.push_str("<div class=\"card-grid\">");
    for component in component_catalog() {
        body.push_str(&card(
            Some(&format!("{} {}", component.icon, component.title)),
            Some(&component.description),
            &link_button(
                "View Documentation",
                &format!("/components/{}", component.slug),
                "outline",
            ),
        ));
    }
    body.push_str("</div>");

    let head = PageHead::new(
        format!("Components - {}", config.site.name),
        "All ZFish components: colors, progress bars, tables, prompts, logger, terminal control.",
        "/components",
    );
    docs_page(config, &head, &body)
}

/// A single component page: title, lead, and its code sections.
pub fn render_component(config: &SiteConfig, component: &ComponentMeta) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<h1 class=\"page-title\">{}</h1>",
        escape_text(&component.title)
    ));
    body.push_str(&format!(
        "<p class=\"page-lead\">{}</p>",
        escape_text(&component.description)
    ));

    for section in &component.sections {
        body.push_str(&card(
            Some(&section.title),
            Some(&section.description),
            &code_block(
                Some(&format!("{} Example", section.title)),
                &section.language,
                &section.code,
                section.output.as_deref(),
            ),
        ));
    }

    let head = PageHead::new(
        format!("{} - {}", component.title, config.site.name),
        component.description.clone(),
        format!("/components/{}", component.slug),
    );
    docs_page(config, &head, &body)
}

/// The examples index: full cards for entries with inline code, compact
/// cards for the rest.
pub fn render_examples_index(config: &SiteConfig) -> String {
    let mut body = String::new();

    body.push_str("<h1 class=\"page-title\">Examples</h1>");
    body.push_str(&format!(
        "<p class=\"page-lead\">Explore {} comprehensive examples covering all {} features. \
         Each example includes runnable code and detailed explanations.</p>",
        example_catalog().len(),
        escape_text(&config.site.name)
    ));

    body.push_str("<div class=\"card-grid\">");
    for example in example_catalog() {
        let mut content = String::from("<div class=\"tag-row\">");
        for tag in &example.tags {
            content.push_str(&badge(tag, "secondary"));
        }
        content.push_str("</div>");

        if let Some(code) = &example.code {
            content.push_str(&code_block(
                Some(&format!("{} Example", example.title)),
                "rust",
                code,
                example.output.as_deref(),
            ));
        }

        content.push_str(&link_button(
            "View Full Example",
            &format!("/examples/{}", example.slug),
            "primary",
        ));
        content.push_str(&link_button(
            "Source",
            &format!(
                "{}/blob/main/examples/{}",
                config.links.github, example.source_file
            ),
            "outline",
        ));

        body.push_str(&card(
            Some(&format!("{:02} {}", example.ordinal, example.title)),
            Some(&example.description),
            &content,
        ));
    }
    body.push_str("</div>");

    // Running-examples footnote
    body.push_str("<section>");
    body.push_str(&card(
        Some("Running Examples"),
        Some("All examples are available in the ZFish repository"),
        &format!(
            "{}{}",
            code_block(
                Some("Terminal"),
                "bash",
                &format!(
                    "git clone {}.git\ncd ZFish\ncargo run --example 01_hello_world",
                    config.links.github
                ),
                Some("Hello, ZFish!"),
            ),
            link_button(
                "View All Examples on GitHub",
                &format!("{}/tree/main/examples", config.links.github),
                "outline",
            )
        ),
    ));
    body.push_str("</section>");

    let head = PageHead::new(
        format!("Examples - {}", config.site.name),
        "18 comprehensive ZFish examples with runnable code.",
        "/examples",
    );
    docs_page(config, &head, &body)
}

/// A single example page: badges, description, run instructions, links.
pub fn render_example(config: &SiteConfig, example: &ExampleMeta) -> String {
    let mut body = String::new();

    body.push_str("<div class=\"tag-row\">");
    body.push_str(&badge(&format!("Example {:02}", example.ordinal), "outline"));
    body.push_str(&badge(&example.difficulty.to_string(), "default"));
    body.push_str("</div>");
    body.push_str(&format!(
        "<h1 class=\"page-title\">{}</h1>",
        escape_text(&example.title)
    ));
    body.push_str(&format!(
        "<p class=\"page-lead\">{}</p>",
        escape_text(&example.description)
    ));

    if let Some(code) = &example.code {
        body.push_str(&card(
            Some("Code"),
            None,
            &code_block(
                Some(&example.source_file),
                "rust",
                code,
                example.output.as_deref(),
            ),
        ));
    }

    let about = format!(
        "<p>This example demonstrates {}. View the complete source code on GitHub.</p>{}{}",
        escape_text(&example.description.to_lowercase()),
        link_button(
            "View Source Code on GitHub",
            &format!(
                "{}/blob/main/examples/{}",
                config.links.github, example.source_file
            ),
            "primary",
        ),
        link_button("Back to Examples", "/examples", "outline"),
    );
    body.push_str(&card(Some("About This Example"), None, &about));

    body.push_str(&card(
        Some("Running the Example"),
        None,
        &code_block(
            Some("Terminal"),
            "bash",
            &format!(
                "# Clone the repository\ngit clone {}.git\ncd ZFish\n\n# Run this example\ncargo run --example {}",
                config.links.github, example.slug
            ),
            None,
        ),
    ));

    let related = format!(
        "{}{}{}",
        link_button("Explore Components", "/components", "outline"),
        link_button("Getting Started Guide", "/getting-started", "outline"),
        link_button("API Reference", "/api", "outline"),
    );
    body.push_str(&card(Some("Related Resources"), None, &related));

    let head = PageHead::new(
        format!("{} - {} Examples", example.title, config.site.name),
        example.description.clone(),
        format!("/examples/{}", example.slug),
    );
    docs_page(config, &head, &body)
}

/// Placeholder for an unrecognized example ordinal. Rendered, never an error.
pub fn render_example_not_found(config: &SiteConfig) -> String {
    let mut body = String::new();
    body.push_str("<h1 class=\"page-title\">Example not found</h1>");
    body.push_str(
        "<p class=\"page-lead\">No example matches that address. Browse the full catalog instead.</p>",
    );
    body.push_str(&link_button("Back to Examples", "/examples", "primary"));

    let head = PageHead::new(
        format!("Example not found - {}", config.site.name),
        "No example matches that address.",
        "/examples",
    );
    docs_page(config, &head, &body)
}

/// The API reference page: one card per `zfish::*` module.
pub fn render_api_reference(config: &SiteConfig) -> String {
    let mut body = String::new();

    body.push_str("<h1 class=\"page-title\">API Reference</h1>");
    body.push_str(&format!(
        "<p class=\"page-lead\">Complete API documentation for all {} modules and functions.</p>",
        escape_text(&config.site.name)
    ));
    body.push_str(&link_button(
        "View Full API Docs →",
        &config.links.docs_rs,
        "primary",
    ));

    body.push_str("<div class=\"card-grid\">");
    for module in api_modules() {
        let mut content = String::from("<div class=\"tag-row\">");
        for item in &module.items {
            content.push_str(&badge(item, "outline"));
        }
        content.push_str("</div>");
        content.push_str(&link_button("View Module Docs", &module.docs_url, "outline"));

        body.push_str(&format!("<div id=\"{}\">", escape_attr(&module.name)));
        body.push_str(&card(
            Some(&format!("zfish::{}", module.name)),
            Some(&module.description),
            &content,
        ));
        body.push_str("</div>");
    }
    body.push_str("</div>");

    let head = PageHead::new(
        format!("API Reference - {}", config.site.name),
        "Module-by-module API documentation for ZFish.",
        "/api",
    );
    docs_page(config, &head, &body)
}

/// Generic 404 page body for unknown routes.
pub fn render_not_found(config: &SiteConfig, path: &str) -> String {
    let mut body = String::new();
    body.push_str("<h1 class=\"page-title\">Page not found</h1>");
    body.push_str(&format!(
        "<p class=\"page-lead\">There is no page at <code>{}</code>.</p>",
        escape_text(path)
    ));
    body.push_str(&link_button("Go Home", "/", "primary"));

    let head = PageHead::new(
        format!("Not Found - {}", config.site.name),
        "Page not found.",
        "/",
    );
    docs_page(config, &head, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zfishdocs_content::{find_component, find_example};

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn home_page_has_hero_and_install_snippet() {
        let html = render_home(&config());
        assert!(html.contains("Beautiful CLI apps in"));
        assert!(html.contains("cargo add zfish"));
        assert!(html.contains("Quick Start"));
    }

    #[test]
    fn component_page_renders_all_sections() {
        let colors = find_component("colors").expect("colors");
        let html = render_component(&config(), colors);
        assert!(html.contains("Colors &amp; Styles"));
        assert!(html.contains("256-Color Palette"));
        assert!(html.contains("Color::Custom(208)"));
    }

    #[test]
    fn examples_index_lists_every_example() {
        let html = render_examples_index(&config());
        for example in zfishdocs_content::example_catalog() {
            assert!(
                html.contains(&format!("/examples/{}", example.slug)),
                "missing link for {}",
                example.slug
            );
        }
    }

    #[test]
    fn example_page_shows_difficulty_and_run_command() {
        let example = find_example("04_progress_bar").expect("example 04");
        let html = render_example(&config(), example);
        assert!(html.contains("Intermediate"));
        assert!(html.contains("cargo run --example 04_progress_bar"));
    }

    #[test]
    fn api_page_lists_all_modules() {
        let html = render_api_reference(&config());
        for module in zfishdocs_content::api_modules() {
            assert!(html.contains(&format!("zfish::{}", module.name)));
        }
    }

    #[test]
    fn not_found_pages_render_placeholders() {
        let html = render_example_not_found(&config());
        assert!(html.contains("Example not found"));

        let html = render_not_found(&config(), "/no/such/page");
        assert!(html.contains("Page not found"));
        assert!(html.contains("/no/such/page"));
    }
}
