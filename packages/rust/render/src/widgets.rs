//! Reusable HTML fragments: cards, badges, code blocks, link buttons.
//!
//! These mirror the UI widgets the documentation pages are assembled from.

use crate::html::{escape_attr, escape_text};

/// A small pill label. `variant` picks the visual style
/// (`default`, `secondary`, `outline`).
pub fn badge(label: &str, variant: &str) -> String {
    format!(
        r#"<span class="badge badge-{}">{}</span>"#,
        escape_attr(variant),
        escape_text(label)
    )
}

/// A bordered card with optional title/description header and a raw body.
///
/// `body` is pre-rendered markup and is not escaped here.
pub fn card(title: Option<&str>, description: Option<&str>, body: &str) -> String {
    let mut out = String::from(r#"<div class="card">"#);

    if title.is_some() || description.is_some() {
        out.push_str(r#"<div class="card-header">"#);
        if let Some(title) = title {
            out.push_str(&format!(
                r#"<h3 class="card-title">{}</h3>"#,
                escape_text(title)
            ));
        }
        if let Some(description) = description {
            out.push_str(&format!(
                r#"<p class="card-description">{}</p>"#,
                escape_text(description)
            ));
        }
        out.push_str("</div>");
    }

    out.push_str(r#"<div class="card-content">"#);
    out.push_str(body);
    out.push_str("</div></div>");
    out
}

/// A code block with a header bar (title + language tag) and optional
/// captured output underneath.
pub fn code_block(title: Option<&str>, language: &str, code: &str, output: Option<&str>) -> String {
    let mut out = String::from(r#"<div class="code-block">"#);

    out.push_str(r#"<div class="code-block-header">"#);
    if let Some(title) = title {
        out.push_str(&format!(
            r#"<span class="code-block-title">{}</span>"#,
            escape_text(title)
        ));
    }
    out.push_str(&format!(
        r#"<span class="code-block-lang">{}</span>"#,
        escape_text(language)
    ));
    out.push_str("</div>");

    out.push_str(&format!(
        r#"<pre><code class="language-{}">{}</code></pre>"#,
        escape_attr(language),
        escape_text(code)
    ));

    if let Some(output) = output {
        out.push_str(&format!(
            r#"<div class="code-block-output"><span class="code-block-output-label">Output</span><pre>{}</pre></div>"#,
            escape_text(output)
        ));
    }

    out.push_str("</div>");
    out
}

/// An anchor styled as a button. `variant` is `primary`, `outline`, or
/// `ghost`; external links open in a new tab.
pub fn link_button(label: &str, href: &str, variant: &str) -> String {
    let external = href.starts_with("http");
    let target = if external {
        r#" target="_blank" rel="noopener""#
    } else {
        ""
    };
    format!(
        r#"<a class="btn btn-{}" href="{}"{}>{}</a>"#,
        escape_attr(variant),
        escape_attr(href),
        target,
        escape_text(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_escapes_label() {
        let html = badge("Tables & Charts", "secondary");
        assert!(html.contains("badge-secondary"));
        assert!(html.contains("Tables &amp; Charts"));
    }

    #[test]
    fn card_without_header_has_no_header_div() {
        let html = card(None, None, "<p>body</p>");
        assert!(!html.contains("card-header"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn code_block_escapes_code_and_shows_output() {
        let html = code_block(
            Some("Generics"),
            "rust",
            "fn max<T: Ord>(a: T, b: T) -> T { a }",
            Some("done"),
        );
        assert!(html.contains("fn max&lt;T: Ord&gt;"));
        assert!(html.contains("code-block-output"));
        assert!(html.contains("done"));
    }

    #[test]
    fn external_links_open_new_tab() {
        let html = link_button("GitHub", "https://github.com/JeetKarena/ZFish", "ghost");
        assert!(html.contains(r#"target="_blank""#));

        let internal = link_button("Examples", "/examples", "primary");
        assert!(!internal.contains("target"));
    }
}
