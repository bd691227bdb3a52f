//! Social preview images, rendered as deterministic SVG.
//!
//! Both renderers are pure functions of their parameters: the same request
//! always yields byte-identical output, so responses cache cleanly.

use serde::Deserialize;

use crate::html::escape_text;

/// Width of the Open Graph preview image in pixels.
pub const OG_WIDTH: u32 = 1200;
/// Height of the Open Graph preview image in pixels.
pub const OG_HEIGHT: u32 = 630;
/// Width of the Twitter card preview image in pixels.
pub const TWITTER_WIDTH: u32 = 1200;
/// Height of the Twitter card preview image in pixels.
pub const TWITTER_HEIGHT: u32 = 600;

/// Title used when the request carries none.
pub const DEFAULT_TITLE: &str = "ZFish - Ultra-Light CLI Framework for Rust";
/// Description used when the request carries none.
pub const DEFAULT_DESCRIPTION: &str = "Beautiful, zero-dependency CLI framework for Rust";

/// Content type for both preview renderers.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

const GRADIENT_STOPS: [&str; 3] = ["#1a1a2e", "#16213e", "#0f3460"];
const ACCENT: &str = "#e94560";
const TAGLINE: &str = "Ultra-Light CLI Framework for Rust";
const FOOTER_CAPTION: &str = "Zero-dependency • High-performance • Beautiful CLI apps";

/// Query parameters accepted by the preview-image endpoints. Missing or
/// empty values fall back to the site defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewParams {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PreviewParams {
    pub fn title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => DEFAULT_TITLE,
        }
    }

    pub fn description(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => description,
            _ => DEFAULT_DESCRIPTION,
        }
    }
}

/// Greedy word wrap. Words longer than `max_chars` get a line to themselves.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn gradient_defs(id: &str) -> String {
    format!(
        r##"<defs><linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="{}"/><stop offset="50%" stop-color="{}"/><stop offset="100%" stop-color="{}"/></linearGradient></defs>"##,
        GRADIENT_STOPS[0], GRADIENT_STOPS[1], GRADIENT_STOPS[2]
    )
}

fn centered_lines(lines: &[String], x: u32, start_y: u32, line_height: u32, attrs: &str) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        out.push_str(&format!(
            r#"<text x="{x}" y="{}" text-anchor="middle" {attrs}>{}</text>"#,
            start_y + i as u32 * line_height,
            escape_text(line)
        ));
    }
    out
}

/// Render the 1200x630 Open Graph preview image.
pub fn render_og_image(params: &PreviewParams) -> String {
    let title_lines = wrap(params.title(), 44);
    let description_lines = wrap(params.description(), 68);

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{OG_WIDTH}" height="{OG_HEIGHT}" viewBox="0 0 {OG_WIDTH} {OG_HEIGHT}">"#
    );
    svg.push_str(&gradient_defs("bg"));
    svg.push_str(&format!(
        r#"<rect width="{OG_WIDTH}" height="{OG_HEIGHT}" fill="url(#bg)"/>"#
    ));

    // Brand mark and tagline
    svg.push_str(r#"<text x="600" y="110" text-anchor="middle" font-size="72">🐟</text>"#);
    svg.push_str(&format!(
        r#"<text x="600" y="178" text-anchor="middle" font-family="monospace" font-size="48" font-weight="bold" fill="{ACCENT}">ZFish</text>"#
    ));
    svg.push_str(&format!(
        r##"<text x="600" y="208" text-anchor="middle" font-family="monospace" font-size="18" fill="#a0a0a0">{TAGLINE}</text>"##
    ));

    // Title and description, centered
    svg.push_str(&centered_lines(
        &title_lines,
        600,
        270,
        42,
        r##"font-family="monospace" font-size="32" font-weight="bold" fill="#ffffff""##,
    ));
    let description_y = 270 + title_lines.len() as u32 * 42 + 8;
    svg.push_str(&centered_lines(
        &description_lines,
        600,
        description_y,
        28,
        r##"font-family="monospace" font-size="20" fill="#cccccc""##,
    ));

    // Terminal panel
    svg.push_str(&format!(
        r##"<g><rect x="350" y="440" width="500" height="120" rx="12" fill="rgba(0,0,0,0.8)" stroke="{ACCENT}" stroke-width="2"/><circle cx="380" cy="468" r="6" fill="#ff5f57"/><circle cx="402" cy="468" r="6" fill="#ffbd2e"/><circle cx="424" cy="468" r="6" fill="#28ca42"/><text x="378" y="510" font-family="monospace" font-size="18" fill="#28ca42">$ cargo add zfish</text><text x="378" y="540" font-family="monospace" font-size="16" fill="#ffffff">Added zfish v0.1.10 to Cargo.toml ✨</text></g>"##
    ));

    // Footer caption
    svg.push_str(&format!(
        r##"<text x="600" y="606" text-anchor="middle" font-family="monospace" font-size="16" fill="#a0a0a0">{FOOTER_CAPTION}</text>"##
    ));

    svg.push_str("</svg>");
    svg
}

/// Render the 1200x600 Twitter card preview image.
pub fn render_twitter_image(params: &PreviewParams) -> String {
    let title_lines = wrap(params.title(), 42);
    let description_lines = wrap(params.description(), 62);

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{TWITTER_WIDTH}" height="{TWITTER_HEIGHT}" viewBox="0 0 {TWITTER_WIDTH} {TWITTER_HEIGHT}">"#
    );
    svg.push_str(&gradient_defs("bg"));
    svg.push_str(&format!(
        r#"<rect width="{TWITTER_WIDTH}" height="{TWITTER_HEIGHT}" fill="url(#bg)"/>"#
    ));

    svg.push_str(r#"<text x="600" y="100" text-anchor="middle" font-size="64">🐟</text>"#);
    svg.push_str(&format!(
        r#"<text x="600" y="162" text-anchor="middle" font-family="monospace" font-size="42" font-weight="bold" fill="{ACCENT}">ZFish</text>"#
    ));
    svg.push_str(&format!(
        r##"<text x="600" y="190" text-anchor="middle" font-family="monospace" font-size="16" fill="#a0a0a0">{TAGLINE}</text>"##
    ));

    svg.push_str(&centered_lines(
        &title_lines,
        600,
        246,
        38,
        r##"font-family="monospace" font-size="28" font-weight="bold" fill="#ffffff""##,
    ));
    let description_y = 246 + title_lines.len() as u32 * 38 + 8;
    svg.push_str(&centered_lines(
        &description_lines,
        600,
        description_y,
        26,
        r##"font-family="monospace" font-size="18" fill="#cccccc""##,
    ));

    // Feature tiles
    let tiles = [
        ("🎨", "Colors"),
        ("📊", "Progress"),
        ("📋", "Tables"),
        ("❓", "Prompts"),
    ];
    let tile_width = 160u32;
    let gap = 20u32;
    let total = tiles.len() as u32 * tile_width + (tiles.len() as u32 - 1) * gap;
    let mut x = (TWITTER_WIDTH - total) / 2;
    for (icon, label) in tiles {
        svg.push_str(&format!(
            r##"<g><rect x="{x}" y="420" width="{tile_width}" height="90" rx="8" fill="rgba(0,0,0,0.6)" stroke="{ACCENT}"/><text x="{cx}" y="460" text-anchor="middle" font-size="24">{icon}</text><text x="{cx}" y="492" text-anchor="middle" font-family="monospace" font-size="14" fill="#ffffff">{label}</text></g>"##,
            cx = x + tile_width / 2,
        ));
        x += tile_width + gap;
    }

    // Footer caption
    svg.push_str(&format!(
        r##"<text x="600" y="566" text-anchor="middle" font-family="monospace" font-size="14" fill="#a0a0a0">{FOOTER_CAPTION}</text>"##
    ));

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_params_missing_or_empty() {
        let params = PreviewParams::default();
        assert_eq!(params.title(), DEFAULT_TITLE);
        assert_eq!(params.description(), DEFAULT_DESCRIPTION);

        let params = PreviewParams {
            title: Some(String::new()),
            description: Some(String::new()),
        };
        assert_eq!(params.title(), DEFAULT_TITLE);
        assert_eq!(params.description(), DEFAULT_DESCRIPTION);
    }

    #[test]
    fn og_image_carries_dimensions_and_custom_text() {
        let params = PreviewParams {
            title: Some("Foo".into()),
            description: Some("Bar".into()),
        };
        let svg = render_og_image(&params);
        assert!(svg.contains(r#"width="1200" height="630""#));
        assert!(svg.contains(">Foo</text>"));
        assert!(svg.contains(">Bar</text>"));
        assert!(svg.contains("$ cargo add zfish"));
    }

    #[test]
    fn twitter_image_carries_dimensions_and_tiles() {
        let svg = render_twitter_image(&PreviewParams::default());
        assert!(svg.contains(r#"width="1200" height="600""#));
        for label in ["Colors", "Progress", "Tables", "Prompts"] {
            assert!(
                svg.contains(&format!(r##"fill="#ffffff">{label}</text>"##)),
                "missing tile label {label}"
            );
        }
    }

    #[test]
    fn renderers_are_deterministic() {
        let params = PreviewParams {
            title: Some("Tables & Charts".into()),
            description: None,
        };
        assert_eq!(render_og_image(&params), render_og_image(&params));
        assert!(render_og_image(&params).contains("Tables &amp; Charts"));
    }

    #[test]
    fn wrap_splits_long_titles() {
        let lines = wrap("ZFish - Ultra-Light CLI Framework for Rust", 28);
        assert!(lines.len() >= 2);
        assert!(lines.iter().all(|l| l.chars().count() <= 28));
    }
}
