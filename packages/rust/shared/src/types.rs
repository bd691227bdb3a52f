//! Core domain types for the ZFish documentation site.
//!
//! Everything here is static catalog data: defined once at process start,
//! immutable for the life of the process, consumed by the renderers.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// A single navigation link (header menu or sidebar leaf).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display label.
    pub label: String,
    /// Site-relative path (e.g. `/components/colors`).
    pub path: String,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// A titled sidebar section with its child links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Section heading.
    pub title: String,
    /// Path of the section's landing page.
    pub path: String,
    /// Child links, in display order.
    pub items: Vec<NavEntry>,
}

// ---------------------------------------------------------------------------
// Example catalog
// ---------------------------------------------------------------------------

/// Difficulty tag shown on example pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        f.write_str(s)
    }
}

/// Catalog entry for one runnable example in the ZFish repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleMeta {
    /// Two-digit ordinal (1–18), also the slug prefix.
    pub ordinal: u8,
    /// Route slug (e.g. `01_hello_world`), matching the repo file stem.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Difficulty tag.
    pub difficulty: Difficulty,
    /// Topic tags shown as badges.
    pub tags: Vec<String>,
    /// Source file name in the repo's `examples/` directory.
    pub source_file: String,
    /// Inline code sample, when the catalog carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Captured output for the inline sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

// ---------------------------------------------------------------------------
// Component catalog
// ---------------------------------------------------------------------------

/// A titled code sample on a component page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSection {
    /// Section heading (e.g. "Basic Colors").
    pub title: String,
    /// One-line description under the heading.
    pub description: String,
    /// Code sample body.
    pub code: String,
    /// Language hint for the code block header.
    pub language: String,
    /// Captured terminal output, when shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Catalog entry for one component documentation page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentMeta {
    /// Route slug under `/components/`.
    pub slug: String,
    /// Page title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Emoji icon shown on the index card.
    pub icon: String,
    /// Code samples, in page order.
    pub sections: Vec<CodeSection>,
}

// ---------------------------------------------------------------------------
// API reference
// ---------------------------------------------------------------------------

/// One `zfish::*` module card on the API reference page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiModule {
    /// Module name (e.g. `style`).
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Key exported items, shown as badges.
    pub items: Vec<String>,
    /// docs.rs URL for the module.
    pub docs_url: String,
}

// ---------------------------------------------------------------------------
// Sitemap
// ---------------------------------------------------------------------------

/// Crawler-facing change frequency for a sitemap entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl std::fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        };
        f.write_str(s)
    }
}

/// One `<url>` entry in the XML sitemap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapEntry {
    /// Site-relative path; empty string means the home page.
    pub path: String,
    /// Crawler change-frequency hint.
    pub change_frequency: ChangeFrequency,
    /// Priority in tenths (10 = `1`, 8 = `0.8`) so the table stays integral.
    pub priority_tenths: u8,
}

impl SitemapEntry {
    /// Priority formatted the way crawlers expect: `1` for 10 tenths,
    /// otherwise `0.x`.
    pub fn priority(&self) -> String {
        if self.priority_tenths >= 10 {
            "1".to_string()
        } else {
            format!("0.{}", self.priority_tenths)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_display() {
        assert_eq!(Difficulty::Beginner.to_string(), "Beginner");
        assert_eq!(Difficulty::Advanced.to_string(), "Advanced");
    }

    #[test]
    fn change_frequency_display() {
        assert_eq!(ChangeFrequency::Weekly.to_string(), "weekly");
        assert_eq!(ChangeFrequency::Monthly.to_string(), "monthly");
    }

    #[test]
    fn sitemap_priority_formatting() {
        let home = SitemapEntry {
            path: "".into(),
            change_frequency: ChangeFrequency::Weekly,
            priority_tenths: 10,
        };
        assert_eq!(home.priority(), "1");

        let page = SitemapEntry {
            path: "getting-started".into(),
            change_frequency: ChangeFrequency::Monthly,
            priority_tenths: 8,
        };
        assert_eq!(page.priority(), "0.8");
    }

    #[test]
    fn example_meta_serialization() {
        let meta = ExampleMeta {
            ordinal: 1,
            slug: "01_hello_world".into(),
            title: "Hello World".into(),
            description: "Basic usage with colored output".into(),
            difficulty: Difficulty::Beginner,
            tags: vec!["beginner".into(), "colors".into()],
            source_file: "01_hello_world.rs".into(),
            code: None,
            output: None,
        };

        let json = serde_json::to_string(&meta).expect("serialize");
        assert!(!json.contains("\"code\""));
        let parsed: ExampleMeta = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.ordinal, 1);
        assert_eq!(parsed.difficulty, Difficulty::Beginner);
    }
}
