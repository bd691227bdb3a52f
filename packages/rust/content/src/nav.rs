//! Header navigation and sidebar tables.
//!
//! Mirrors the site's information architecture: four top-level sections, a
//! components dropdown, and a sidebar tree covering every documentation page.

use std::sync::LazyLock;

use zfishdocs_shared::{NavEntry, SidebarSection};

static HEADER_LINKS: LazyLock<Vec<NavEntry>> = LazyLock::new(|| {
    vec![
        NavEntry::new("Getting Started", "/getting-started"),
        NavEntry::new("Components", "/components"),
        NavEntry::new("Examples", "/examples"),
        NavEntry::new("API Reference", "/api"),
    ]
});

static COMPONENTS_MENU: LazyLock<Vec<NavEntry>> = LazyLock::new(|| {
    vec![
        NavEntry::new("Colors & Styles", "/components/colors"),
        NavEntry::new("Progress Bars", "/components/progress"),
        NavEntry::new("Tables", "/components/tables"),
        NavEntry::new("Prompts", "/components/prompts"),
        NavEntry::new("Logger", "/components/logger"),
        NavEntry::new("Terminal Control", "/components/terminal"),
    ]
});

static SIDEBAR: LazyLock<Vec<SidebarSection>> = LazyLock::new(|| {
    vec![
        SidebarSection {
            title: "Getting Started".into(),
            path: "/getting-started".into(),
            items: vec![
                NavEntry::new("Installation", "/getting-started#installation"),
                NavEntry::new("Quick Start", "/getting-started#quick-start"),
                NavEntry::new("Core Concepts", "/getting-started#core-concepts"),
            ],
        },
        SidebarSection {
            title: "Components".into(),
            path: "/components".into(),
            items: vec![
                NavEntry::new("Argument Parsing", "/components/args"),
                NavEntry::new("Colors & Styles", "/components/colors"),
                NavEntry::new("Progress Bars", "/components/progress"),
                NavEntry::new("Tables", "/components/tables"),
                NavEntry::new("Interactive Prompts", "/components/prompts"),
                NavEntry::new("Logger", "/components/logger"),
                NavEntry::new("Terminal Control", "/components/terminal"),
            ],
        },
        SidebarSection {
            title: "Examples".into(),
            path: "/examples".into(),
            items: vec![
                NavEntry::new("Hello World", "/examples/01_hello_world"),
                NavEntry::new("Argument Parsing", "/examples/02_argument_parsing"),
                NavEntry::new("Colored Text", "/examples/03_colored_text"),
                NavEntry::new("Progress Bar", "/examples/04_progress_bar"),
                NavEntry::new("Logger", "/examples/05_logger"),
                NavEntry::new("Terminal Control", "/examples/06_terminal_control"),
                NavEntry::new("Interactive Prompts", "/examples/07_interactive_prompts"),
                NavEntry::new("Complete CLI", "/examples/08_complete_cli"),
                NavEntry::new("Subcommands", "/examples/09_subcommands"),
                NavEntry::new("Advanced Args", "/examples/10_arg_features_v2"),
                NavEntry::new("Core Features", "/examples/11_core_features_demo"),
                NavEntry::new("Reports", "/examples/12_beautiful_reports"),
                NavEntry::new("Table Examples", "/examples/13_table_examples"),
                NavEntry::new("Alignment", "/examples/14_alignment_test"),
                NavEntry::new("Unicode Width", "/examples/15_debug_emoji_width"),
                NavEntry::new("Unicode Test", "/examples/16_comprehensive_unicode_test"),
                NavEntry::new("Edge Cases", "/examples/17_unicode_edge_cases"),
                NavEntry::new("Manual Tables", "/examples/18_manual_table_drawing"),
            ],
        },
        SidebarSection {
            title: "API Reference".into(),
            path: "/api".into(),
            items: vec![
                NavEntry::new("Style Module", "/api#style"),
                NavEntry::new("Progress Module", "/api#progress"),
                NavEntry::new("Table Module", "/api#table"),
                NavEntry::new("Prompt Module", "/api#prompt"),
                NavEntry::new("Log Module", "/api#log"),
                NavEntry::new("Terminal Module", "/api#term"),
                NavEntry::new("Args Module", "/api#args"),
                NavEntry::new("Unicode Module", "/api#unicode"),
            ],
        },
    ]
});

/// Top-level header navigation links.
pub fn header_links() -> &'static [NavEntry] {
    &HEADER_LINKS
}

/// Entries of the components dropdown in the header.
pub fn components_menu() -> &'static [NavEntry] {
    &COMPONENTS_MENU
}

/// The full sidebar tree.
pub fn sidebar() -> &'static [SidebarSection] {
    &SIDEBAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{example_catalog, find_component};

    #[test]
    fn header_has_four_sections() {
        let links = header_links();
        assert_eq!(links.len(), 4);
        assert_eq!(links[0].path, "/getting-started");
        assert_eq!(links[3].path, "/api");
    }

    #[test]
    fn sidebar_example_links_resolve_to_catalog_entries() {
        let examples = sidebar()
            .iter()
            .find(|s| s.path == "/examples")
            .expect("examples section");

        assert_eq!(examples.items.len(), example_catalog().len());
        for item in &examples.items {
            let slug = item.path.strip_prefix("/examples/").expect("example path");
            assert!(
                example_catalog().iter().any(|e| e.slug == slug),
                "sidebar links to unknown example {slug}"
            );
        }
    }

    #[test]
    fn components_menu_links_resolve_to_catalog_entries() {
        for item in components_menu() {
            let slug = item
                .path
                .strip_prefix("/components/")
                .expect("component path");
            assert!(
                find_component(slug).is_some(),
                "menu links to unknown component {slug}"
            );
        }
    }
}
