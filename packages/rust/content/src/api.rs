//! The API-reference module table (`zfish::*` modules shown on `/api`).

use std::sync::LazyLock;

use zfishdocs_shared::ApiModule;

fn module(name: &str, description: &str, items: &[&str]) -> ApiModule {
    ApiModule {
        name: name.into(),
        description: description.into(),
        items: items.iter().map(|i| i.to_string()).collect(),
        docs_url: format!("https://docs.rs/zfish/latest/zfish/{name}/index.html"),
    }
}

static API_MODULES: LazyLock<Vec<ApiModule>> = LazyLock::new(|| {
    vec![
        module(
            "style",
            "Color and text styling utilities",
            &["Color", "Style", "print", "println"],
        ),
        module(
            "progress",
            "Progress bar components",
            &["Progress", "ProgressStyle"],
        ),
        module(
            "table",
            "Table rendering and formatting",
            &["Table", "TableStyle", "draw_box"],
        ),
        module(
            "prompt",
            "Interactive user prompts",
            &["Confirm", "Input", "Select"],
        ),
        module(
            "log",
            "Structured logging system",
            &["Logger", "Level", "Record"],
        ),
        module(
            "term",
            "Terminal control and manipulation",
            &["clear_screen", "move_cursor", "get_size"],
        ),
        module(
            "args",
            "Command-line argument parsing",
            &["Args", "Command", "Arg"],
        ),
        module(
            "unicode",
            "Unicode text width calculation",
            &["display_width", "is_wide_character"],
        ),
    ]
});

/// The full API module table, in page order.
pub fn api_modules() -> &'static [ApiModule] {
    &API_MODULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_modules_with_docs_links() {
        let modules = api_modules();
        assert_eq!(modules.len(), 8);
        for m in modules {
            assert!(m.docs_url.starts_with("https://docs.rs/zfish/"));
            assert!(m.docs_url.contains(&m.name));
            assert!(!m.items.is_empty());
        }
    }
}
