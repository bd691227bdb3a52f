//! The example catalog: 18 runnable examples shipped in the ZFish repo.
//!
//! Entries 01–08 carry inline code and captured output for the catalog page;
//! the later entries link out to the repository source only.

use std::sync::LazyLock;

use tracing::debug;
use zfishdocs_shared::{Difficulty, ExampleMeta};

fn entry(
    ordinal: u8,
    slug: &str,
    title: &str,
    description: &str,
    difficulty: Difficulty,
    tags: &[&str],
) -> ExampleMeta {
    ExampleMeta {
        ordinal,
        slug: slug.into(),
        title: title.into(),
        description: description.into(),
        difficulty,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        source_file: format!("{slug}.rs"),
        code: None,
        output: None,
    }
}

fn with_code(mut meta: ExampleMeta, code: &str, output: &str) -> ExampleMeta {
    meta.code = Some(code.into());
    meta.output = Some(output.into());
    meta
}

static EXAMPLES: LazyLock<Vec<ExampleMeta>> = LazyLock::new(|| {
    use Difficulty::{Advanced, Beginner, Intermediate};

    vec![
        with_code(
            entry(
                1,
                "01_hello_world",
                "Hello World",
                "Basic usage with colored output",
                Beginner,
                &["beginner", "colors"],
            ),
            r#"use zfish::{style::Color, print};

fn main() {
    print("Hello, ", Color::Green);
    print("ZFish!", Color::Blue.bold());
    println!();
}"#,
            "Hello, ZFish!",
        ),
        with_code(
            entry(
                2,
                "02_argument_parsing",
                "Argument Parsing",
                "CLI argument handling and validation",
                Intermediate,
                &["intermediate", "args"],
            ),
            r#"use zfish::args::{Args, Command};

let mut args = Args::new();
args.add_positional("name", "Your name");
args.add_flag("verbose", "Enable verbose output");

let matches = args.parse()?;
let name = matches.get_positional("name")?;
let verbose = matches.get_flag("verbose");"#,
            "Usage: program [OPTIONS] <name>\n\nArguments:\n  <name>  Your name\n\nOptions:\n  --verbose  Enable verbose output",
        ),
        with_code(
            entry(
                3,
                "03_colored_text",
                "Colored Text",
                "16 + 256 color palette showcase",
                Beginner,
                &["colors", "styling"],
            ),
            r#"use zfish::style::Color;

// 16 basic colors
print("Red", Color::Red);
print("Green", Color::Green);
print("Blue", Color::Blue);

// 256 colors
print("Orange", Color::from_256(208));
print("Purple", Color::from_256(129));"#,
            "RedGreenBlueOrangePurple",
        ),
        with_code(
            entry(
                4,
                "04_progress_bar",
                "Progress Bar",
                "Beautiful progress bars with animations",
                Intermediate,
                &["progress", "ui"],
            ),
            r#"use zfish::progress::Progress;

let mut progress = Progress::new(100);
progress.set_message("Downloading...");

for i in 0..=100 {
    progress.set_position(i);
    std::thread::sleep(std::time::Duration::from_millis(20));
}

progress.finish_with_message("Download complete!");"#,
            "[========================================] 100.0% (100/100) Downloading...\nDownload complete!",
        ),
        with_code(
            entry(
                5,
                "05_logger",
                "Logger",
                "Structured logging with colors",
                Beginner,
                &["logging", "debug"],
            ),
            r#"use zfish::log::{Logger, Level};

let logger = Logger::new();

// Different log levels
logger.info("Application started");
logger.warn("This is a warning");
logger.error("This is an error");
logger.debug("Debug information");"#,
            "[INFO] Application started\n[WARN] This is a warning\n[ERROR] This is an error\n[DEBUG] Debug information",
        ),
        with_code(
            entry(
                6,
                "06_terminal_control",
                "Terminal Control",
                "Cursor movement and screen manipulation",
                Intermediate,
                &["terminal", "control"],
            ),
            r#"use zfish::term;

// Clear screen and move cursor
term::clear_screen()?;
term::move_cursor(5, 10)?;
print("Hello at position 5,10!", Color::Green);

// Get terminal size
let (width, height) = term::size()?;
println!("Terminal size: {}x{}", width, height);"#,
            "Hello at position 5,10!\nTerminal size: 80x24",
        ),
        with_code(
            entry(
                7,
                "07_interactive_prompts",
                "Interactive Prompts",
                "User input and confirmation prompts",
                Intermediate,
                &["interactive", "input"],
            ),
            r#"use zfish::prompt::{Confirm, Input, Select};

let confirmed = Confirm::new("Do you want to continue?")
    .default(true)
    .prompt()?;

let name = Input::new("What is your name?")
    .placeholder("Enter your name")
    .prompt()?;

let choice = Select::new("Choose an option:")
    .items(&["Option 1", "Option 2", "Option 3"])
    .default(0)
    .prompt()?;"#,
            "? Do you want to continue? (Y/n) y\n? What is your name? John Doe\n? Choose an option: (1) Option 1\n  (2) Option 2\n  (3) Option 3\n> 1",
        ),
        with_code(
            entry(
                8,
                "08_complete_cli",
                "Complete CLI",
                "Full-featured CLI application",
                Advanced,
                &["advanced", "complete"],
            ),
            r#"use zfish::{args::Args, style::Color, progress::Progress};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = Args::new();
    args.add_positional("file", "File to process");
    args.add_flag("verbose", "Verbose output");

    let matches = args.parse()?;
    let file = matches.get_positional("file")?;
    let verbose = matches.get_flag("verbose");

    if verbose {
        println!("Processing file: {}", file);
    }

    let mut progress = Progress::new(100);
    for i in 0..=100 {
        progress.set_position(i);
        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    progress.finish_with_message("Processing complete!");
    Ok(())
}"#,
            "Processing file: data.txt\n[========================================] 100.0% (100/100)\nProcessing complete!",
        ),
        entry(
            9,
            "09_subcommands",
            "Subcommands",
            "Subcommands like git",
            Advanced,
            &["advanced", "args"],
        ),
        entry(
            10,
            "10_arg_features_v2",
            "Advanced Args",
            "Advanced argument parsing features",
            Advanced,
            &["advanced", "args"],
        ),
        entry(
            11,
            "11_core_features_demo",
            "Core Features Demo",
            "Demonstration of core features",
            Intermediate,
            &["core"],
        ),
        entry(
            12,
            "12_beautiful_reports",
            "Beautiful Reports",
            "Generate beautiful CLI reports",
            Advanced,
            &["reports", "tables"],
        ),
        entry(
            13,
            "13_table_examples",
            "Table Examples",
            "Table rendering with various styles",
            Intermediate,
            &["tables"],
        ),
        entry(
            14,
            "14_alignment_test",
            "Alignment Test",
            "Text alignment and formatting",
            Intermediate,
            &["formatting"],
        ),
        entry(
            15,
            "15_debug_emoji_width",
            "Debug Emoji Width",
            "Unicode emoji width calculation",
            Advanced,
            &["unicode"],
        ),
        entry(
            16,
            "16_comprehensive_unicode_test",
            "Comprehensive Unicode Test",
            "Complete Unicode support testing",
            Advanced,
            &["unicode"],
        ),
        entry(
            17,
            "17_unicode_edge_cases",
            "Unicode Edge Cases",
            "Handle Unicode edge cases",
            Advanced,
            &["unicode"],
        ),
        entry(
            18,
            "18_manual_table_drawing",
            "Manual Table Drawing",
            "Draw tables manually with box chars",
            Advanced,
            &["tables", "unicode"],
        ),
    ]
});

/// The full example catalog, in ordinal order.
pub fn example_catalog() -> &'static [ExampleMeta] {
    &EXAMPLES
}

/// Resolve an example from a route slug.
///
/// Exact slug match first; otherwise match on a trailing two-digit ordinal,
/// so shortened links like `/examples/05` still resolve. Returns `None` for
/// unrecognized ordinals — callers render a placeholder, never an error.
pub fn find_example(slug: &str) -> Option<&'static ExampleMeta> {
    if let Some(meta) = EXAMPLES.iter().find(|e| e.slug == slug) {
        return Some(meta);
    }

    let found = EXAMPLES
        .iter()
        .find(|e| slug.ends_with(&format!("{:02}", e.ordinal)));
    if found.is_none() {
        debug!(slug, "no example matches requested slug");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eighteen_entries_in_order() {
        let catalog = example_catalog();
        assert_eq!(catalog.len(), 18);
        for (i, meta) in catalog.iter().enumerate() {
            assert_eq!(meta.ordinal as usize, i + 1);
            assert!(meta.slug.starts_with(&format!("{:02}_", meta.ordinal)));
            assert_eq!(meta.source_file, format!("{}.rs", meta.slug));
        }
    }

    #[test]
    fn find_example_by_exact_slug() {
        let meta = find_example("10_arg_features_v2").expect("slug match");
        assert_eq!(meta.ordinal, 10);
        assert_eq!(meta.title, "Advanced Args");
    }

    #[test]
    fn find_example_by_trailing_ordinal() {
        let meta = find_example("05").expect("ordinal match");
        assert_eq!(meta.slug, "05_logger");
    }

    #[test]
    fn find_example_unknown_ordinal_is_none() {
        assert!(find_example("99_does_not_exist").is_none());
        assert!(find_example("").is_none());
    }

    #[test]
    fn early_entries_carry_inline_code() {
        for meta in &example_catalog()[..8] {
            assert!(meta.code.is_some(), "example {} missing code", meta.slug);
            assert!(meta.output.is_some(), "example {} missing output", meta.slug);
        }
    }
}
