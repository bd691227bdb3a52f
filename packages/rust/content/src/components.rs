//! The component catalog: one entry per component documentation page.

use std::sync::LazyLock;

use zfishdocs_shared::{CodeSection, ComponentMeta};

fn section(title: &str, description: &str, code: &str, output: Option<&str>) -> CodeSection {
    CodeSection {
        title: title.into(),
        description: description.into(),
        code: code.into(),
        language: "rust".into(),
        output: output.map(Into::into),
    }
}

static COMPONENTS: LazyLock<Vec<ComponentMeta>> = LazyLock::new(|| {
    vec![
        ComponentMeta {
            slug: "args".into(),
            title: "Argument Parsing".into(),
            description: "Command-line argument parsing with flags, options, and subcommands"
                .into(),
            icon: "⚙️".into(),
            sections: vec![
                section(
                    "Basic Argument Parsing",
                    "Parse command-line arguments with Args",
                    r#"use zfish::Args;

// Parse command-line arguments
let args = Args::parse();

println!("Command: {}", args.command);

// Check for flags
if args.has_flag("verbose") || args.has_flag("v") {
    println!("Verbose mode enabled");
}

// Get positional arguments
if !args.positional.is_empty() {
    println!("Files: {:?}", args.positional);
}"#,
                    Some("Command: myapp\nVerbose mode enabled\nFiles: [\"input.txt\", \"output.txt\"]"),
                ),
                section(
                    "Options with Values",
                    "Parse options that accept values",
                    r#"use zfish::Args;

let args = Args::parse();

// Get option values
if let Some(output) = args.get_option("output").or_else(|| args.get_option("o")) {
    println!("Output file: {}", output);
}

if let Some(count) = args.get_option("count") {
    let count: usize = count.parse().unwrap();
    println!("Count: {}", count);
}

// Usage: myapp --output file.txt --count 5"#,
                    Some("Output file: file.txt\nCount: 5"),
                ),
                section(
                    "Short Flags",
                    "Support short single-letter flags",
                    r#"use zfish::args::Args;

let mut args = Args::new();

// Add flags with short versions
args.add_flag_with_short("verbose", 'v', "Verbose output");
args.add_flag_with_short("quiet", 'q', "Quiet mode");
args.add_flag_with_short("force", 'f', "Force operation");

let matches = args.parse()?;

// Can use either --verbose or -v
if matches.get_flag("verbose") {
    println!("Verbose mode");
}

// Can combine: -vf for --verbose --force
if matches.get_flag("force") {
    println!("Force mode");
}"#,
                    Some("Verbose mode\nForce mode"),
                ),
            ],
        },
        ComponentMeta {
            slug: "colors".into(),
            title: "Colors & Styles".into(),
            description: "Rich terminal coloring with 16, 256, and true color support".into(),
            icon: "🎨".into(),
            sections: vec![
                section(
                    "Basic Colors",
                    "16 standard ANSI colors",
                    r#"use zfish::style::Color;

// Print with basic colors
print("Red text", Color::Red);
print("Green text", Color::Green);
print("Blue text", Color::Blue);
print("Yellow text", Color::Yellow);

// Bright variants
print("Bright red", Color::BrightRed);
print("Bright green", Color::BrightGreen);"#,
                    Some("Red textGreen textBlue textYellow textBright redBright green"),
                ),
                section(
                    "256-Color Palette",
                    "Extended color palette with 256 colors",
                    r#"use zfish::style::Color;

// Use 256-color palette with Custom(n)
println!("{}", Color::Custom(208).paint("Orange"));
println!("{}", Color::Custom(129).paint("Purple"));
println!("{}", Color::Custom(213).paint("Pink"));

// Colors range from 0-255
for i in [196, 202, 208, 214, 220, 226] {
    println!("{}", Color::Custom(i).paint(format!("Color {}", i)));
}"#,
                    Some("Orange\nPurple\nPink\nColor 196\nColor 202..."),
                ),
                section(
                    "Combined Styles",
                    "Mix colors with multiple text styles",
                    r#"use zfish::style::{Color, Style};

// Combine multiple styles
println!("{}", Color::Cyan
    .paint("Bold + Italic + Underline")
    .style(Style::Bold)
    .style(Style::Italic)
    .style(Style::Underline)
);"#,
                    Some("Bold + Italic + Underline"),
                ),
            ],
        },
        ComponentMeta {
            slug: "progress".into(),
            title: "Progress Bars".into(),
            description: "Beautiful progress bars with multiple styles and real-time updates"
                .into(),
            icon: "📊".into(),
            sections: vec![
                section(
                    "Basic Progress Bar",
                    "Simple progress bar with updates",
                    r#"use zfish::ProgressBar;
use std::thread;
use std::time::Duration;

let mut pb = ProgressBar::new(100);

for i in 0..=100 {
    pb.set(i);
    thread::sleep(Duration::from_millis(50));
}

pb.finish("✓ Complete!");"#,
                    Some(
                        "[========================================] 100.0% (100/100) 2000.0/s ETA: 0.0s\n✓ Complete!",
                    ),
                ),
                section(
                    "Incremental Progress",
                    "Update progress incrementally with .inc()",
                    r#"use zfish::ProgressBar;
use std::time::Duration;

let mut pb = ProgressBar::new(50);

for _ in 0..50 {
    pb.inc(1);
    std::thread::sleep(Duration::from_millis(30));
}

pb.finish("✓ Incremental done!");"#,
                    Some(
                        "[========================================] 100.0% (50/50) 1666.7/s ETA: 0.0s\n✓ Incremental done!",
                    ),
                ),
                section(
                    "Custom Style",
                    "Different progress bar styles",
                    r#"use zfish::{ProgressBar, ProgressStyle};

// Classic style (default): [==========          ]
let mut pb = ProgressBar::new(100);

// Arrow style: [=========>          ]
let mut pb = ProgressBar::new(100).with_style(ProgressStyle::Arrow);

// Dots style: [**********          ]
let mut pb = ProgressBar::new(100).with_style(ProgressStyle::Dots);

// Custom width
let mut pb = ProgressBar::new(80).width(60);"#,
                    None,
                ),
            ],
        },
        ComponentMeta {
            slug: "tables".into(),
            title: "Tables".into(),
            description: "Automated table rendering with Unicode support and custom styling"
                .into(),
            icon: "📋".into(),
            sections: vec![
                section(
                    "Basic Table",
                    "Create a simple table with headers and rows",
                    r#"use zfish::table::Table;

// Create table with headers
let mut table = Table::new(vec!["Name", "Age", "City"]);

// Add data rows
table.add_row(vec!["Alice", "25", "New York"]);
table.add_row(vec!["Bob", "30", "London"]);
table.add_row(vec!["Charlie", "28", "Tokyo"]);

// Print the table
table.print();"#,
                    Some(
                        "┌─────────┬─────┬──────────┐\n│ Name    │ Age │ City     │\n├─────────┼─────┼──────────┤\n│ Alice   │ 25  │ New York │\n│ Bob     │ 30  │ London   │\n│ Charlie │ 28  │ Tokyo    │\n└─────────┴─────┴──────────┘",
                    ),
                ),
                section(
                    "Styled Table",
                    "Customize table appearance with colors and styles",
                    r#"use zfish::table::Table;
use zfish::style::Color;

let mut table = Table::new(vec!["Product", "Price", "Stock"]);
table.set_box_style(BoxStyle::Double);

table.add_row(&["Laptop", "$999", "In Stock"]);
table.add_row(&["Mouse", "$25", "Low Stock"]);
table.add_row(&["Keyboard", "$75", "Out of Stock"]);

// Set border color
table.set_border_color(Color::Blue);

table.print();"#,
                    Some(
                        "┌──────────┬───────┬──────────────┐\n│ Product  │ Price │ Stock        │\n├──────────┼───────┼──────────────┤\n│ Laptop   │ $999  │ In Stock     │\n│ Mouse    │ $25   │ Low Stock    │\n│ Keyboard │ $75   │ Out of Stock │\n└──────────┴───────┴──────────────┘",
                    ),
                ),
                section(
                    "Column Alignment",
                    "Align columns left, center, or right",
                    r#"use zfish::table::{Table, Alignment};

let mut table = Table::new(vec!["Item", "Quantity", "Price"]);

// Set column alignments
table.set_column_alignment(0, Alignment::Left);
table.set_column_alignment(1, Alignment::Center);
table.set_column_alignment(2, Alignment::Right);

table.add_row(vec!["Apple", "10", "$1.50"]);
table.print();"#,
                    None,
                ),
            ],
        },
        ComponentMeta {
            slug: "prompts".into(),
            title: "Interactive Prompts".into(),
            description: "User-friendly prompts for input, confirmation, and selection".into(),
            icon: "❓".into(),
            sections: vec![
                section(
                    "Confirmation Prompt",
                    "Ask yes/no questions",
                    r#"use zfish::Prompt;

// Prompt for yes/no confirmation
// Second parameter is default value
let answer = Prompt::confirm("Do you want to continue?", true)?;

if answer {
    println!("Continuing...");
} else {
    println!("Aborted.");
}"#,
                    Some("Do you want to continue? [Y/n] y\nContinuing..."),
                ),
                section(
                    "Text Input",
                    "Get text input from users",
                    r#"use zfish::Prompt;

// Prompt for text input
let name = Prompt::input("What is your name?")?;

println!("Hello, {}!", name);

// Alternative: Prompt::text() (alias for input)
let lang = Prompt::text("Favorite language?")?;
println!("You chose: {}", lang);"#,
                    Some(
                        "What is your name? John Doe\nHello, John Doe!\nFavorite language? Rust\nYou chose: Rust",
                    ),
                ),
                section(
                    "Password Input",
                    "Securely collect password input (hidden)",
                    r#"use zfish::Prompt;

// Prompt for password with hidden input
let password = Prompt::password("Enter password:")?;

println!("✓ Password accepted (hidden)");"#,
                    Some("Enter password: \n✓ Password accepted (hidden)"),
                ),
            ],
        },
        ComponentMeta {
            slug: "logger".into(),
            title: "Logger".into(),
            description: "Structured logging with levels, colors, and flexible output".into(),
            icon: "📝".into(),
            sections: vec![
                section(
                    "Basic Logging",
                    "Log messages with different severity levels",
                    r#"use zfish::log::{Logger, Level};

let logger = Logger::new();

logger.info("Application started");
logger.warn("This is a warning");
logger.error("An error occurred");
logger.debug("Debug information");
logger.trace("Trace message");"#,
                    Some(
                        "[INFO] Application started\n[WARN] This is a warning\n[ERROR] An error occurred\n[DEBUG] Debug information\n[TRACE] Trace message",
                    ),
                ),
                section(
                    "Custom Log Levels",
                    "Set minimum log level to filter messages",
                    r#"use zfish::log::{Logger, Level};

// Set log level using builder pattern
let logger = Logger::new().level(Level::Warn);

// These will be shown
logger.error("Error message");
logger.warn("Warning message");

// These will be hidden (below Warn level)
logger.info("Info message");
logger.debug("Debug message");"#,
                    Some("[ERROR] Error message\n[WARN] Warning message"),
                ),
                section(
                    "Formatted Logging",
                    "Use format strings in log messages",
                    r#"use zfish::log::Logger;

let logger = Logger::new();
let user = "Alice";
let count = 42;

logger.info(&format!("User {} logged in", user));
logger.debug(&format!("Processing {} items", count));
logger.error(&format!("Failed to process item {}", count));"#,
                    Some(
                        "[INFO] User Alice logged in\n[DEBUG] Processing 42 items\n[ERROR] Failed to process item 42",
                    ),
                ),
            ],
        },
        ComponentMeta {
            slug: "terminal".into(),
            title: "Terminal Control".into(),
            description: "Full terminal manipulation with cursor control and screen management"
                .into(),
            icon: "🖥️".into(),
            sections: vec![
                section(
                    "Clear Screen",
                    "Clear the terminal screen",
                    r#"use zfish::term::Terminal;

// Clear entire screen
Terminal::clear_screen()?;

// Move to top-left corner
Terminal::move_cursor(1, 1)?;
println!("Screen cleared!");"#,
                    Some("(Terminal screen cleared)"),
                ),
                section(
                    "Cursor Movement",
                    "Move the cursor to specific positions",
                    r#"use zfish::term::Terminal;

// Move cursor to position (row, col) - 1-indexed
Terminal::move_cursor(10, 5)?;

// Print at specific position
Terminal::print_at(5, 10, "Hello at row 5, col 10")?;"#,
                    Some("(Cursor moved to specified positions)"),
                ),
                section(
                    "Terminal Size",
                    "Get the current terminal dimensions",
                    r#"use zfish::term::Terminal;

// Get terminal size (width, height)
if let Some((width, height)) = Terminal::size() {
    println!("Terminal size: {}x{}", width, height);
} else {
    println!("Could not detect terminal size");
}"#,
                    Some("Terminal size: 80x24"),
                ),
                section(
                    "Hide/Show Cursor",
                    "Control cursor visibility",
                    r#"use zfish::term;

// Hide cursor
term::hide_cursor()?;

// Do some work...
std::thread::sleep(std::time::Duration::from_secs(2));

// Show cursor again
term::show_cursor()?;"#,
                    Some("(Cursor hidden during operation, then shown again)"),
                ),
            ],
        },
    ]
});

/// The full component catalog, in index-page order.
pub fn component_catalog() -> &'static [ComponentMeta] {
    &COMPONENTS
}

/// Resolve a component page by its route slug.
pub fn find_component(slug: &str) -> Option<&'static ComponentMeta> {
    COMPONENTS.iter().find(|c| c.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_seven_components() {
        assert_eq!(component_catalog().len(), 7);
    }

    #[test]
    fn every_component_has_sections() {
        for component in component_catalog() {
            assert!(
                !component.sections.is_empty(),
                "component {} has no code sections",
                component.slug
            );
        }
    }

    #[test]
    fn find_component_by_slug() {
        let colors = find_component("colors").expect("colors component");
        assert_eq!(colors.title, "Colors & Styles");
        assert!(find_component("spinner").is_none());
    }
}
