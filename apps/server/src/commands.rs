//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use zfishdocs_render::{
    PreviewParams, render_og_image, render_robots, render_sitemap, render_twitter_image,
};
use zfishdocs_shared::{default_config_path, init_config_at, load_config};

use crate::routes::build_router;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// ZFish docs — serve the documentation site for the ZFish CLI framework.
#[derive(Parser)]
#[command(
    name = "zfishdocs",
    version,
    about = "Serve the ZFish documentation site.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the config file (defaults to zfishdocs.toml).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Start the documentation HTTP server.
    Serve {
        /// Bind address (overrides config).
        #[arg(long)]
        bind: Option<String>,

        /// Port (overrides config).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Write the static responses (robots, sitemap, preview images) to disk.
    Export {
        /// Output directory.
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "zfishdocs=info",
        1 => "zfishdocs=debug",
        _ => "zfishdocs=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Serve { bind, port } => cmd_serve(config_path, bind.as_deref(), port).await,
        Command::Export { out } => cmd_export(config_path, &out),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(config_path),
            ConfigAction::Show => cmd_config_show(config_path),
        },
    }
}

async fn cmd_serve(
    config_path: Option<&Path>,
    bind: Option<&str>,
    port: Option<u16>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(bind) = bind {
        config.server.bind = bind.to_string();
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let router = build_router(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("cannot bind to {addr}: {e}"))?;

    info!(%addr, "documentation server listening");
    axum::serve(listener, router).await?;

    Ok(())
}

fn cmd_export(config_path: Option<&Path>, out: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    std::fs::create_dir_all(out)?;

    let now = Utc::now();
    let defaults = PreviewParams::default();

    std::fs::write(out.join("robots.txt"), render_robots(&config))?;
    std::fs::write(out.join("sitemap.xml"), render_sitemap(&config, now))?;
    std::fs::write(out.join("og.svg"), render_og_image(&defaults))?;
    std::fs::write(out.join("twitter-og.svg"), render_twitter_image(&defaults))?;

    info!(out = %out.display(), "exported static responses");
    println!("Exported robots.txt, sitemap.xml, og.svg, twitter-og.svg to {}", out.display());
    Ok(())
}

fn cmd_config_init(config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);
    let path = init_config_at(&path)?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
