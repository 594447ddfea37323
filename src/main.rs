#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use birthday_core::logging::LoggingBuilder;
use birthday_core::PageConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Page config, set once before launch
static PAGE_CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Get the page config (loaded at startup, or defaults)
pub fn get_page_config() -> PageConfig {
    PAGE_CONFIG.get().cloned().unwrap_or_default()
}

/// Birthday - an animated greeting page
#[derive(Parser, Debug)]
#[command(name = "birthday-desktop")]
#[command(about = "Birthday - an animated greeting page with music and confetti")]
struct Args {
    /// Page config file (JSON). Defaults to <config dir>/birthday/page.json if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write JSONL logs under this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log filter, e.g. "birthday=debug,birthday_core=debug"
    #[arg(long)]
    log_filter: Option<String>,

    /// Do not try to start the music on load
    #[arg(long)]
    no_autoplay: bool,

    /// Skip the confetti shown on load
    #[arg(long)]
    no_confetti: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new("desktop");
    if let Some(ref dir) = args.log_dir {
        logging = logging.with_logs_dir(dir);
    }
    if let Some(ref filter) = args.log_filter {
        logging = logging.with_filter(filter);
    }
    if let Some(path) = logging.init().context("failed to initialize logging")? {
        tracing::info!("Writing session log to {:?}", path);
    }

    // An explicit config must exist; the default location is optional
    let mut config = match args.config {
        Some(ref path) => PageConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PageConfig::load_or_default(PageConfig::default_path())
            .context("failed to load default config")?,
    };
    if args.no_autoplay {
        config.audio.autoplay = false;
    }
    if args.no_confetti {
        config.celebration.on_load = false;
    }

    let title = config.content.title.clone();
    tracing::info!(
        memories = config.content.memories.len(),
        autoplay = config.audio.autoplay,
        "Starting '{}'",
        title
    );
    let _ = PAGE_CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
