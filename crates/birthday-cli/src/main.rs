//! Birthday page CLI
//!
//! Config scaffolding and a headless walk through the page's section
//! navigation, using the same core the desktop app runs on.
//!
//! ## Usage
//!
//! ```bash
//! # Write the default config to <config dir>/birthday/page.json
//! birthday config init
//!
//! # Print the effective config
//! birthday config show --path ./page.json
//!
//! # Validate a config file
//! birthday config check --path ./page.json
//!
//! # Print the page content
//! birthday content
//!
//! # Click through every nav entry on a simulated 900px window
//! birthday tour --viewport 900
//!
//! # Only jump to one section
//! birthday tour --to wishes
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use birthday_core::logging::LoggingBuilder;
use birthday_core::{PageConfig, PageContent, Section, SectionNavigator, SimulatedViewport, VisibilitySource};
use chrono::Local;
use clap::{Parser, Subcommand};

/// Section heights used by `tour` when none are given, roughly what the
/// page renders at desktop width.
const DEFAULT_LAYOUT: [(Section, f64); 4] = [
    (Section::Greeting, 1000.0),
    (Section::Gallery, 1600.0),
    (Section::Message, 1200.0),
    (Section::Wishes, 900.0),
];

/// Birthday - an animated greeting page
#[derive(Parser)]
#[command(name = "birthday")]
#[command(version = "0.1.0")]
#[command(about = "Birthday page tools - config and headless navigation tours")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Also write JSONL logs under this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Config file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print the page content
    Content {
        /// Config file (default: <config dir>/birthday/page.json if present)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Drive the section navigator through a simulated smooth scroll
    Tour {
        /// Viewport height in pixels
        #[arg(long, default_value_t = 900.0)]
        viewport: f64,

        /// Jump to this section only (default: every section, then back)
        #[arg(long)]
        to: Option<Section>,

        /// Animation frames per jump
        #[arg(long, default_value_t = 30)]
        frames: usize,

        /// Config file to take the threshold from
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default config
    Init {
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config as JSON
    Show {
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Validate a config file
    Check {
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

fn setup_logging(verbosity: u8, log_dir: Option<&Path>) -> Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let mut logging = LoggingBuilder::new("cli").with_filter(filter);
    if let Some(dir) = log_dir {
        logging = logging.with_logs_dir(dir);
    }
    logging.init().context("failed to initialize logging")?;
    Ok(())
}

fn config_path(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(PageConfig::default_path)
}

fn load_config(path: Option<PathBuf>) -> Result<PageConfig> {
    let path = config_path(path);
    PageConfig::load_or_default(&path)
        .with_context(|| format!("failed to load config {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.log_dir.as_deref())?;

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Init { path, force } => {
                let path = config_path(path);
                if path.exists() && !force {
                    bail!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    );
                }
                PageConfig::default()
                    .save(&path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Wrote default config to {}", path.display());
            }
            ConfigAction::Show { path } => {
                let config = load_config(path)?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Check { path } => {
                let path = config_path(path);
                let config = PageConfig::load(&path)
                    .with_context(|| format!("invalid config {}", path.display()))?;
                println!("Config OK: {}", path.display());
                println!("  Memories: {}", config.content.memories.len());
                println!("  Wishes: {}", config.content.wishes.len());
                println!(
                    "  Autoplay: {}",
                    if config.audio.autoplay { "on" } else { "off" }
                );
                println!("  Celebration: {}s", config.celebration.duration_secs);
            }
        },

        Commands::Content { path, json } => {
            let config = load_config(path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config.content)?);
            } else {
                print_content(&config.content);
            }
        }

        Commands::Tour {
            viewport,
            to,
            frames,
            path,
        } => {
            if !(viewport > 0.0) {
                bail!("viewport must be positive, got {}", viewport);
            }
            let config = load_config(path)?;
            tour(viewport, config.navigation.threshold, to, frames)?;
        }
    }

    Ok(())
}

fn print_content(content: &PageContent) {
    let date = &content.special_date;
    let years = date.years_since(Local::now().date_naive());

    println!("{}", content.title);
    println!();
    println!("Happy Birthday, {}", content.recipient);
    println!("  {}", content.tagline);
    println!();
    println!("Special date: {} ({})", date.long_date(), date.weekday_name());
    println!("  {} years ago", years);
    println!();
    println!("Memories ({}):", content.memories.len());
    for (index, memory) in content.memories.iter().enumerate() {
        println!("  {}. {} [{}]", index + 1, memory.caption, memory.src);
    }
    println!();
    println!("Letter:");
    for paragraph in &content.letter.paragraphs {
        println!("  {}", paragraph);
    }
    println!("  {}", content.letter.signature);
    println!();
    println!("Wishes ({}):", content.wishes.len());
    for wish in &content.wishes {
        println!("  {}: {}", wish.title, wish.text);
    }
}

/// Navigate like a visitor clicking the nav, printing every change of the
/// highlighted section while the page scrolls.
fn tour(viewport_height: f64, threshold: f64, to: Option<Section>, frames: usize) -> Result<()> {
    let mut viewport = SimulatedViewport::stacked(viewport_height, &DEFAULT_LAYOUT, threshold);
    let mut navigator: SectionNavigator<f64> = SectionNavigator::new();

    for section in Section::ALL {
        viewport.subscribe(section)?;
        navigator.register(section, viewport.offset_of(section));
    }

    let initial = viewport.sample();
    navigator.observe(&initial);
    println!(
        "Viewport {}px, page {}px, threshold {}",
        viewport_height,
        viewport.document_height(),
        threshold
    );
    println!("start: {}", navigator.active());

    let targets: Vec<Section> = match to {
        Some(section) => vec![section],
        None => vec![
            Section::Gallery,
            Section::Message,
            Section::Wishes,
            Section::Greeting,
        ],
    };

    for target in targets {
        let Some(offset) = navigator.go_to(target) else {
            println!("go to {}: not on the page", target);
            continue;
        };
        println!("go to {} (scroll to {:.0}px)", target, offset);

        let mut shown = navigator.active();
        for batch in viewport.smooth_scroll(offset, frames) {
            navigator.observe(&batch);
            if navigator.active() != shown {
                shown = navigator.active();
                println!("  y={:>6.0}  active: {}", viewport.scroll_y(), shown);
            }
        }

        navigator.settle();
        println!("settled: {}", navigator.active());
        tracing::debug!(%target, active = %navigator.active(), "Tour step finished");
    }

    viewport.unsubscribe_all();
    Ok(())
}
