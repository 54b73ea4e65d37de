#![allow(non_snake_case)]

mod app;
mod catalog;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use shopfront_core::logging::init_logging;
use shopfront_core::PageConfig;

/// Page config resolved at startup
static PAGE_CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Get the page config (set at startup, defaults otherwise)
pub fn get_page_config() -> PageConfig {
    PAGE_CONFIG.get().cloned().unwrap_or_default()
}

/// Shopfront - product listing page with search, preview and shortcuts
#[derive(Parser, Debug)]
#[command(name = "shopfront-desktop")]
#[command(about = "Shopfront - interactive product listing page")]
struct Args {
    /// Page config file (JSON); defaults to <config dir>/shopfront/page.json if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window title
    #[arg(short, long, default_value = "Shopfront")]
    title: String,

    /// Log filter directives (e.g. "shopfront_core=debug"); overrides RUST_LOG
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.log_filter.as_deref())?;

    let config = PageConfig::load_or_default(args.config.as_deref())?;
    let _ = PAGE_CONFIG.set(config);

    tracing::info!(
        config_dir = ?dirs::config_dir(),
        "Starting '{}'",
        args.title
    );

    // Window size: listing grid fits four cards across
    let window_width = 1280.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
