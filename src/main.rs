#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portal_core::ClientConfig;
use tracing_subscriber::EnvFilter;

/// Global client configuration, set once at startup
static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Get the client configuration (loaded at startup or default)
pub fn get_config() -> ClientConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Portal - account pages and form components
#[derive(Parser, Debug)]
#[command(name = "portal-desktop")]
#[command(about = "Portal - sign-in, registration and account pages")]
struct Args {
    /// Config file (default: <config dir>/portal/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of page bundle overrides (<page>.json)
    #[arg(short, long)]
    pages_dir: Option<PathBuf>,

    /// Start signed in as this email (development only)
    #[arg(long)]
    signed_in: Option<String>,

    /// Window title
    #[arg(short, long)]
    title: Option<String>,
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portal")
        .join("config.json")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ClientConfig::load_or_default(&default_config_path())
            .context("loading default config")?,
    };

    // Command line wins over the file
    if let Some(dir) = args.pages_dir {
        config.pages_dir = Some(dir);
    }
    if let Some(email) = args.signed_in {
        config.signed_in_as = Some(email);
    }
    if let Some(title) = args.title {
        config.title = title;
    }

    tracing::info!(
        "Starting '{}' (pages: {:?})",
        config.title,
        config.pages_dir.as_deref().unwrap_or(std::path::Path::new("builtin"))
    );

    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(dioxus::desktop::LogicalSize::new(
            config.window_width,
            config.window_height,
        ))
        .with_resizable(true);

    let _ = CONFIG.set(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);

    Ok(())
}
