use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slidecanvas::{run_slidecanvas, CanvasConfig};

#[derive(Parser)]
#[command(name = "slidecanvas", version, about = "Drawing canvas with slide-distance tracking and animated curves")]
struct Cli {
    /// Config file (defaults to ~/.slidecanvas/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding <name>.rhai custom functions
    #[arg(short = 'd', long)]
    functions_dir: Option<PathBuf>,

    /// Initial canvas width
    #[arg(long)]
    width: Option<f64>,

    /// Initial canvas height
    #[arg(long)]
    height: Option<f64>,

    /// Write the effective configuration to the default path and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CanvasConfig::load_from_path(path)?,
        None => CanvasConfig::load_or_default(),
    };
    if let Some(dir) = cli.functions_dir {
        config.functions_dir = dir;
    }
    if let Some(w) = cli.width.filter(|w| *w > 0.0) {
        config.canvas_width = w;
    }
    if let Some(h) = cli.height.filter(|h| *h > 0.0) {
        config.canvas_height = h;
    }

    if cli.write_config {
        let path = config.save_to_default_path()?;
        tracing::info!(path = %path.display(), "configuration written");
        return Ok(());
    }

    tracing::info!(functions_dir = %config.functions_dir.display(), "starting canvas");
    run_slidecanvas(config, None)?;
    Ok(())
}
