//! Interactive demo: walk the textured room.
//!
//! ```bash
//! cargo run --release -- --assets assets --downscale 2
//! RUST_LOG=debug cargo run -- --config linecast.toml
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use linecast::{
    config::Config,
    game::{RaycastGame, demo_scene},
    platform::Canvas,
    world::ImageFileDecoder,
};

/// CLI options handled via `clap` derive; flags win over the config file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Directory holding floor.png, ceiling.png, bricks.png and pillar.png
    #[arg(long, value_name = "DIR", default_value = "./assets")]
    assets: PathBuf,

    /// TOML settings file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<usize>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<usize>,

    /// Window pixels per framebuffer pixel (1-6)
    #[arg(long)]
    downscale: Option<usize>,

    /// Starting field of view in degrees
    #[arg(long)]
    fov: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let opts = Opts::parse();

    let mut cfg = match &opts.config {
        Some(path) => Config::load(path).context("reading settings")?,
        None => Config::default(),
    };
    if let Some(w) = opts.width {
        cfg.window.width = w;
    }
    if let Some(h) = opts.height {
        cfg.window.height = h;
    }
    if let Some(ds) = opts.downscale {
        cfg.window.downscale = ds;
    }
    if let Some(fov) = opts.fov {
        cfg.viewer.fov_deg = fov;
    }

    let scene = demo_scene(&opts.assets, &ImageFileDecoder, &cfg.geometry)
        .with_context(|| format!("building scene from {}", opts.assets.display()))?;

    let mut canvas = Canvas::new(&cfg.window).context("opening window")?;
    let mut game = RaycastGame::new(cfg, scene);
    canvas.run(&mut game).context("main loop")?;

    info!("bye");
    Ok(())
}
