//! Main entry point for the glyph-swarm binary

mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use glyph_swarm::{app, canvas, FontError, GlyphRasterizer, Scene, SceneConfig, Viewport};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_filter().as_str()),
    )
    .init();

    let config = build_config(&cli)?;
    let scene = match &cli.font {
        Some(path) => Scene::with_font(config.clone(), load_font(path, config.layout.bold)?),
        None => Scene::new(config),
    };

    match &cli.snapshot {
        Some(path) => {
            let mut scene = scene;
            let viewport = Viewport::new(cli.width, cli.height);
            let canvas = canvas::snapshot(&mut scene, viewport, cli.frames);
            canvas
                .save(path)
                .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
            log::info!(
                "wrote {} ({} particles, {} settled)",
                path.display(),
                scene.field().len(),
                scene.field().settled_count()
            );
            Ok(())
        }
        None => Ok(app::run(scene)?),
    }
}

/// Config file (or defaults) with command-line overrides applied.
fn build_config(cli: &Cli) -> Result<SceneConfig> {
    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };

    if !cli.text.is_empty() {
        config.layout.wide_lines = cli.text.clone();
        if cli.narrow_text.is_empty() {
            config.layout.narrow_lines = cli.text.clone();
        }
    }
    if !cli.narrow_text.is_empty() {
        config.layout.narrow_lines = cli.narrow_text.clone();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(feature = "ttf")]
fn load_font(path: &Path, bold: bool) -> Result<Box<dyn GlyphRasterizer>, FontError> {
    Ok(Box::new(glyph_swarm::TtfFont::load(path, bold)?))
}

#[cfg(not(feature = "ttf"))]
fn load_font(path: &Path, _bold: bool) -> Result<Box<dyn GlyphRasterizer>, FontError> {
    log::error!("cannot load {}: built without the `ttf` feature", path.display());
    Err(FontError::Unsupported)
}
