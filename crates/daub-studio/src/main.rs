mod app;
mod config;

use anyhow::Context;
use daub_engine::logging::init_logging;

use crate::app::Studio;
use crate::config::StudioConfig;

fn main() -> anyhow::Result<()> {
    let config = StudioConfig::from_env();
    init_logging(config.logging.clone());

    let mut studio = Studio::new(config).context("starting studio")?;

    // One default dot so the brush is visible on first render.
    studio.paint_dot(studio.center());

    studio.save()?;
    log::info!("studio: {} dot(s) painted", studio.dot_count());
    Ok(())
}
