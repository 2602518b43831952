// Overlay entry point
use anyhow::Context;
use fpsoverlay_core::{detect, start_for, update_channel, SystemTimer};
use fpsoverlay_ui::app::{self, OverlayApp};
use fpsoverlay_ui::config::OverlayConfig;
use iced::Application;
use log::{info, warn};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = OverlayConfig::load().unwrap_or_else(|e| {
        warn!("{:#}, using defaults", e);
        OverlayConfig::default()
    });

    let detection = detect();
    let (sender, receiver) = update_channel();
    let worker = start_for(detection, config.counter.clone(), SystemTimer, sender)
        .context("Failed to start FPS calculation")?;
    let updates = worker.as_ref().map(|_| receiver);

    let result = OverlayApp::run(app::settings(config, detection, updates));

    if let Some(worker) = worker {
        worker.shutdown().context("Failed to stop FPS calculation")?;
    }
    result.map_err(|e| anyhow::anyhow!("Overlay window failed: {}", e))?;
    info!("Overlay closed");
    Ok(())
}
