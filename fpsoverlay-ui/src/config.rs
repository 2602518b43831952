// Overlay settings, read from the user's config directory
use anyhow::{Context, Result};
use fpsoverlay_core::CounterSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OverlayConfig {
    pub window: WindowConfig,
    pub counter: CounterSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    pub spacing: f32,
    pub padding: f32,
    /// Alpha of the black window background.
    pub background_alpha: f32,
    pub always_on_top: bool,
    pub decorations: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 100.0,
            x: 0.0,
            y: 0.0,
            spacing: 5.0,
            padding: 0.0,
            background_alpha: 0.18,
            always_on_top: true,
            decorations: false,
        }
    }
}

impl OverlayConfig {
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("fpsoverlay");
        path.push("config.json");
        path
    }

    /// Load from the default location. The file is never written back.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: OverlayConfig =
            serde_json::from_str(&content).context("Failed to parse config file")?;
        config.window.background_alpha = config.window.background_alpha.clamp(0.0, 1.0);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpsoverlay_core::ElapsedPrecision;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = OverlayConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, OverlayConfig::default());
        assert_eq!(config.counter.tick_interval_ms, 16);
        assert_eq!(config.window.background_alpha, 0.18);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "window": { "x": 40.0 }, "counter": { "elapsed_precision": "Centiseconds" } }"#,
        )
        .unwrap();

        let config = OverlayConfig::load_from(&path).unwrap();
        assert_eq!(config.window.x, 40.0);
        assert_eq!(config.window.width, 200.0);
        assert_eq!(config.counter.elapsed_precision, ElapsedPrecision::Centiseconds);
        assert_eq!(config.counter.report_interval_ms, 1000);
    }

    #[test]
    fn test_alpha_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "window": { "background_alpha": 3.5 } }"#).unwrap();
        let config = OverlayConfig::load_from(&path).unwrap();
        assert_eq!(config.window.background_alpha, 1.0);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = OverlayConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
