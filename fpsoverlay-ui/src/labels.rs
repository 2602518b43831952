// The two overlay labels. Only the UI thread writes them.
use fpsoverlay_core::{Detection, Label, LabelUpdate};

pub const INITIAL_FPS_TEXT: &str = "FPS: 0";
pub const INITIAL_STATS_TEXT: &str = "Frame count: 0\nElapsed time: 0 s";
pub const UNSUPPORTED_TEXT: &str = "Unsupported display server.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLabels {
    pub fps: String,
    pub stats: String,
}

impl OverlayLabels {
    /// Placeholder text for a freshly built window.
    pub fn for_detection(detection: Detection) -> Self {
        let fps = if detection.is_supported() {
            INITIAL_FPS_TEXT
        } else {
            UNSUPPORTED_TEXT
        };
        Self {
            fps: fps.to_string(),
            stats: INITIAL_STATS_TEXT.to_string(),
        }
    }

    pub fn apply(&mut self, update: &LabelUpdate) {
        let target = match update.label {
            Label::Fps => &mut self.fps,
            Label::Stats => &mut self.stats,
        };
        target.clone_from(&update.text);
    }

    pub fn get(&self, label: Label) -> &str {
        match label {
            Label::Fps => &self.fps,
            Label::Stats => &self.stats,
        }
    }
}
