//! Display-server detection
//!
//! Decided once at startup from the environment. Only the presence of a
//! variable matters, never its value.

use std::env;
use std::ffi::OsString;
use std::fmt;

pub const WAYLAND_DISPLAY_VAR: &str = "WAYLAND_DISPLAY";
pub const X11_DISPLAY_VAR: &str = "DISPLAY";

/// Platform variant the counting loop runs as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayServer {
    Windows,
    X11,
    Wayland,
}

impl DisplayServer {
    /// Tag shown next to the FPS value.
    pub fn tag(self) -> &'static str {
        match self {
            DisplayServer::Windows => "Windows",
            DisplayServer::X11 => "X11",
            DisplayServer::Wayland => "Wayland",
        }
    }
}

impl fmt::Display for DisplayServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Outcome of [`detect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    Supported(DisplayServer),
    Unsupported,
}

impl Detection {
    pub fn display_server(self) -> Option<DisplayServer> {
        match self {
            Detection::Supported(server) => Some(server),
            Detection::Unsupported => None,
        }
    }

    pub fn is_supported(self) -> bool {
        matches!(self, Detection::Supported(_))
    }
}

/// Detect the display server of the running process.
///
/// Windows builds have a single variant and skip the environment entirely.
pub fn detect() -> Detection {
    if cfg!(target_os = "windows") {
        return Detection::Supported(DisplayServer::Windows);
    }
    detect_with(|name| env::var_os(name))
}

/// Detect using an arbitrary variable lookup. Wayland takes priority over X11.
pub fn detect_with<F>(lookup: F) -> Detection
where
    F: Fn(&str) -> Option<OsString>,
{
    if lookup(WAYLAND_DISPLAY_VAR).is_some() {
        Detection::Supported(DisplayServer::Wayland)
    } else if lookup(X11_DISPLAY_VAR).is_some() {
        Detection::Supported(DisplayServer::X11)
    } else {
        Detection::Unsupported
    }
}
