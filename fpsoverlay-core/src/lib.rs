//! fpsoverlay core
//!
//! Everything the overlay does that is not drawing: picking a display server,
//! counting loop iterations on a background thread and handing label text
//! over to the UI thread.

pub mod counter;
pub mod display;
pub mod error;
pub mod timer;
pub mod update;
pub mod worker;

pub use counter::{CounterSettings, ElapsedPrecision, FrameCounter, Report};
pub use display::{detect, detect_with, Detection, DisplayServer};
pub use error::{OverlayError, Result};
pub use timer::{ManualTimer, SystemTimer, Timer};
pub use update::{update_channel, Label, LabelUpdate, UpdateReceiver, UpdateSender};
pub use worker::{run_counter, start_for, CounterWorker};
