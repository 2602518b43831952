//! Background counting thread
//!
//! One per process. Owns its [`FrameCounter`], posts label text through an
//! [`UpdateSender`] and stops when its flag is raised.

use crate::counter::{CounterSettings, FrameCounter};
use crate::display::{Detection, DisplayServer};
use crate::error::{OverlayError, Result};
use crate::timer::Timer;
use crate::update::{Label, UpdateSender};
use log::{error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

const THREAD_NAME: &str = "fps-counter";

/// Run the counting loop on the current thread until `stop` is set.
pub fn run_counter<T: Timer>(
    mut counter: FrameCounter,
    timer: &T,
    sender: &UpdateSender,
    stop: &AtomicBool,
) {
    let tick_interval = counter.settings().tick_interval();
    let precision = counter.settings().elapsed_precision;

    while !stop.load(Ordering::Acquire) {
        if let Some(report) = counter.tick(timer.now()) {
            sender.post(Label::Fps, &report.fps_text());
            sender.post(Label::Stats, &report.stats_text(precision));
        }
        timer.sleep(tick_interval);
    }
}

/// Handle to the running counting thread.
pub struct CounterWorker {
    server: DisplayServer,
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl CounterWorker {
    pub fn spawn<T: Timer>(
        server: DisplayServer,
        settings: CounterSettings,
        timer: T,
        sender: UpdateSender,
    ) -> Result<Self> {
        let counter = FrameCounter::new(settings, Some(server), timer.now());
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || {
                info!("Running on {}: FPS calculation started.", server);
                run_counter(counter, &timer, &sender, &thread_stop);
            })?;

        Ok(Self {
            server,
            stop,
            handle,
        })
    }

    pub fn server(&self) -> DisplayServer {
        self.server
    }

    /// Ask the loop to exit after its current iteration.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(self) -> Result<()> {
        self.stop();
        self.handle.join().map_err(|_| OverlayError::WorkerPanicked)?;
        info!("FPS calculation on {} stopped", self.server);
        Ok(())
    }
}

/// Start the counting thread matching `detection`.
///
/// An unsupported display server starts nothing.
pub fn start_for<T: Timer>(
    detection: Detection,
    settings: CounterSettings,
    timer: T,
    sender: UpdateSender,
) -> Result<Option<CounterWorker>> {
    match detection {
        Detection::Supported(server) => {
            info!("Detected {} display server.", server);
            CounterWorker::spawn(server, settings, timer, sender).map(Some)
        }
        Detection::Unsupported => {
            error!("Cannot run on the current display server.");
            Ok(None)
        }
    }
}
