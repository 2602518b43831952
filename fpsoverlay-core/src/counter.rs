//! Self-timed frame counter
//!
//! Counts iterations of the counting loop and, once per reporting interval,
//! turns the count into a "frames per second" rate. The counter owns all of
//! its state; the worker thread moves it in at spawn time.

use crate::display::DisplayServer;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// How the stats line prints the elapsed time of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ElapsedPrecision {
    /// `Elapsed time: 1 s`
    #[default]
    WholeSeconds,
    /// `Elapsed time: 1.01 s`
    Centiseconds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterSettings {
    pub tick_interval_ms: u64,
    pub report_interval_ms: u64,
    pub elapsed_precision: ElapsedPrecision,
    /// Report the finished interval's count in the stats line instead of the
    /// freshly reset one.
    pub report_interval_totals: bool,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 16, // ~60 FPS
            report_interval_ms: 1000,
            elapsed_precision: ElapsedPrecision::WholeSeconds,
            report_interval_totals: false,
        }
    }
}

impl CounterSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn report_interval(&self) -> Duration {
        Duration::from_millis(self.report_interval_ms)
    }
}

/// One rate report, emitted when a reporting interval completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub rate: u32,
    /// Value shown as "Frame count". The post-reset count unless
    /// [`CounterSettings::report_interval_totals`] is set.
    pub frame_count: u32,
    pub elapsed: Duration,
    /// New interval origin.
    pub at: Instant,
    pub platform: Option<DisplayServer>,
}

impl Report {
    pub fn fps_text(&self) -> String {
        match self.platform {
            Some(platform) => format!("FPS: {} ({})", self.rate, platform.tag()),
            None => format!("FPS: {}", self.rate),
        }
    }

    pub fn stats_text(&self, precision: ElapsedPrecision) -> String {
        let elapsed = match precision {
            ElapsedPrecision::WholeSeconds => self.elapsed.as_secs().to_string(),
            ElapsedPrecision::Centiseconds => format!("{:.2}", self.elapsed.as_secs_f64()),
        };
        format!("Frame count: {}\nElapsed time: {} s", self.frame_count, elapsed)
    }
}

pub struct FrameCounter {
    count: u32,
    rate: u32,
    origin: Instant,
    platform: Option<DisplayServer>,
    settings: CounterSettings,
}

impl FrameCounter {
    pub fn new(
        settings: CounterSettings,
        platform: Option<DisplayServer>,
        origin: Instant,
    ) -> Self {
        Self {
            count: 0,
            rate: 0,
            origin,
            platform,
            settings,
        }
    }

    /// Count one iteration observed at `now`.
    ///
    /// Returns a report once `now` is at least one reporting interval past the
    /// current origin; the count and origin are reset before it is returned.
    pub fn tick(&mut self, now: Instant) -> Option<Report> {
        self.count = self.count.saturating_add(1);

        let elapsed = now.saturating_duration_since(self.origin);
        if elapsed < self.settings.report_interval() {
            return None;
        }

        let interval_total = self.count;
        self.rate = interval_total;
        self.count = 0;
        self.origin = now;

        let frame_count = if self.settings.report_interval_totals {
            interval_total
        } else {
            self.count
        };

        Some(Report {
            rate: self.rate,
            frame_count,
            elapsed,
            at: self.origin,
            platform: self.platform,
        })
    }

    /// Iterations counted in the current interval.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Last reported rate.
    pub fn rate(&self) -> u32 {
        self.rate
    }

    pub fn origin(&self) -> Instant {
        self.origin
    }

    pub fn platform(&self) -> Option<DisplayServer> {
        self.platform
    }

    pub fn settings(&self) -> &CounterSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(16);

    /// Tick like the loop does: tick, then sleep one interval.
    fn run_until_report(counter: &mut FrameCounter, now: &mut Instant) -> Report {
        loop {
            let report = counter.tick(*now);
            *now += TICK;
            if let Some(report) = report {
                return report;
            }
        }
    }

    #[test]
    fn test_first_interval_counts_tick_at_origin() {
        let origin = Instant::now();
        let mut now = origin;
        let mut counter = FrameCounter::new(CounterSettings::default(), None, origin);

        let report = run_until_report(&mut counter, &mut now);
        // Ticks land at 0, 16, .., 1008 ms
        assert_eq!(report.rate, 64);
        assert_eq!(report.elapsed, Duration::from_millis(1008));
    }

    #[test]
    fn test_steady_state_rate() {
        let origin = Instant::now();
        let mut now = origin;
        let mut counter =
            FrameCounter::new(CounterSettings::default(), Some(DisplayServer::X11), origin);

        run_until_report(&mut counter, &mut now);
        for _ in 0..5 {
            let report = run_until_report(&mut counter, &mut now);
            assert_eq!(report.rate, 63);
            assert_eq!(counter.rate(), 63);
        }
    }

    #[test]
    fn test_stats_show_post_reset_count() {
        let origin = Instant::now();
        let mut now = origin;
        let mut counter =
            FrameCounter::new(CounterSettings::default(), Some(DisplayServer::Wayland), origin);

        let report = run_until_report(&mut counter, &mut now);
        assert_eq!(report.frame_count, 0);
        assert_eq!(counter.count(), 0);
        assert_eq!(report.fps_text(), "FPS: 64 (Wayland)");
        assert_eq!(
            report.stats_text(ElapsedPrecision::WholeSeconds),
            "Frame count: 0\nElapsed time: 1 s"
        );
    }

    #[test]
    fn test_interval_totals_opt_in() {
        let settings = CounterSettings {
            report_interval_totals: true,
            ..CounterSettings::default()
        };
        let origin = Instant::now();
        let mut now = origin;
        let mut counter = FrameCounter::new(settings, None, origin);

        let report = run_until_report(&mut counter, &mut now);
        assert_eq!(report.frame_count, report.rate);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_centisecond_elapsed() {
        let origin = Instant::now();
        let report = Report {
            rate: 62,
            frame_count: 0,
            elapsed: Duration::from_millis(1008),
            at: origin,
            platform: None,
        };
        assert_eq!(report.fps_text(), "FPS: 62");
        assert_eq!(
            report.stats_text(ElapsedPrecision::Centiseconds),
            "Frame count: 0\nElapsed time: 1.01 s"
        );
    }

    #[test]
    fn test_no_report_before_interval() {
        let origin = Instant::now();
        let mut counter = FrameCounter::new(CounterSettings::default(), None, origin);
        for i in 0..10 {
            assert!(counter.tick(origin + TICK * i).is_none());
        }
        assert_eq!(counter.count(), 10);
        assert_eq!(counter.rate(), 0);
        assert_eq!(counter.origin(), origin);
    }

    #[test]
    fn test_reports_are_ordered_and_spaced() {
        let origin = Instant::now();
        let mut now = origin;
        let mut counter = FrameCounter::new(CounterSettings::default(), None, origin);

        let mut previous = origin;
        for _ in 0..4 {
            let report = run_until_report(&mut counter, &mut now);
            assert!(report.at >= previous);
            assert!(report.at - previous >= Duration::from_secs(1));
            previous = report.at;
        }
    }

    #[test]
    fn test_settings_fill_missing_fields() {
        let settings: CounterSettings =
            serde_json::from_str(r#"{ "report_interval_totals": true }"#).unwrap();
        assert!(settings.report_interval_totals);
        assert_eq!(settings.tick_interval(), TICK);
        assert_eq!(settings.report_interval(), Duration::from_secs(1));
        assert_eq!(settings.elapsed_precision, ElapsedPrecision::WholeSeconds);
    }

    #[test]
    fn test_clock_behind_origin_does_not_report() {
        let origin = Instant::now() + Duration::from_secs(5);
        let mut counter = FrameCounter::new(CounterSettings::default(), None, origin);
        assert!(counter.tick(Instant::now()).is_none());
    }
}
