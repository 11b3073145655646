// src/benchmark/timing.rs

use std::time::{Duration, Instant};
use crate::core::{Error, Result};

/// Start and stop marks around the measured region of one run.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimingWindow {
    start: Option<Instant>,
    stop: Option<Instant>,
}

impl TimingWindow {
    pub fn new() -> Self {
        TimingWindow::default()
    }

    /// Mark the start. Restarting discards any previous stop mark.
    pub fn start(&mut self) {
        self.start = Some(Instant::now());
        self.stop = None;
    }

    pub fn stop(&mut self) -> Result<Duration> {
        let start = self.start.ok_or(Error::TimerNotStarted)?;
        let stop = Instant::now();
        self.stop = Some(stop);
        Ok(stop.saturating_duration_since(start))
    }

    pub fn is_running(&self) -> bool {
        self.start.is_some() && self.stop.is_none()
    }

    /// Length of the window, once both marks exist.
    pub fn elapsed(&self) -> Option<Duration> {
        match (self.start, self.stop) {
            (Some(start), Some(stop)) => Some(stop.saturating_duration_since(start)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_without_start() {
        let mut window = TimingWindow::new();
        assert!(matches!(window.stop(), Err(Error::TimerNotStarted)));
        assert!(window.elapsed().is_none());
    }

    #[test]
    fn test_window_measures() {
        let mut window = TimingWindow::new();
        window.start();
        assert!(window.is_running());
        std::thread::sleep(Duration::from_millis(5));
        let measured = window.stop().unwrap();
        assert!(!window.is_running());
        assert!(measured >= Duration::from_millis(5));
        assert_eq!(window.elapsed(), Some(measured));
    }

    #[test]
    fn test_restart_clears_stop() {
        let mut window = TimingWindow::new();
        window.start();
        window.stop().unwrap();
        window.start();
        assert!(window.elapsed().is_none());
    }
}
