use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownSignal {
    /// Whole seconds elapsed since the countdown started
    Tick(u64),
    Timeout,
}

/// Counts down a fixed number of seconds once started.
///
/// Time is passed in by the caller so the countdown can be driven from a ticker
/// or from tests. Every whole second produces exactly one `Tick`, and the final
/// tick is followed by a single `Timeout`.
#[derive(Debug, Clone)]
pub struct Countdown {
    total_secs: u64,
    started_at: Option<Instant>,
    last_reported: u64,
    timed_out: bool,
}

impl Countdown {
    pub fn new(total_secs: u64) -> Self {
        Self {
            total_secs,
            started_at: None,
            last_reported: 0,
            timed_out: false,
        }
    }

    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && !self.timed_out
    }

    pub fn has_timed_out(&self) -> bool {
        self.timed_out
    }

    fn elapsed_secs(&self, now: Instant) -> u64 {
        self.started_at
            .map(|started| now.saturating_duration_since(started).as_secs())
            .unwrap_or(0)
            .min(self.total_secs)
    }

    pub fn seconds_remaining(&self, now: Instant) -> u64 {
        if self.timed_out {
            return 0;
        }
        self.total_secs - self.elapsed_secs(now)
    }

    /// Signals for every second that elapsed since the previous poll.
    pub fn poll(&mut self, now: Instant) -> Vec<CountdownSignal> {
        if !self.is_running() {
            return Vec::new();
        }

        let elapsed = self.elapsed_secs(now);
        let mut signals: Vec<CountdownSignal> = (self.last_reported + 1..=elapsed)
            .map(CountdownSignal::Tick)
            .collect();
        self.last_reported = elapsed;

        if elapsed >= self.total_secs {
            self.timed_out = true;
            signals.push(CountdownSignal::Timeout);
        }

        signals
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.total_secs);
    }
}
