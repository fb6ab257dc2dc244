//! Poll loop
//!
//! One cycle is fetch → validate → interpret → notify-if-changed. Cycles run
//! strictly one after another with a fixed sleep in between. The only state
//! carried across cycles is the last message delivered, held in [`PollState`].

use std::any::Any;
use std::ops::ControlFlow;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use crate::core::ports::{Notifier, ReviewApi};
use crate::core::services::{describe, validate};
use crate::error::{ErrorKind, RelayError};

/// Message computed when the API reports no homework
pub const NO_HOMEWORK: &str = "No homework";

/// Prefix put in front of every outbound notification
pub const NOTIFICATION_PREFIX: &str = "Attention! New HW status: ";

/// Default pause between two cycles
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_mins(10);

/// Dedup state threaded through the loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Last message successfully delivered; empty until the first delivery
    pub last_message: String,
}

/// What a single cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The message changed and was delivered
    Notified,
    /// The message matched the last one; nothing was sent
    Unchanged,
    /// The cycle was abandoned; the error has been logged
    Failed(ErrorKind),
}

/// Drives the review API and the notifier
#[derive(Debug)]
pub struct Poller<A, N> {
    api: A,
    notifier: N,
    from_date: i64,
    retry_period: Duration,
    advance_timestamp: bool,
    state: PollState,
    clock: fn() -> i64,
    sleep: fn(Duration),
}

/// Current Unix time in seconds
#[must_use]
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

impl<A: ReviewApi, N: Notifier> Poller<A, N> {
    /// Create a poller asking for statuses changed since `from_date`
    pub fn new(api: A, notifier: N, from_date: i64) -> Self {
        Self {
            api,
            notifier,
            from_date,
            retry_period: DEFAULT_RETRY_PERIOD,
            advance_timestamp: false,
            state: PollState::default(),
            clock: unix_now,
            sleep: std::thread::sleep,
        }
    }

    /// Set the pause between cycles
    #[must_use]
    pub const fn with_retry_period(mut self, retry_period: Duration) -> Self {
        self.retry_period = retry_period;
        self
    }

    /// Move `from_date` forward after every cycle that completes cleanly
    #[must_use]
    pub const fn with_advance_timestamp(mut self, advance: bool) -> Self {
        self.advance_timestamp = advance;
        self
    }

    /// Start from an existing dedup state
    #[must_use]
    pub fn with_state(mut self, state: PollState) -> Self {
        self.state = state;
        self
    }

    /// Replace the time source
    #[must_use]
    pub const fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the sleep function
    #[must_use]
    pub const fn with_sleep(mut self, sleep: fn(Duration)) -> Self {
        self.sleep = sleep;
        self
    }

    /// Current dedup state
    #[must_use]
    pub const fn state(&self) -> &PollState {
        &self.state
    }

    /// Timestamp sent as `from_date` on the next fetch
    #[must_use]
    pub const fn from_date(&self) -> i64 {
        self.from_date
    }

    /// Fetch, validate and interpret the latest status
    ///
    /// Only the first record is interpreted; the API lists the most recent
    /// homework first.
    pub fn compute_message(&self) -> Result<String, RelayError> {
        let response = self.api.fetch_statuses(self.from_date)?;
        let homeworks = validate(&response)?;
        homeworks
            .first()
            .map_or_else(|| Ok(NO_HOMEWORK.to_string()), describe)
    }

    /// One cycle with errors propagated to the caller
    pub fn step(&mut self) -> Result<CycleOutcome, RelayError> {
        let polled_at = (self.clock)();
        let message = self.compute_message()?;

        let outcome = if message == self.state.last_message {
            log::debug!("Status unchanged, nothing to send");
            CycleOutcome::Unchanged
        } else {
            self.notifier.notify(&format!("{NOTIFICATION_PREFIX}{message}"))?;
            self.state.last_message = message;
            CycleOutcome::Notified
        };

        if self.advance_timestamp {
            self.from_date = polled_at;
        }
        Ok(outcome)
    }

    /// One cycle with errors confined to it
    ///
    /// A panic inside the cycle is reported as [`RelayError::Other`]. Breaks
    /// only for errors whose kind is fatal.
    pub fn run_cycle(&mut self) -> ControlFlow<RelayError, CycleOutcome> {
        // `last_message` is written only after a successful send, so a
        // panicking cycle leaves the state as it was.
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.step()))
            .unwrap_or_else(|payload| Err(RelayError::Other(panic_message(payload.as_ref()))));

        match result {
            Ok(outcome) => ControlFlow::Continue(outcome),
            Err(e) if e.kind().is_fatal() => ControlFlow::Break(e),
            Err(e) => {
                log::error!("Program failure [{}]: {e}", e.kind());
                ControlFlow::Continue(CycleOutcome::Failed(e.kind()))
            },
        }
    }

    /// Run cycles until `max_cycles` have completed, or forever when `None`
    ///
    /// Sleeps the retry period after every cycle that is followed by another.
    pub fn run(&mut self, max_cycles: Option<u64>) -> Result<(), RelayError> {
        log::info!(
            "Polling every {}s for statuses since {}",
            self.retry_period.as_secs(),
            self.from_date
        );

        let mut completed: u64 = 0;
        loop {
            if let ControlFlow::Break(e) = self.run_cycle() {
                log::error!("Stopping: {e}");
                return Err(e);
            }
            completed += 1;
            if max_cycles.is_some_and(|max| completed >= max) {
                return Ok(());
            }
            (self.sleep)(self.retry_period);
        }
    }
}

/// Text of a panic payload
fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .map_or_else(|| "panic in poll cycle".to_string(), |s| format!("panic: {s}"))
}
