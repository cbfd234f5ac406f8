//! Success toast lifecycle with a cancellable auto-dismiss deadline

use super::submission::SubmissionReceipt;
use std::time::{Duration, Instant};

/// How long the success toast stays up when left alone
pub const DEFAULT_DISMISS_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
struct ShownToast {
    receipt: SubmissionReceipt,
    shown_at: Instant,
    deadline: Instant,
}

/// Transient "registration sent" notification.
///
/// The auto-dismiss is a deadline checked by [`SuccessToast::tick`]; hiding the
/// toast by hand drops the deadline with it, so a stale timer can never fire.
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessToast {
    delay: Duration,
    current: Option<ShownToast>,
}

impl Default for SuccessToast {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_DELAY)
    }
}

impl SuccessToast {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            current: None,
        }
    }

    /// Show the toast, replacing any previous one and its deadline
    pub fn show(&mut self, receipt: SubmissionReceipt, now: Instant) {
        self.current = Some(ShownToast {
            receipt,
            shown_at: now,
            deadline: now + self.delay,
        });
    }

    /// Hide the toast by hand. Returns true if it was visible.
    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Hide the toast once its deadline has passed. Returns true on the tick that hid it.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(toast) if now >= toast.deadline => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.current.as_ref().map(|t| &t.receipt)
    }

    /// Share of the display time already used, from 0.0 to 1.0
    pub fn elapsed_fraction(&self, now: Instant) -> f64 {
        let Some(toast) = &self.current else {
            return 0.0;
        };
        if self.delay.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(toast.shown_at);
        (elapsed.as_secs_f64() / self.delay.as_secs_f64()).clamp(0.0, 1.0)
    }
}
