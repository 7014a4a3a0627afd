// SPDX-License-Identifier: MPL-2.0
//! Frame-driven dismissal countdown.
//!
//! The countdown advances only when a frame it requested is delivered. The
//! first frame fixes the start time; later frames compute
//! `elapsed = now - start - paused_total`. Pausing cancels the pending frame
//! request and remembers when the pause began; resuming folds the paused
//! interval into `paused_total` and requests a new frame.
//!
//! Hover and focus are tracked as independent pause flags: either one pauses,
//! and the countdown resumes only once both are clear.

use std::time::{Duration, Instant};

/// Token for a requested frame. A timer holds at most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(u64);

/// Outcome of delivering a frame to the timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// No frame was pending; the delivery was ignored.
    Idle,
    /// Time remains; another frame has been requested.
    Running { remaining: Duration },
    /// The countdown reached zero. No frame is pending anymore.
    Expired,
}

/// Which interaction is holding the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseReason {
    Hover,
    Focus,
}

#[derive(Debug, Clone)]
pub struct DismissTimer {
    duration: Duration,
    started_at: Option<Instant>,
    paused_since: Option<Instant>,
    paused_total: Duration,
    remaining: Duration,
    frame: Option<FrameHandle>,
    next_handle: u64,
    hover_paused: bool,
    focus_paused: bool,
    paused: bool,
    stopped: bool,
}

impl DismissTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started_at: None,
            paused_since: None,
            paused_total: Duration::ZERO,
            remaining: duration,
            frame: None,
            next_handle: 0,
            hover_paused: false,
            focus_paused: false,
            paused: false,
            stopped: false,
        }
    }

    /// Requests the first frame. Does nothing once started or stopped.
    pub fn start(&mut self) {
        if self.stopped || self.frame.is_some() || self.started_at.is_some() {
            return;
        }
        self.request_frame();
    }

    fn request_frame(&mut self) {
        self.next_handle += 1;
        self.frame = Some(FrameHandle(self.next_handle));
    }

    /// Delivers a frame timestamp.
    pub fn on_frame(&mut self, now: Instant) -> Tick {
        if self.frame.take().is_none() {
            return Tick::Idle;
        }

        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now
            .saturating_duration_since(started_at)
            .saturating_sub(self.paused_total);
        self.remaining = self.duration.saturating_sub(elapsed);

        if self.remaining.is_zero() {
            Tick::Expired
        } else {
            self.request_frame();
            Tick::Running {
                remaining: self.remaining,
            }
        }
    }

    /// Raises a pause flag and halts the countdown if it was running.
    pub fn pause(&mut self, reason: PauseReason, now: Instant) {
        match reason {
            PauseReason::Hover => self.hover_paused = true,
            PauseReason::Focus => self.focus_paused = true,
        }
        if !self.paused {
            self.paused = true;
            if self.frame.take().is_some() {
                self.paused_since = Some(now);
            }
        }
    }

    /// Clears a pause flag and resumes if no other flag holds the countdown.
    pub fn release(&mut self, reason: PauseReason, now: Instant) {
        match reason {
            PauseReason::Hover => self.hover_paused = false,
            PauseReason::Focus => self.focus_paused = false,
        }
        if !self.hover_paused && !self.focus_paused && self.paused {
            self.paused = false;
            self.resume(now);
        }
    }

    fn resume(&mut self, now: Instant) {
        let Some(since) = self.paused_since.take() else {
            return;
        };
        // Before the first frame there is no start time to shift.
        if self.started_at.is_some() {
            self.paused_total += now.saturating_duration_since(since);
        }
        if !self.stopped {
            self.request_frame();
        }
    }

    /// Drops the pending frame request, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.frame.take().is_some()
    }

    /// Cancels the pending frame and prevents any future request.
    pub fn stop(&mut self) -> bool {
        self.stopped = true;
        self.cancel()
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frame
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Remaining time as of the last delivered frame.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Remaining fraction in `0.0..=1.0`, as drawn by the timer-bar.
    #[must_use]
    pub fn remaining_fraction(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.remaining.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}
