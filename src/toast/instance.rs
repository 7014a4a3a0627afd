// SPDX-License-Identifier: MPL-2.0
//! A single toast and its lifecycle.
//!
//! `Created → Shown → FadingOut → Detached`. A toast is attached by the
//! [`Toaster`](crate::toaster::Toaster), counts down while shown, fades its
//! opacity to zero once removed and is detached when the fade ends.

use super::options::{Position, ResolvedOptions, ToastType};
use super::timer::{DismissTimer, PauseReason, Tick};
use crate::config::defaults::DEFAULT_FADE_MS;
use crate::error::{Error, Result};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    Shown,
    FadingOut,
    Detached,
}

/// The element tree produced by [`Toast::render`].
///
/// Carries the attributes the container queries by (`position`, `kind`) and
/// which optional parts are present.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub position: Position,
    pub kind: ToastType,
    pub heading: String,
    pub body: String,
    pub close_control: bool,
    pub drag_handle: bool,
    pub timer_bar: bool,
}

/// What a delivered frame did to the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nothing was waiting on this frame.
    Idle,
    /// Countdown or fade still in progress.
    Running,
    /// The countdown ran out; the toast should be removed.
    Expired,
    /// The fade finished; the toast should be detached.
    TransitionEnd,
}

#[derive(Debug, Clone, Copy)]
struct Fade {
    duration: Duration,
    started_at: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    options: ResolvedOptions,
    phase: Phase,
    element: Option<Element>,
    timer: DismissTimer,
    fade_duration: Duration,
    fade: Option<Fade>,
    opacity: f32,
    height: f32,
    offset: f32,
}

impl Toast {
    /// Creates a toast from resolved options. Nothing is displayed yet.
    #[must_use]
    pub fn new(options: ResolvedOptions) -> Self {
        let timer = DismissTimer::new(options.duration);
        Self {
            id: ToastId::new(),
            options,
            phase: Phase::Created,
            element: None,
            timer,
            fade_duration: Duration::from_millis(DEFAULT_FADE_MS),
            fade: None,
            opacity: 1.0,
            height: 0.0,
            offset: 0.0,
        }
    }

    /// Sets how long the fade-out transition lasts.
    #[must_use]
    pub fn with_fade(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    /// Builds the element tree for this toast.
    pub fn render(&self) -> Result<Element> {
        if self.phase != Phase::Created {
            return Err(Error::AlreadyShown(self.id));
        }
        if self.options.text.trim().is_empty() {
            return Err(Error::EmptyText);
        }

        let element = Element {
            position: self.options.position,
            kind: self.options.kind,
            heading: self.options.heading.clone().unwrap_or_default(),
            body: self.options.text.clone(),
            close_control: self.options.dismissable,
            drag_handle: self.options.draggable,
            timer_bar: self.options.show_timer,
        };

        if element.drag_handle {
            self.make_draggable();
        }

        Ok(element)
    }

    fn make_draggable(&self) {
        // Dragging is not implemented; the affordance is accepted and ignored.
        tracing::trace!(toast = %self.id, "drag affordance requested");
    }

    /// Inserts the rendered element. The countdown is started separately by
    /// [`Toast::begin_timer`] once siblings have been repositioned.
    pub(crate) fn attach(&mut self, element: Element, height: f32) {
        self.element = Some(element);
        self.height = height;
        self.phase = Phase::Shown;
    }

    pub(crate) fn begin_timer(&mut self) {
        if self.phase == Phase::Shown {
            self.timer.start();
        }
    }

    /// Delivers a frame timestamp to the countdown or the fade.
    pub fn on_frame(&mut self, now: Instant) -> FrameOutcome {
        match self.phase {
            Phase::Shown => match self.timer.on_frame(now) {
                Tick::Idle => FrameOutcome::Idle,
                Tick::Running { .. } => FrameOutcome::Running,
                Tick::Expired => FrameOutcome::Expired,
            },
            Phase::FadingOut => self.advance_fade(now),
            Phase::Created | Phase::Detached => FrameOutcome::Idle,
        }
    }

    fn advance_fade(&mut self, now: Instant) -> FrameOutcome {
        let Some(fade) = self.fade.as_mut() else {
            return FrameOutcome::Idle;
        };
        let started_at = *fade.started_at.get_or_insert(now);
        let progress = if fade.duration.is_zero() {
            1.0
        } else {
            now.saturating_duration_since(started_at).as_secs_f32() / fade.duration.as_secs_f32()
        };

        self.opacity = (1.0 - progress).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.fade = None;
            FrameOutcome::TransitionEnd
        } else {
            FrameOutcome::Running
        }
    }

    /// Pointer entered the toast.
    pub fn pointer_entered(&mut self, now: Instant) {
        self.pause(PauseReason::Hover, now);
    }

    /// Pointer left the toast.
    pub fn pointer_left(&mut self, now: Instant) {
        self.release(PauseReason::Hover, now);
    }

    /// The close control gained focus.
    pub fn close_focused(&mut self, now: Instant) {
        self.pause(PauseReason::Focus, now);
    }

    /// The close control lost focus.
    pub fn close_blurred(&mut self, now: Instant) {
        self.release(PauseReason::Focus, now);
    }

    fn pause(&mut self, reason: PauseReason, now: Instant) {
        if self.options.pause_on_hover && self.phase == Phase::Shown {
            self.timer.pause(reason, now);
        }
    }

    fn release(&mut self, reason: PauseReason, now: Instant) {
        if self.options.pause_on_hover && self.phase == Phase::Shown {
            self.timer.release(reason, now);
        }
    }

    /// Cancels the countdown and starts fading out.
    ///
    /// Returns `false` when the toast is not shown (never attached, already
    /// fading or detached); nothing changes in that case.
    pub fn remove(&mut self) -> bool {
        if self.element.is_none() || self.phase != Phase::Shown {
            return false;
        }
        self.timer.stop();
        self.phase = Phase::FadingOut;
        self.fade = Some(Fade {
            duration: self.fade_duration,
            started_at: None,
        });
        true
    }

    /// Ends the fade: drops the element and any pending frame.
    pub(crate) fn detach(&mut self) {
        self.timer.stop();
        self.fade = None;
        self.element = None;
        self.opacity = 0.0;
        self.phase = Phase::Detached;
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.options.position
    }

    #[must_use]
    pub fn kind(&self) -> ToastType {
        self.options.kind
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    /// Whether the toast occupies space in its corner's stack.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        matches!(self.phase, Phase::Shown | Phase::FadingOut)
    }

    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.timer.pending_frame().is_some()
    }

    /// Whether the toast still wants frame ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.has_pending_frame() || self.phase == Phase::FadingOut
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.timer.is_paused()
    }

    #[must_use]
    pub fn remaining_fraction(&self) -> f32 {
        self.timer.remaining_fraction()
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub(crate) fn set_height(&mut self, height: f32) {
        self.height = height.max(0.0);
    }

    /// Distance from the corner's edge, assigned by the stack.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub(crate) fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::options::{ToastDefaults, ToastOptions};

    fn toast(options: ToastOptions) -> Toast {
        Toast::new(options.resolve(&ToastDefaults::default()))
    }

    fn shown(options: ToastOptions) -> Toast {
        let mut toast = toast(options);
        let element = toast.render().expect("render should succeed");
        toast.attach(element, 60.0);
        toast.begin_timer();
        toast
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn toast_ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }

    #[test]
    fn render_builds_optional_parts_from_options() {
        let element = toast(
            ToastOptions::new("Body")
                .heading("Head")
                .dismissable(false)
                .draggable(false)
                .show_timer(true),
        )
        .render()
        .unwrap();

        assert_eq!(element.heading, "Head");
        assert_eq!(element.body, "Body");
        assert!(!element.close_control);
        assert!(!element.drag_handle);
        assert!(element.timer_bar);
    }

    #[test]
    fn render_rejects_blank_text() {
        assert_eq!(toast(ToastOptions::new("   ")).render(), Err(Error::EmptyText));
    }

    #[test]
    fn render_rejects_attached_toast() {
        let toast = shown(ToastOptions::new("x"));
        assert_eq!(toast.render(), Err(Error::AlreadyShown(toast.id())));
    }

    #[test]
    fn shown_toast_expires_after_duration() {
        let t0 = Instant::now();
        let mut toast = shown(ToastOptions::new("x").duration(500));

        assert_eq!(toast.on_frame(t0), FrameOutcome::Running);
        assert_eq!(toast.on_frame(t0 + ms(499)), FrameOutcome::Running);
        assert_eq!(toast.on_frame(t0 + ms(500)), FrameOutcome::Expired);
    }

    #[test]
    fn remove_cancels_pending_frame_and_fades() {
        let t0 = Instant::now();
        let mut toast = shown(ToastOptions::new("x")).with_fade(ms(200));
        toast.on_frame(t0);
        assert!(toast.has_pending_frame());

        assert!(toast.remove());
        assert!(!toast.has_pending_frame());
        assert_eq!(toast.phase(), Phase::FadingOut);

        assert_eq!(toast.on_frame(t0 + ms(10)), FrameOutcome::Running);
        assert_eq!(toast.on_frame(t0 + ms(110)), FrameOutcome::Running);
        assert!((toast.opacity() - 0.5).abs() < 1e-3);
        assert_eq!(toast.on_frame(t0 + ms(210)), FrameOutcome::TransitionEnd);
        assert_eq!(toast.opacity(), 0.0);
    }

    #[test]
    fn remove_is_a_noop_unless_shown() {
        let mut created = toast(ToastOptions::new("x"));
        assert!(!created.remove());

        let mut fading = shown(ToastOptions::new("x"));
        assert!(fading.remove());
        assert!(!fading.remove());
    }

    #[test]
    fn hover_during_fade_does_not_rearm_timer() {
        let t0 = Instant::now();
        let mut toast = shown(ToastOptions::new("x"));
        toast.pointer_entered(t0);
        toast.remove();
        toast.pointer_left(t0 + ms(50));
        assert!(!toast.has_pending_frame());
    }

    #[test]
    fn pause_on_hover_disabled_ignores_pointer() {
        let t0 = Instant::now();
        let mut toast = shown(ToastOptions::new("x").pause_on_hover(false));
        toast.on_frame(t0);
        toast.pointer_entered(t0 + ms(10));
        assert!(!toast.is_paused());
        assert!(toast.has_pending_frame());
    }

    #[test]
    fn pause_on_hover_disabled_ignores_focus() {
        let t0 = Instant::now();
        let mut toast = shown(ToastOptions::new("x").pause_on_hover(false));
        toast.on_frame(t0);

        toast.close_focused(t0 + ms(10));
        assert!(!toast.is_paused());
        assert!(toast.has_pending_frame());

        toast.close_blurred(t0 + ms(20));
        assert!(toast.has_pending_frame());
    }

    #[test]
    fn focus_keeps_toast_paused_after_pointer_leaves() {
        let t0 = Instant::now();
        let mut toast = shown(ToastOptions::new("x"));
        toast.on_frame(t0);

        toast.pointer_entered(t0 + ms(10));
        toast.close_focused(t0 + ms(20));
        toast.pointer_left(t0 + ms(30));
        assert!(toast.is_paused());

        toast.close_blurred(t0 + ms(40));
        assert!(!toast.is_paused());
        assert!(toast.has_pending_frame());
    }

    #[test]
    fn detach_clears_element() {
        let mut toast = shown(ToastOptions::new("x"));
        toast.remove();
        toast.detach();
        assert!(toast.element().is_none());
        assert!(!toast.is_attached());
        assert!(!toast.is_animating());
    }
}
