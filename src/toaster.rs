// SPDX-License-Identifier: MPL-2.0
//! The toast container.
//!
//! The `Toaster` owns every attached toast in display order (oldest first),
//! routes frames and pointer/focus events to them, and restacks a corner
//! whenever a toast is shown, resized or detached.

use crate::config::{Config, LayoutConfig};
use crate::error::{Error, Result};
use crate::stack;
use crate::toast::{
    metrics, FrameOutcome, Position, Toast, ToastDefaults, ToastId, ToastOptions, ToastType,
};
use crate::ui::toast_view;
use iced::{window, Element, Subscription};
use std::time::Instant;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// A frame was presented at the given instant.
    Frame(Instant),
    /// The close control of a toast was clicked.
    Close(ToastId),
    /// Pointer entered a toast.
    PointerEntered(ToastId),
    /// Pointer left a toast.
    PointerLeft(ToastId),
    /// The close control of a toast gained focus.
    CloseFocused(ToastId),
    /// The close control of a toast lost focus.
    CloseBlurred(ToastId),
}

#[derive(Debug, Default)]
pub struct Toaster {
    /// Attached toasts, oldest first.
    toasts: Vec<Toast>,
    defaults: ToastDefaults,
    layout: LayoutConfig,
}

impl Toaster {
    /// Creates an empty toaster with built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty toaster using the `[defaults]` and `[layout]` sections.
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        Self {
            toasts: Vec::new(),
            defaults: config.defaults.clone(),
            layout: config.layout.clone().sanitized(),
        }
    }

    /// Shows a toast. Failures are logged and yield `None`.
    pub fn show(&mut self, options: impl Into<ToastOptions>) -> Option<ToastId> {
        match self.try_show(options) {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::error!(error = %err, "an error occurred while generating the toast");
                None
            }
        }
    }

    /// Shows a toast, returning why it could not be shown.
    ///
    /// The element is inserted as the newest at its corner, the corner is
    /// restacked, and only then does the countdown start.
    pub fn try_show(&mut self, options: impl Into<ToastOptions>) -> Result<ToastId> {
        let resolved = options.into().resolve(&self.defaults);
        let mut toast = Toast::new(resolved).with_fade(self.layout.fade());

        let element = toast.render()?;
        let height = metrics::estimate_height(toast.options(), self.layout.width);
        toast.attach(element, height);

        let id = toast.id();
        let position = toast.position();
        self.toasts.push(toast);
        self.reposition(position);

        if let Some(toast) = self.get_mut(id) {
            toast.begin_timer();
        }

        tracing::debug!(toast = %id, %position, "toast shown");
        Ok(id)
    }

    /// Starts fading a toast out. Returns `false` if it is unknown or not shown.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let removed = self.get_mut(id).is_some_and(Toast::remove);
        if removed {
            tracing::debug!(toast = %id, "toast removing");
        }
        removed
    }

    /// Handles a toast message. `now` timestamps pointer and focus changes.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Frame(at) => self.on_frame(*at),
            Message::Close(id) => {
                self.remove(*id);
            }
            Message::PointerEntered(id) => {
                if let Some(toast) = self.get_mut(*id) {
                    toast.pointer_entered(now);
                }
            }
            Message::PointerLeft(id) => {
                if let Some(toast) = self.get_mut(*id) {
                    toast.pointer_left(now);
                }
            }
            Message::CloseFocused(id) => {
                if let Some(toast) = self.get_mut(*id) {
                    toast.close_focused(now);
                }
            }
            Message::CloseBlurred(id) => {
                if let Some(toast) = self.get_mut(*id) {
                    toast.close_blurred(now);
                }
            }
        }
    }

    /// Delivers a frame to every toast, removing expired ones and detaching
    /// those whose fade has ended.
    pub fn on_frame(&mut self, now: Instant) {
        let mut expired = Vec::new();
        let mut finished = Vec::new();

        for toast in &mut self.toasts {
            match toast.on_frame(now) {
                FrameOutcome::Expired => expired.push(toast.id()),
                FrameOutcome::TransitionEnd => finished.push(toast.id()),
                FrameOutcome::Idle | FrameOutcome::Running => {}
            }
        }

        for id in expired {
            self.remove(id);
        }
        for id in finished {
            self.detach(id);
        }
    }

    /// Drops a toast whose fade has ended and restacks its corner.
    fn detach(&mut self, id: ToastId) {
        let Some(index) = self.toasts.iter().position(|t| t.id() == id) else {
            return;
        };
        let mut toast = self.toasts.remove(index);
        toast.detach();
        self.reposition(toast.position());
        tracing::debug!(toast = %id, "toast detached");
    }

    /// Overrides the height of a toast (e.g. with a measured value) and
    /// restacks its corner.
    pub fn set_height(&mut self, id: ToastId, height: f32) -> Result<()> {
        let toast = self.get_mut(id).ok_or(Error::UnknownToast(id))?;
        toast.set_height(height);
        let position = toast.position();
        self.reposition(position);
        Ok(())
    }

    fn reposition(&mut self, position: Position) {
        stack::reposition(&mut self.toasts, position, self.layout.spacing);
    }

    /// Removes every toast immediately, cancelling all pending frames.
    pub fn clear(&mut self) {
        for toast in &mut self.toasts {
            toast.detach();
        }
        self.toasts.clear();
    }

    /// Subscribes to frames while any toast is counting down or fading.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    /// Renders all attached toasts as a full-window overlay.
    pub fn view(&self) -> Element<'_, Message> {
        toast_view::overlay(self)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.toasts.iter().any(Toast::is_animating)
    }

    /// Attached toasts in display order (oldest first).
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Attached toasts at one corner, oldest first.
    pub fn at(&self, position: Position) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(move |t| t.position() == position)
    }

    /// Number of attached elements with the given position and type.
    #[must_use]
    pub fn count_matching(&self, position: Position, kind: ToastType) -> usize {
        self.at(position)
            .filter(|t| t.element().is_some_and(|e| e.kind == kind))
            .count()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id() == id)
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    #[must_use]
    pub fn defaults(&self) -> &ToastDefaults {
        &self.defaults
    }
}
