// SPDX-License-Identifier: MPL-2.0
//! Toast options and their resolution against defaults.
//!
//! [`ToastOptions`] is what callers hand to the toaster: only `text` is
//! required. [`ToastOptions::resolve`] fills every unset field from
//! [`ToastDefaults`], producing the [`ResolvedOptions`] a toast keeps for its
//! whole life.

use crate::config::defaults::{
    DEFAULT_DISMISSABLE, DEFAULT_DRAGGABLE, DEFAULT_DURATION_MS, DEFAULT_PAUSE_ON_HOVER,
    DEFAULT_SHOW_TIMER,
};
use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Screen corner a toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

/// Window edge a stack grows away from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Horizontal side of the window a stack hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::BottomRight,
        Position::BottomLeft,
        Position::TopRight,
        Position::TopLeft,
    ];

    /// The edge offsets are measured from.
    #[must_use]
    pub fn edge(self) -> Edge {
        match self {
            Position::BottomRight | Position::BottomLeft => Edge::Bottom,
            Position::TopRight | Position::TopLeft => Edge::Top,
        }
    }

    #[must_use]
    pub fn side(self) -> Side {
        match self {
            Position::BottomRight | Position::TopRight => Side::Right,
            Position::BottomLeft | Position::TopLeft => Side::Left,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
            Position::TopRight => "top-right",
            Position::TopLeft => "top-left",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidPosition(s.to_string()))
    }
}

/// Semantic type of a toast; selects its accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
    #[default]
    Default,
}

impl ToastType {
    pub const ALL: [ToastType; 5] = [
        ToastType::Success,
        ToastType::Error,
        ToastType::Warning,
        ToastType::Info,
        ToastType::Default,
    ];

    /// Returns the accent color for this type.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ToastType::Success => palette::SUCCESS_500,
            ToastType::Error => palette::ERROR_500,
            ToastType::Warning => palette::WARNING_500,
            ToastType::Info => palette::INFO_500,
            ToastType::Default => palette::GRAY_400,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastType::Success => "success",
            ToastType::Error => "error",
            ToastType::Warning => "warning",
            ToastType::Info => "info",
            ToastType::Default => "default",
        }
    }
}

impl fmt::Display for ToastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToastType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToastType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidType(s.to_string()))
    }
}

/// Fallback values used for every option a caller leaves unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastDefaults {
    pub position: Position,
    #[serde(rename = "type")]
    pub kind: ToastType,
    pub duration_ms: u64,
    pub dismissable: bool,
    pub draggable: bool,
    pub show_timer: bool,
    pub pause_on_hover: bool,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            position: Position::default(),
            kind: ToastType::default(),
            duration_ms: DEFAULT_DURATION_MS,
            dismissable: DEFAULT_DISMISSABLE,
            draggable: DEFAULT_DRAGGABLE,
            show_timer: DEFAULT_SHOW_TIMER,
            pause_on_hover: DEFAULT_PAUSE_ON_HOVER,
        }
    }
}

/// Options for a single toast, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToastOptions {
    /// Body text. Required and must not be blank.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ToastType>,
    /// Time on screen in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_timer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_on_hover: Option<bool>,
}

impl ToastOptions {
    /// Creates options carrying only the body text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the time on screen in milliseconds.
    #[must_use]
    pub fn duration(mut self, millis: u64) -> Self {
        self.duration = Some(millis);
        self
    }

    #[must_use]
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = Some(dismissable);
        self
    }

    #[must_use]
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = Some(draggable);
        self
    }

    #[must_use]
    pub fn show_timer(mut self, show_timer: bool) -> Self {
        self.show_timer = Some(show_timer);
        self
    }

    #[must_use]
    pub fn pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = Some(pause_on_hover);
        self
    }

    /// Fills every unset field from `defaults`.
    #[must_use]
    pub fn resolve(self, defaults: &ToastDefaults) -> ResolvedOptions {
        ResolvedOptions {
            text: self.text,
            heading: self.heading,
            position: self.position.unwrap_or(defaults.position),
            kind: self.kind.unwrap_or(defaults.kind),
            duration: Duration::from_millis(self.duration.unwrap_or(defaults.duration_ms)),
            dismissable: self.dismissable.unwrap_or(defaults.dismissable),
            draggable: self.draggable.unwrap_or(defaults.draggable),
            show_timer: self.show_timer.unwrap_or(defaults.show_timer),
            pause_on_hover: self.pause_on_hover.unwrap_or(defaults.pause_on_hover),
        }
    }
}

impl From<&str> for ToastOptions {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Fully resolved options owned by a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub text: String,
    pub heading: Option<String>,
    pub position: Position,
    pub kind: ToastType,
    pub duration: Duration,
    pub dismissable: bool,
    pub draggable: bool,
    pub show_timer: bool,
    pub pause_on_hover: bool,
}
