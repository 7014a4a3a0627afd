// SPDX-License-Identifier: MPL-2.0
//! Toast model: options, lifecycle and countdown.
//!
//! # Components
//!
//! - [`options`] - `ToastOptions`, corner `Position`, semantic `ToastType`
//! - [`instance`] - `Toast` with its `Created → Shown → FadingOut → Detached` lifecycle
//! - [`timer`] - Frame-driven countdown with hover/focus pause flags
//! - [`metrics`] - Content-based height estimate used for stacking

pub mod instance;
pub mod metrics;
pub mod options;
pub mod timer;

pub use instance::{Element, FrameOutcome, Phase, Toast, ToastId};
pub use options::{Edge, Position, ResolvedOptions, Side, ToastDefaults, ToastOptions, ToastType};
pub use timer::{DismissTimer, FrameHandle, PauseReason, Tick};
