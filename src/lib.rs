// SPDX-License-Identifier: MPL-2.0
//! `palm_toast` shows transient notifications ("toasts") in an Iced window.
//!
//! A [`Toaster`](toaster::Toaster) owns the toasts: it shows them at one of
//! four corners, stacks them so they never overlap, counts each one down
//! (pausing while hovered or focused) and fades it out when it expires or
//! is closed.
//!
//! ```no_run
//! use palm_toast::toast::{Position, ToastOptions, ToastType};
//! use palm_toast::toaster::Toaster;
//!
//! let mut toaster = Toaster::new();
//! toaster.show(
//!     ToastOptions::new("Saved")
//!         .heading("Settings")
//!         .kind(ToastType::Success)
//!         .position(Position::TopRight),
//! );
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod stack;
pub mod toast;
pub mod toaster;
pub mod ui;

pub use error::{Error, Result};
